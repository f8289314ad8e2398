//! Parameter provider abstraction
//!
//! The controller reads its interval through this trait on every tick. The
//! provider owns storage and validation; see
//! [`crate::parameters::ParameterStore`] for the standard implementation.

/// Validity of a parameter read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValid {
    /// Never registered or never given a value
    Uninit,
    /// Present and within bounds
    Valid,
    /// Present but rejected by validation (e.g. out of bounds after a raw load)
    Invalid,
}

/// Source of the blink interval
pub trait ParameterProvider {
    /// Current interval in ticks per half-period, with its validity
    fn blink_interval(&self) -> (u32, ParamValid);
}

impl<P: ParameterProvider + ?Sized> ParameterProvider for &P {
    fn blink_interval(&self) -> (u32, ParamValid) {
        (**self).blink_interval()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock parameter provider with a settable interval and validity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockParams {
    interval: u32,
    validity: ParamValid,
}

impl MockParams {
    /// Provider returning a valid interval
    pub const fn new(interval: u32) -> Self {
        Self {
            interval,
            validity: ParamValid::Valid,
        }
    }

    /// Provider that was never initialized
    pub const fn uninit() -> Self {
        Self {
            interval: 0,
            validity: ParamValid::Uninit,
        }
    }

    /// Provider holding a value that failed validation
    pub const fn invalid(interval: u32) -> Self {
        Self {
            interval,
            validity: ParamValid::Invalid,
        }
    }

    /// Replace the interval, marking it valid
    pub fn set_interval(&mut self, interval: u32) {
        self.interval = interval;
        self.validity = ParamValid::Valid;
    }

    pub fn set_validity(&mut self, validity: ParamValid) {
        self.validity = validity;
    }
}

impl ParameterProvider for MockParams {
    fn blink_interval(&self) -> (u32, ParamValid) {
        (self.interval, self.validity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_params_valid() {
        let params = MockParams::new(7);
        assert_eq!(params.blink_interval(), (7, ParamValid::Valid));
    }

    #[test]
    fn test_mock_params_uninit() {
        let params = MockParams::uninit();
        assert_eq!(params.blink_interval().1, ParamValid::Uninit);
    }

    #[test]
    fn test_mock_params_set_interval_revalidates() {
        let mut params = MockParams::invalid(99);
        assert_eq!(params.blink_interval(), (99, ParamValid::Invalid));

        params.set_interval(3);
        assert_eq!(params.blink_interval(), (3, ParamValid::Valid));

        params.set_validity(ParamValid::Invalid);
        assert_eq!(params.blink_interval(), (3, ParamValid::Invalid));
    }
}
