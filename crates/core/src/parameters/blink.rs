//! Blink Parameter Definitions
//!
//! # Parameters
//!
//! - `BLINK_INTERVAL` - Ticks per half-period of the blink waveform.
//!   `0` keeps the output OFF even while blinking is enabled.

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamMetadata, ParameterStore};
use crate::traits::{ParamValid, ParameterProvider};

/// Blink interval parameter name
pub const BLINK_INTERVAL: &str = "BLINK_INTERVAL";

/// Default interval in ticks (500 ms half-period at a 100 ms tick)
pub const DEFAULT_INTERVAL: u32 = 5;

/// Maximum interval in ticks
pub const MAX_INTERVAL: u32 = 10_000;

/// Blink parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkParams {
    /// Ticks per half-period
    pub interval: u32,
}

impl Default for BlinkParams {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl BlinkParams {
    /// Register blink parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            BLINK_INTERVAL,
            ParamMetadata::new(Some(DEFAULT_INTERVAL), 0, MAX_INTERVAL, ParamFlags::empty()),
        )
    }

    /// Load blink parameters from parameter store
    ///
    /// Falls back to defaults when the stored value is missing or invalid.
    pub fn from_store(store: &ParameterStore) -> Self {
        match store.read(BLINK_INTERVAL) {
            (interval, ParamValid::Valid) => Self { interval },
            _ => Self::default(),
        }
    }
}

impl ParameterProvider for ParameterStore {
    fn blink_interval(&self) -> (u32, ParamValid) {
        self.read(BLINK_INTERVAL)
    }
}
