//! Blink controller error types

use core::fmt;

use crate::traits::ParamValid;

/// Wiring or configuration defect detected by the controller
///
/// None of these are recoverable at runtime. The core reports them as values;
/// the component layer decides to abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationFault {
    /// Blink interval read back as invalid or uninitialized
    InvalidInterval(ParamValid),
    /// Change notification named a parameter this controller does not own
    UnknownParameter,
}

impl ConfigurationFault {
    /// Static description for targets without `Display` formatting
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigurationFault::InvalidInterval(ParamValid::Uninit) => {
                "blink interval uninitialized"
            }
            ConfigurationFault::InvalidInterval(_) => "blink interval invalid",
            ConfigurationFault::UnknownParameter => "unknown parameter id",
        }
    }
}

impl fmt::Display for ConfigurationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationFault::InvalidInterval(validity) => {
                write!(f, "blink interval not usable ({:?})", validity)
            }
            ConfigurationFault::UnknownParameter => write!(f, "unknown parameter id"),
        }
    }
}
