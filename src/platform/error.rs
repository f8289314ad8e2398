//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// GPIO operation failed
    Gpio(GpioError),
    /// Platform initialization failed
    InitializationFailed,
    /// Invalid configuration provided
    InvalidConfig,
}

impl PlatformError {
    /// Static description for defmt logging
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformError::Gpio(GpioError::InvalidPin) => "GPIO error: invalid pin",
            PlatformError::Gpio(GpioError::InvalidMode) => "GPIO error: invalid mode",
            PlatformError::Gpio(GpioError::PinInUse) => "GPIO error: pin in use",
            PlatformError::Gpio(GpioError::HardwareError) => "GPIO error: hardware fault",
            PlatformError::InitializationFailed => "Platform initialization failed",
            PlatformError::InvalidConfig => "Invalid configuration",
        }
    }
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Invalid pin number
    InvalidPin,
    /// Invalid mode for operation
    InvalidMode,
    /// Pin already in use
    PinInUse,
    /// Driver reported a failure
    HardwareError,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
