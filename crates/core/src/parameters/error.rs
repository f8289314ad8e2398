//! Parameter error types
//!
//! Provides error types for parameter store operations.

/// Errors from parameter store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Name longer than `PARAM_NAME_LEN`
    InvalidName,
    /// Parameter was never registered
    NotFound,
    /// Value outside the registered bounds
    OutOfRange,
    /// Read-only parameter cannot be modified
    ReadOnly,
    /// Store is full
    StoreFull,
}

impl ParameterError {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterError::InvalidName => "invalid parameter name",
            ParameterError::NotFound => "parameter not found",
            ParameterError::OutOfRange => "parameter value out of range",
            ParameterError::ReadOnly => "parameter is read-only",
            ParameterError::StoreFull => "parameter store full",
        }
    }
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
