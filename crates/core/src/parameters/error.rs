//! Parameter error types
//!
//! Provides error types for host setting updates.

/// Errors from parsing or validating navigator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Value is not one of the accepted names (e.g., unknown travel mode)
    UnknownValue,
    /// Numeric value outside its accepted range
    OutOfRange,
    /// Value is NaN or infinite
    NotFinite,
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParameterError::UnknownValue => write!(f, "unknown parameter value"),
            ParameterError::OutOfRange => write!(f, "parameter out of range"),
            ParameterError::NotFinite => write!(f, "parameter is not a finite number"),
        }
    }
}
