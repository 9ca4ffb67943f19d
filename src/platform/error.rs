//! Platform error types
//!
//! This module defines error types for host capability operations.

use thiserror::Error;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All host implementations map their native failures (browser exceptions,
/// engine errors) to these variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// Capability is missing on this host
    #[error("{0} is not supported on this host")]
    Unsupported(&'static str),

    /// Speech engine rejected the utterance
    #[error("speech synthesis failed: {0}")]
    Speech(String),

    /// External link could not be opened
    #[error("could not open {url}: {reason}")]
    OpenUrl {
        /// Link that failed
        url: String,
        /// Host-provided reason
        reason: String,
    },

    /// Any other host failure
    #[error("host error: {0}")]
    Host(String),
}
