//! Platform abstraction layer
//!
//! This module provides the host capabilities the navigator depends on.
//! All host-specific code (browser APIs, speech engines) lives behind these
//! traits, in the web crate or in test mocks.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{
    GeolocationInterface, HostInterface, Platform, PlatformParts, SpeechInterface, TimeSource,
};
