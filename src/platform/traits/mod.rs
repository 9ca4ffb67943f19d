//! Platform abstraction traits
//!
//! This module defines the capabilities a host must provide.

pub mod geolocation;
pub mod host;
pub mod platform;
pub mod speech;

// Re-export trait interfaces
pub use campus_nav_core::traits::TimeSource;
pub use geolocation::GeolocationInterface;
pub use host::HostInterface;
pub use platform::{Platform, PlatformParts};
pub use speech::SpeechInterface;
