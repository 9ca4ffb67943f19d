//! Root platform trait
//!
//! This module defines the root Platform trait that aggregates all host capabilities.

use super::{GeolocationInterface, HostInterface, SpeechInterface, TimeSource};

/// Root platform trait
///
/// This trait aggregates the host capabilities the navigator needs.
/// Implementations provide concrete types for each capability via associated
/// types, enabling compile-time dispatch.
///
/// # Example
///
/// ```ignore
/// pub struct WebPlatform {
///     // Browser handles
/// }
///
/// impl Platform for WebPlatform {
///     type Geolocation = BrowserGeolocation;
///     type Speech = BrowserSpeech;
///     type Host = BrowserHost;
///     type Clock = BrowserClock;
///
///     fn into_parts(self) -> PlatformParts<Self> {
///         // Hand each capability to the orchestrator
///     }
/// }
/// ```
pub trait Platform: Sized {
    /// Geolocation provider type
    type Geolocation: GeolocationInterface;

    /// Speech engine type
    type Speech: SpeechInterface;

    /// Host page type
    type Host: HostInterface;

    /// Wall clock type
    type Clock: TimeSource;

    /// Split the platform into its capabilities
    fn into_parts(self) -> PlatformParts<Self>;
}

/// Capabilities of a platform, owned separately
pub struct PlatformParts<P: Platform> {
    /// Geolocation provider
    pub geolocation: P::Geolocation,
    /// Speech engine
    pub speech: P::Speech,
    /// Host page
    pub host: P::Host,
    /// Wall clock
    pub clock: P::Clock,
}
