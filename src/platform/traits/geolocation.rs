//! Geolocation capability
//!
//! One-shot "get current position" query, as offered by the W3C Geolocation
//! API. The host enforces the timeout in [`GeoOptions`].

use async_trait::async_trait;
use campus_nav_core::geolocation::{GeoFix, GeoOptions, PositionError};

/// Host geolocation provider
///
/// Futures are not required to be `Send`: browser promises live on the
/// single UI thread.
#[async_trait(?Send)]
pub trait GeolocationInterface {
    /// True if the host can produce positions at all
    fn is_supported(&self) -> bool;

    /// Query the current position once
    ///
    /// # Errors
    ///
    /// Returns the raw provider error (W3C code + message). Classification
    /// into failure kinds happens in the geolocation client.
    async fn current_position(&self, options: &GeoOptions) -> Result<GeoFix, PositionError>;
}
