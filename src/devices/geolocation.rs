//! Geolocation client
//!
//! Wraps the host's one-shot position query with stored options and turns
//! raw provider errors into [`GeoFailure`] kinds.
//!
//! # Example
//!
//! ```
//! use campus_nav::devices::GeolocationClient;
//! use campus_nav::nav_core::geolocation::{GeoFailure, GeoOptions};
//! use campus_nav::platform::mock::MockGeolocation;
//!
//! # tokio_test_block_on(async {
//! let geo = MockGeolocation::new();
//! geo.push_error(3, "Timeout expired");
//! let client = GeolocationClient::new(geo, GeoOptions::default());
//! assert_eq!(client.acquire().await, Err(GeoFailure::Timeout));
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::rc::Rc;

use campus_nav_core::geolocation::{classify, GeoFailure, GeoFix, GeoOptions};

use crate::platform::traits::GeolocationInterface;
use crate::{log_debug, log_info, log_warn};

/// One-shot geolocation client
///
/// Cloning is cheap and shares the provider, so a host can await a fix
/// without holding a borrow of the orchestrator.
pub struct GeolocationClient<G> {
    provider: Rc<G>,
    options: GeoOptions,
}

impl<G> Clone for GeolocationClient<G> {
    fn clone(&self) -> Self {
        Self {
            provider: Rc::clone(&self.provider),
            options: self.options,
        }
    }
}

impl<G: GeolocationInterface> GeolocationClient<G> {
    /// Create a client with default query options
    pub fn new(provider: G, options: GeoOptions) -> Self {
        Self {
            provider: Rc::new(provider),
            options,
        }
    }

    /// Stored query options
    pub fn options(&self) -> GeoOptions {
        self.options
    }

    /// Replace the stored query options
    pub fn set_options(&mut self, options: GeoOptions) {
        self.options = options;
    }

    /// True if the host can produce positions
    pub fn is_supported(&self) -> bool {
        self.provider.is_supported()
    }

    /// Acquire the current position with the stored options
    pub async fn acquire(&self) -> Result<GeoFix, GeoFailure> {
        self.acquire_with(self.options).await
    }

    /// Acquire the current position with explicit options
    ///
    /// Never starts a timer of its own: the host enforces `timeout_ms`.
    /// Reports `Unsupported` without querying a host that lacks the capability.
    pub async fn acquire_with(&self, options: GeoOptions) -> Result<GeoFix, GeoFailure> {
        if !self.provider.is_supported() {
            log_warn!("Geolocation not supported by host");
            return Err(GeoFailure::Unsupported);
        }

        log_debug!(
            "Requesting position (high_accuracy={}, timeout={}ms, max_age={}ms)",
            options.high_accuracy,
            options.timeout_ms,
            options.max_cache_age_ms
        );

        let response = self.provider.current_position(&options).await;
        if let Err(error) = &response {
            log_debug!("Provider error: {}", error);
        }

        match classify(response) {
            Ok(fix) => {
                log_info!(
                    "Position fix: {:.5}, {:.5} (±{:.0} m)",
                    fix.coordinate.lat,
                    fix.coordinate.lng,
                    fix.accuracy_m
                );
                Ok(fix)
            }
            Err(failure) => {
                log_warn!("Geolocation failed: {}", failure.name());
                Err(failure)
            }
        }
    }
}
