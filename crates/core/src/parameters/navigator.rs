//! Navigator Parameter Definitions
//!
//! Settings the host can change at runtime through its settings surface.
//!
//! # Parameters
//!
//! - `travel_preference` - Auto / Walking / Driving
//! - `voice_enabled` - Speak announcements
//! - `voice_rate` - Speech rate multiplier [0.5, 2.0]
//! - `high_accuracy` - Ask the host for a high-accuracy fix
//! - `timeout_ms` - Host-enforced geolocation timeout
//! - `max_cache_age_ms` - Oldest cached position the host may return

use serde::{Deserialize, Serialize};

use super::error::ParameterError;
use crate::geolocation::GeoOptions;
use crate::navigation::TravelPreference;

// --- Defaults ---

/// Default speech rate
pub const DEFAULT_VOICE_RATE: f32 = 1.0;
/// Default geolocation timeout
pub const DEFAULT_TIMEOUT_MS: u32 = 15_000;
/// Default cache age (always ask for a fresh fix)
pub const DEFAULT_MAX_CACHE_AGE_MS: u32 = 0;

// --- Ranges ---

/// Slowest accepted speech rate
pub const MIN_VOICE_RATE: f32 = 0.5;
/// Fastest accepted speech rate
pub const MAX_VOICE_RATE: f32 = 2.0;

/// Shortest accepted geolocation timeout
pub const MIN_TIMEOUT_MS: u32 = 1_000;
/// Longest accepted geolocation timeout
pub const MAX_TIMEOUT_MS: u32 = 120_000;

const MAX_CACHE_AGE_MS: u32 = 600_000;

/// Navigator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorParams {
    /// Travel mode preference
    pub travel_preference: TravelPreference,
    /// Speak announcements when the host supports speech
    pub voice_enabled: bool,
    /// Speech rate multiplier
    pub voice_rate: f32,
    /// Request a high-accuracy fix
    pub high_accuracy: bool,
    /// Geolocation timeout (milliseconds)
    pub timeout_ms: u32,
    /// Maximum age of a cached position (milliseconds)
    pub max_cache_age_ms: u32,
}

impl Default for NavigatorParams {
    fn default() -> Self {
        Self {
            travel_preference: TravelPreference::Auto,
            voice_enabled: true,
            voice_rate: DEFAULT_VOICE_RATE,
            high_accuracy: true,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_cache_age_ms: DEFAULT_MAX_CACHE_AGE_MS,
        }
    }
}

impl NavigatorParams {
    /// Copy with every numeric field clamped into its range
    ///
    /// A non-finite voice rate falls back to the default.
    pub fn clamped(&self) -> Self {
        Self {
            voice_rate: clamp_voice_rate(self.voice_rate),
            timeout_ms: self.timeout_ms.clamp(MIN_TIMEOUT_MS, MAX_TIMEOUT_MS),
            max_cache_age_ms: self.max_cache_age_ms.min(MAX_CACHE_AGE_MS),
            ..*self
        }
    }

    /// Validate navigator parameters
    pub fn is_valid(&self) -> bool {
        if !self.voice_rate.is_finite()
            || self.voice_rate < MIN_VOICE_RATE
            || self.voice_rate > MAX_VOICE_RATE
        {
            return false;
        }
        if self.timeout_ms < MIN_TIMEOUT_MS || self.timeout_ms > MAX_TIMEOUT_MS {
            return false;
        }
        if self.max_cache_age_ms > MAX_CACHE_AGE_MS {
            return false;
        }

        true
    }

    /// Set the speech rate, clamping into [0.5, 2.0]
    pub fn set_voice_rate(&mut self, rate: f32) -> Result<(), ParameterError> {
        if !rate.is_finite() {
            return Err(ParameterError::NotFinite);
        }
        self.voice_rate = rate.clamp(MIN_VOICE_RATE, MAX_VOICE_RATE);
        Ok(())
    }

    /// Set the geolocation timeout, rejecting values outside its range
    pub fn set_timeout_ms(&mut self, timeout_ms: u32) -> Result<(), ParameterError> {
        if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&timeout_ms) {
            return Err(ParameterError::OutOfRange);
        }
        self.timeout_ms = timeout_ms;
        Ok(())
    }

    /// Convert to `GeoOptions` for the geolocation client
    pub fn geo_options(&self) -> GeoOptions {
        GeoOptions {
            high_accuracy: self.high_accuracy,
            timeout_ms: self.timeout_ms,
            max_cache_age_ms: self.max_cache_age_ms,
        }
    }
}

/// Clamp a speech rate into [0.5, 2.0], mapping NaN/inf to the default
pub fn clamp_voice_rate(rate: f32) -> f32 {
    if rate.is_finite() {
        rate.clamp(MIN_VOICE_RATE, MAX_VOICE_RATE)
    } else {
        DEFAULT_VOICE_RATE
    }
}
