//! Geolocation value types
//!
//! Query options, position fixes and the failure taxonomy shared by the
//! geolocation client and every host implementation.
//!
//! Hosts report raw W3C `GeolocationPositionError` codes; [`GeoFailure::from_code`]
//! turns them into the failure kinds the navigator understands.

use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::catalog::Coordinate;

/// W3C code for a denied permission prompt
pub const PERMISSION_DENIED: u16 = 1;
/// W3C code for a provider that could not produce a fix
pub const POSITION_UNAVAILABLE: u16 = 2;
/// W3C code for a request that exceeded its timeout
pub const TIMEOUT: u16 = 3;

/// One-shot position query options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoOptions {
    /// Ask for GPS-grade accuracy
    pub high_accuracy: bool,
    /// Host-enforced timeout (milliseconds)
    pub timeout_ms: u32,
    /// Oldest cached fix the host may return (milliseconds)
    pub max_cache_age_ms: u32,
}

impl Default for GeoOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 15_000,
            max_cache_age_ms: 0,
        }
    }
}

/// Successful position fix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    /// Reported position
    pub coordinate: Coordinate,
    /// Accuracy radius in meters
    pub accuracy_m: f64,
}

impl GeoFix {
    /// Create a new fix
    pub const fn new(coordinate: Coordinate, accuracy_m: f64) -> Self {
        Self {
            coordinate,
            accuracy_m,
        }
    }

    /// True if the coordinate is inside lat/lng bounds
    pub fn is_valid(&self) -> bool {
        self.coordinate.is_valid()
    }
}

/// Raw error reported by a host geolocation provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionError {
    /// W3C error code
    pub code: u16,
    /// Provider message, for logs only
    pub message: String,
}

impl PositionError {
    /// Create a new position error
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for PositionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "geolocation error {}: {}", self.code, self.message)
    }
}

/// Classified geolocation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeoFailure {
    /// Host has no geolocation capability
    Unsupported,
    /// User declined the permission prompt
    PermissionDenied,
    /// No fix could be obtained
    PositionUnavailable,
    /// Host timeout elapsed
    Timeout,
    /// Anything else
    Unknown,
}

impl GeoFailure {
    /// Classify a raw W3C error code
    pub fn from_code(code: u16) -> Self {
        match code {
            PERMISSION_DENIED => GeoFailure::PermissionDenied,
            POSITION_UNAVAILABLE => GeoFailure::PositionUnavailable,
            TIMEOUT => GeoFailure::Timeout,
            _ => GeoFailure::Unknown,
        }
    }

    /// User-facing message, shown on the status line and spoken
    pub fn message(&self) -> &'static str {
        match self {
            GeoFailure::Unsupported => {
                "Geolocation is not supported by this browser. Opening the Google Maps link directly."
            }
            GeoFailure::PermissionDenied => {
                "Location permission was denied. Opening the Google Maps place link without your current position."
            }
            GeoFailure::PositionUnavailable => {
                "Location information is unavailable. Opening the Google Maps place link."
            }
            GeoFailure::Timeout => "Location request timed out. Opening the Google Maps place link.",
            GeoFailure::Unknown => {
                "An unknown error occurred while fetching your location. Opening the Google Maps place link."
            }
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            GeoFailure::Unsupported => "unsupported",
            GeoFailure::PermissionDenied => "permission_denied",
            GeoFailure::PositionUnavailable => "position_unavailable",
            GeoFailure::Timeout => "timeout",
            GeoFailure::Unknown => "unknown",
        }
    }
}

impl From<&PositionError> for GeoFailure {
    fn from(error: &PositionError) -> Self {
        GeoFailure::from_code(error.code)
    }
}

impl core::fmt::Display for GeoFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// Classify a raw host response
///
/// A fix outside lat/lng bounds counts as `PositionUnavailable`.
pub fn classify(response: Result<GeoFix, PositionError>) -> Result<GeoFix, GeoFailure> {
    match response {
        Ok(fix) if fix.is_valid() => Ok(fix),
        Ok(_) => Err(GeoFailure::PositionUnavailable),
        Err(error) => Err(GeoFailure::from(&error)),
    }
}
