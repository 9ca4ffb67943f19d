//! Travel mode and ETA estimation
//!
//! Derives a travel mode from distance and the host preference, and turns
//! distances into the short texts shown on the status line and spoken aloud.

use alloc::format;
use alloc::string::String;
use libm::round;
use serde::{Deserialize, Serialize};

use crate::parameters::ParameterError;

/// Auto preference walks up to and including this distance
pub const WALKING_THRESHOLD_KM: f64 = 1.0;

/// Average walking speed used for ETA
pub const WALKING_SPEED_KMH: f64 = 5.0;

/// Average campus driving speed used for ETA
pub const DRIVING_SPEED_KMH: f64 = 30.0;

/// Resolved travel mode, as understood by the directions service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// On foot
    Walking,
    /// By car
    Driving,
}

impl TravelMode {
    /// Query-string value (`walking` / `driving`)
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Driving => "driving",
        }
    }
}

impl core::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host preference for choosing a travel mode
///
/// Deserializes case-insensitively through [`FromStr`](core::str::FromStr).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelPreference {
    /// Pick by distance threshold
    #[default]
    Auto,
    /// Always walk
    Walking,
    /// Always drive
    Driving,
}

impl TravelPreference {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelPreference::Auto => "auto",
            TravelPreference::Walking => "walking",
            TravelPreference::Driving => "driving",
        }
    }
}

impl core::str::FromStr for TravelPreference {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            Ok(TravelPreference::Auto)
        } else if s.eq_ignore_ascii_case("walking") || s.eq_ignore_ascii_case("walk") {
            Ok(TravelPreference::Walking)
        } else if s.eq_ignore_ascii_case("driving") || s.eq_ignore_ascii_case("drive") {
            Ok(TravelPreference::Driving)
        } else {
            Err(ParameterError::UnknownValue)
        }
    }
}

impl<'de> Deserialize<'de> for TravelPreference {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Resolve the travel mode for a distance
///
/// `Auto` walks when `distance_km <= 1.0` and drives beyond that.
/// Explicit preferences pass through regardless of distance.
pub fn travel_mode(distance_km: f64, preference: TravelPreference) -> TravelMode {
    match preference {
        TravelPreference::Walking => TravelMode::Walking,
        TravelPreference::Driving => TravelMode::Driving,
        TravelPreference::Auto => {
            if distance_km <= WALKING_THRESHOLD_KM {
                TravelMode::Walking
            } else {
                TravelMode::Driving
            }
        }
    }
}

/// Walking time in whole minutes (never below 1)
pub fn walking_eta_minutes(distance_km: f64) -> u32 {
    eta_minutes(distance_km, WALKING_SPEED_KMH)
}

/// Driving time in whole minutes (never below 1)
pub fn driving_eta_minutes(distance_km: f64) -> u32 {
    eta_minutes(distance_km, DRIVING_SPEED_KMH)
}

fn eta_minutes(distance_km: f64, speed_kmh: f64) -> u32 {
    let minutes = round(distance_km.max(0.0) / speed_kmh * 60.0);
    if minutes.is_finite() && minutes >= 1.0 {
        minutes as u32
    } else {
        1
    }
}

/// ETA text for a distance and mode
///
/// - Walking: `"N min walk"` below an hour, `"Hh Mm walk"` from 60 minutes
/// - Driving: `"N min drive"`
pub fn eta_text(distance_km: f64, mode: TravelMode) -> String {
    match mode {
        TravelMode::Walking => {
            let minutes = walking_eta_minutes(distance_km);
            if minutes < 60 {
                format!("{} min walk", minutes)
            } else {
                format!("{}h {}m walk", minutes / 60, minutes % 60)
            }
        }
        TravelMode::Driving => format!("{} min drive", driving_eta_minutes(distance_km)),
    }
}

/// Distance text: whole meters below 1 km, kilometers with 2 decimals from 1 km
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{} meters", round(distance_km.max(0.0) * 1000.0) as u32)
    } else {
        format!("{:.2} km", distance_km)
    }
}
