//! Navigation type definitions
//!
//! This module contains core types used by the navigation flow:
//! - `NavigationState`: Phase of the tap → locate → announce cycle
//! - `NavigationRequest`: One in-flight tap awaiting a position fix
//! - `RouteEstimate`: Distance, mode and ETA derived from a successful fix

use alloc::string::String;
use serde::{Deserialize, Serialize};

use super::distance::distance_km;
use super::travel::{eta_text, travel_mode, TravelMode, TravelPreference};
use crate::catalog::{Coordinate, Place};
use crate::geolocation::GeoFix;

/// Navigation phase
///
/// `Idle → Locating → {Succeeded, Failed} → Idle`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavigationState {
    /// Waiting for a tap
    #[default]
    Idle,
    /// Waiting for the position fix of the in-flight request
    Locating,
    /// Fix obtained, directions opened
    Succeeded,
    /// Fix failed, plain place link opened
    Failed,
}

impl NavigationState {
    /// Name for logging
    pub fn name(&self) -> &'static str {
        match self {
            NavigationState::Idle => "Idle",
            NavigationState::Locating => "Locating",
            NavigationState::Succeeded => "Succeeded",
            NavigationState::Failed => "Failed",
        }
    }

    /// True if `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: NavigationState) -> bool {
        matches!(
            (self, next),
            (NavigationState::Idle, NavigationState::Locating)
                | (NavigationState::Locating, NavigationState::Succeeded)
                | (NavigationState::Locating, NavigationState::Failed)
                | (NavigationState::Succeeded, NavigationState::Idle)
                | (NavigationState::Failed, NavigationState::Idle)
        )
    }
}

/// One tap awaiting its position fix
///
/// Created on tap and consumed by exactly one geolocation round trip.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationRequest {
    /// Monotonic request number, matches the response to the tap
    pub token: u64,
    /// Destination chosen by the user
    pub place: Place,
    /// Wall-clock time of the tap (ms since Unix epoch)
    pub requested_at_ms: u64,
}

impl NavigationRequest {
    /// Create a new request
    pub fn new(token: u64, place: Place, requested_at_ms: u64) -> Self {
        Self {
            token,
            place,
            requested_at_ms,
        }
    }
}

/// Distance, travel mode and ETA derived from a successful position fix
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    /// User position at the time of the fix
    pub origin: Coordinate,
    /// Reported fix accuracy in meters
    pub accuracy_m: f64,
    /// Destination place
    pub destination: Place,
    /// Great-circle distance, if the destination has a stored coordinate
    pub distance_km: Option<f64>,
    /// Travel mode used for directions
    pub travel_mode: TravelMode,
    /// ETA text, if the distance is known
    pub eta_text: Option<String>,
}

impl RouteEstimate {
    /// Derive distance, mode and ETA from a fix
    ///
    /// Without a stored destination coordinate the distance is unknown and
    /// `Auto` falls back to driving directions.
    pub fn from_fix(fix: &GeoFix, destination: &Place, preference: TravelPreference) -> Self {
        let distance = destination
            .coordinate
            .map(|target| distance_km(fix.coordinate, target));

        let mode = match distance {
            Some(d) => travel_mode(d, preference),
            None => match preference {
                TravelPreference::Walking => TravelMode::Walking,
                TravelPreference::Auto | TravelPreference::Driving => TravelMode::Driving,
            },
        };

        Self {
            origin: fix.coordinate,
            accuracy_m: fix.accuracy_m,
            destination: destination.clone(),
            distance_km: distance,
            travel_mode: mode,
            eta_text: distance.map(|d| eta_text(d, mode)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Place {
        Place::new("Central Library", "Academic Facilities", "https://m/lib")
            .with_coordinate(12.2123142, 75.1351663)
    }

    fn campus_fix() -> GeoFix {
        GeoFix::new(Coordinate::new(12.2116825, 75.1343226), 12.0)
    }

    #[test]
    fn test_navigation_state_default() {
        assert_eq!(NavigationState::default(), NavigationState::Idle);
    }

    #[test]
    fn test_navigation_state_transitions() {
        use NavigationState::*;
        assert!(Idle.can_transition_to(Locating));
        assert!(Locating.can_transition_to(Succeeded));
        assert!(Locating.can_transition_to(Failed));
        assert!(Succeeded.can_transition_to(Idle));
        assert!(Failed.can_transition_to(Idle));

        assert!(!Idle.can_transition_to(Succeeded));
        assert!(!Locating.can_transition_to(Locating));
        assert!(!Locating.can_transition_to(Idle));
        assert!(!Succeeded.can_transition_to(Locating));
    }

    #[test]
    fn test_estimate_from_fix_campus_library() {
        let result = RouteEstimate::from_fix(&campus_fix(), &library(), TravelPreference::Auto);
        let d = result.distance_km.unwrap();
        assert!((d - 0.12).abs() < 0.01);
        assert_eq!(result.travel_mode, TravelMode::Walking);
        assert_eq!(result.eta_text.as_deref(), Some("1 min walk"));
        assert!((result.accuracy_m - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_respects_driving_override() {
        let result =
            RouteEstimate::from_fix(&campus_fix(), &library(), TravelPreference::Driving);
        assert_eq!(result.travel_mode, TravelMode::Driving);
        assert_eq!(result.eta_text.as_deref(), Some("1 min drive"));
    }

    #[test]
    fn test_estimate_without_destination_coordinate() {
        let canteen = Place::new("College Canteen", "Student Amenities", "https://m/c");
        let result = RouteEstimate::from_fix(&campus_fix(), &canteen, TravelPreference::Auto);
        assert!(result.distance_km.is_none());
        assert!(result.eta_text.is_none());
        assert_eq!(result.travel_mode, TravelMode::Driving);

        let walking = RouteEstimate::from_fix(&campus_fix(), &canteen, TravelPreference::Walking);
        assert_eq!(walking.travel_mode, TravelMode::Walking);
    }
}
