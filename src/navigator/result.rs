//! Navigation results

use campus_nav_core::catalog::Place;
use campus_nav_core::geolocation::GeoFailure;
use campus_nav_core::navigation::{NavigationState, RouteEstimate};
use serde::Serialize;

/// Everything produced by a successful request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationResult {
    /// Origin, destination, distance, mode and ETA
    #[serde(flatten)]
    pub estimate: RouteEstimate,
    /// Directions link opened in the map service
    pub directions_url: String,
}

/// Terminal result of one navigation request
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    /// Directions opened from the user position
    Succeeded(NavigationResult),
    /// Plain place link opened after a geolocation failure
    Failed {
        /// Destination place
        destination: Place,
        /// Classified failure
        failure: GeoFailure,
    },
}

impl NavigationOutcome {
    /// Destination of the request
    pub fn destination(&self) -> &Place {
        match self {
            NavigationOutcome::Succeeded(result) => &result.estimate.destination,
            NavigationOutcome::Failed { destination, .. } => destination,
        }
    }

    /// Terminal state reached by this outcome
    pub fn state(&self) -> NavigationState {
        match self {
            NavigationOutcome::Succeeded(_) => NavigationState::Succeeded,
            NavigationOutcome::Failed { .. } => NavigationState::Failed,
        }
    }

    /// True if directions were opened
    pub fn is_success(&self) -> bool {
        matches!(self, NavigationOutcome::Succeeded(_))
    }
}
