//! Navigation types and utilities
//!
//! This module contains the distance estimator and the types that flow
//! through one navigation request.

mod distance;
mod travel;
mod types;

pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use travel::{
    driving_eta_minutes, eta_text, format_distance, travel_mode, walking_eta_minutes, TravelMode,
    TravelPreference, DRIVING_SPEED_KMH, WALKING_SPEED_KMH, WALKING_THRESHOLD_KM,
};
pub use types::{NavigationRequest, NavigationState, RouteEstimate};
