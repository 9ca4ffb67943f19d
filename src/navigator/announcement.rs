//! Status and speech texts
//!
//! Sentences shown on the status line and spoken after a navigation request.

use campus_nav_core::geolocation::GeoFailure;
use campus_nav_core::navigation::{format_distance, RouteEstimate};
use campus_nav_core::status::{StatusLevel, StatusUpdate};

/// Sentence spoken by the voice test button
pub const TEST_VOICE_TEXT: &str =
    "Voice navigation is ready. Tap any place card to open Google Maps from your current location.";

/// Status after a successful fix, with distance and ETA readouts
pub fn success_status(estimate: &RouteEstimate) -> StatusUpdate {
    let from = format!(
        "Location acquired. From {:.5}, {:.5} to {}",
        estimate.origin.lat, estimate.origin.lng, estimate.destination.name
    );
    let distance_text = estimate.distance_km.map(format_distance);

    let message = match (&distance_text, &estimate.eta_text) {
        (Some(distance), Some(eta)) => format!(
            "{} ({}, about {}). Google Maps link opened in a new tab.",
            from, distance, eta
        ),
        _ => format!("{}. Google Maps link opened in a new tab.", from),
    };

    StatusUpdate::new(StatusLevel::Success, message)
        .with_readouts(distance_text, estimate.eta_text.clone())
}

/// Sentence spoken after a successful fix
pub fn success_speech(estimate: &RouteEstimate) -> String {
    let mut text = format!(
        "Starting navigation from your current location to {}.",
        estimate.destination.name
    );
    if let (Some(distance_km), Some(eta)) = (estimate.distance_km, &estimate.eta_text) {
        text.push_str(&format!(
            " It is about {} away, roughly {}.",
            format_distance(distance_km),
            eta
        ));
    }
    text.push_str(&format!(
        " Your {} route is now open in Google Maps.",
        estimate.travel_mode
    ));
    text
}

/// Status after a failed fix
pub fn failure_status(failure: GeoFailure) -> StatusUpdate {
    StatusUpdate::new(StatusLevel::Warning, failure.message())
}
