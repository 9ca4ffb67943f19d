//! Directions links
//!
//! Builds the external map-service URL that starts turn-by-turn directions
//! from the user position to a named destination.

use campus_nav_core::catalog::Coordinate;
use campus_nav_core::navigation::TravelMode;
use url::form_urlencoded::byte_serialize;

/// Directions endpoint of the map service
pub const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Build a directions link
///
/// The destination is form-urlencoded (spaces become `+`); the origin is
/// written as plain `lat,lng`.
///
/// # Example
///
/// ```
/// use campus_nav::navigator::directions_url;
/// use campus_nav::nav_core::catalog::Coordinate;
/// use campus_nav::nav_core::navigation::TravelMode;
///
/// let url = directions_url(Coordinate::new(12.5, 75.25), "Central Library", TravelMode::Walking);
/// assert_eq!(
///     url,
///     "https://www.google.com/maps/dir/?api=1&origin=12.5,75.25&destination=Central+Library&travelmode=walking"
/// );
/// ```
pub fn directions_url(origin: Coordinate, destination: &str, mode: TravelMode) -> String {
    let destination: String = byte_serialize(destination.as_bytes()).collect();
    format!(
        "{}&origin={},{}&destination={}&travelmode={}",
        DIRECTIONS_BASE_URL,
        origin.lat,
        origin.lng,
        destination,
        mode.as_str()
    )
}
