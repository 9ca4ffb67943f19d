//! Great-circle distance
//!
//! Pure haversine calculation on a spherical Earth.

use libm::{atan2, cos, sin, sqrt};

use crate::catalog::Coordinate;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;

/// Calculate the great-circle distance between two positions using the Haversine formula
///
/// # Arguments
///
/// * `a` - Start position in degrees
/// * `b` - End position in degrees
///
/// # Returns
///
/// Distance in kilometers
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.lat * DEG_TO_RAD;
    let lat2_rad = b.lat * DEG_TO_RAD;
    let delta_lat = (b.lat - a.lat) * DEG_TO_RAD;
    let delta_lng = (b.lng - a.lng) * DEG_TO_RAD;

    let sin_dlat = sin(delta_lat / 2.0);
    let sin_dlng = sin(delta_lng / 2.0);
    let h = sin_dlat * sin_dlat + cos(lat1_rad) * cos(lat2_rad) * sin_dlng * sin_dlng;
    // Rounding can push h a hair outside [0, 1] for antipodal points
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * atan2(sqrt(h), sqrt(1.0 - h))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBRARY: Coordinate = Coordinate::new(12.2123142, 75.1351663);
    const ORIGIN: Coordinate = Coordinate::new(12.2116825, 75.1343226);

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance_km(LIBRARY, LIBRARY), 0.0);
        let south = Coordinate::new(-33.8688, 151.2093);
        assert_eq!(distance_km(south, south), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let ab = distance_km(LIBRARY, ORIGIN);
        let ba = distance_km(ORIGIN, LIBRARY);
        assert!((ab - ba).abs() < 1e-12);

        let tokyo = Coordinate::new(35.6762, 139.6503);
        let paris = Coordinate::new(48.8566, 2.3522);
        assert!((distance_km(tokyo, paris) - distance_km(paris, tokyo)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_campus_library() {
        // ~116 m across the LBS campus
        let d = distance_km(ORIGIN, LIBRARY);
        assert!((d - 0.12).abs() < 0.01, "got {}", d);
        assert!(d < 1.0);
    }

    #[test]
    fn test_distance_one_degree_latitude() {
        // ~111 km per degree of latitude
        let d = distance_km(Coordinate::new(35.0, 139.0), Coordinate::new(36.0, 139.0));
        assert!((d - 111.19).abs() < 0.1);
    }

    #[test]
    fn test_distance_antipodal_points() {
        let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        let half_circumference = core::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half_circumference).abs() < 1e-6);
    }
}
