//! Place type definitions
//!
//! This module contains the value types that make up the catalog:
//! - `Coordinate`: Geographic position in degrees
//! - `Place`: A navigable campus location
//! - `CategorySection`: An ordered group of places under a display label

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to +90)
    pub lat: f64,
    /// Longitude in degrees (-180 to +180)
    pub lng: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True if both components are finite and inside their WGS84 ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A navigable campus location
///
/// `name` + `category` together identify a place. Uniqueness is not enforced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name, also used as the directions destination
    pub name: String,
    /// Category shown on the place card
    pub category: String,
    /// Plain external map link, opened when no origin is available
    #[serde(alias = "url")]
    pub map_url: String,
    /// Stored position of the place, if surveyed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
    /// Short free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Place {
    /// Create a place without coordinate or description
    pub fn new(name: &str, category: &str, map_url: &str) -> Self {
        Self {
            name: String::from(name),
            category: String::from(category),
            map_url: String::from(map_url),
            coordinate: None,
            description: None,
        }
    }

    /// Attach a stored coordinate
    pub fn with_coordinate(mut self, lat: f64, lng: f64) -> Self {
        self.coordinate = Some(Coordinate::new(lat, lng));
        self
    }

    /// Attach a description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(String::from(description));
        self
    }

    /// True if this place has the given identity
    pub fn is(&self, name: &str, category: &str) -> bool {
        self.name == name && self.category == category
    }
}

/// Ordered group of places under one display label
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    /// Section heading (may carry an icon prefix)
    #[serde(alias = "categoryLabel")]
    pub label: String,
    /// Places in display order
    pub items: Vec<Place>,
}

impl CategorySection {
    /// Create a section
    pub fn new(label: &str, items: Vec<Place>) -> Self {
        Self {
            label: String::from(label),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_valid_ranges() {
        assert!(Coordinate::new(12.2123142, 75.1351663).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(Coordinate::new(90.0, -180.0).is_valid());
    }

    #[test]
    fn test_coordinate_invalid_ranges() {
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_place_builder() {
        let place = Place::new("Central Library", "Academic Facilities", "https://example.org/lib")
            .with_coordinate(12.2123142, 75.1351663)
            .with_description("Reading rooms");

        assert!(place.is("Central Library", "Academic Facilities"));
        assert!(!place.is("Central Library", "Student Amenities"));
        let coord = place.coordinate.unwrap();
        assert!((coord.lat - 12.2123142).abs() < 1e-9);
        assert_eq!(place.description.as_deref(), Some("Reading rooms"));
    }
}
