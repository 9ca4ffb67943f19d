//! Place catalog
//!
//! Read-only dataset of campus places grouped into ordered category sections.
//! The catalog is built once at startup (from the compiled-in dataset or a
//! fixture) and never mutated afterwards.
//!
//! # Validation
//!
//! Building a catalog rejects sections without a label, places without a
//! name or map link, and stored coordinates outside WGS84 ranges. Duplicate
//! identities (`name` + `category`) are allowed.

mod place;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use place::{CategorySection, Coordinate, Place};

/// Errors from catalog validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A section has an empty label
    EmptyLabel {
        /// Index of the offending section
        section: usize,
    },
    /// A place has an empty name
    EmptyName {
        /// Label of the section holding the place
        section: String,
    },
    /// A place has an empty map link
    EmptyMapUrl {
        /// Name of the offending place
        place: String,
    },
    /// A stored coordinate lies outside WGS84 ranges
    InvalidCoordinate {
        /// Name of the offending place
        place: String,
    },
}

impl core::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CatalogError::EmptyLabel { section } => {
                write!(f, "catalog section #{} has an empty label", section)
            }
            CatalogError::EmptyName { section } => {
                write!(f, "place in section '{}' has an empty name", section)
            }
            CatalogError::EmptyMapUrl { place } => {
                write!(f, "place '{}' has an empty map link", place)
            }
            CatalogError::InvalidCoordinate { place } => {
                write!(f, "place '{}' has a coordinate out of range", place)
            }
        }
    }
}

/// Validated, ordered collection of category sections
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CategorySection>", into = "Vec<CategorySection>")]
pub struct PlaceCatalog {
    sections: Vec<CategorySection>,
}

impl PlaceCatalog {
    /// Build a catalog from sections, validating every place
    pub fn new(sections: Vec<CategorySection>) -> Result<Self, CatalogError> {
        for (index, section) in sections.iter().enumerate() {
            if section.label.trim().is_empty() {
                return Err(CatalogError::EmptyLabel { section: index });
            }
            for place in &section.items {
                if place.name.trim().is_empty() {
                    return Err(CatalogError::EmptyName {
                        section: section.label.clone(),
                    });
                }
                if place.map_url.trim().is_empty() {
                    return Err(CatalogError::EmptyMapUrl {
                        place: place.name.clone(),
                    });
                }
                if let Some(coordinate) = place.coordinate {
                    if !coordinate.is_valid() {
                        return Err(CatalogError::InvalidCoordinate {
                            place: place.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { sections })
    }

    /// Sections in display order
    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    /// Iterate over every place in catalog order
    pub fn places(&self) -> impl Iterator<Item = &Place> + '_ {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    /// Find the first place with the given identity
    pub fn find(&self, name: &str, category: &str) -> Option<&Place> {
        self.places().find(|place| place.is(name, category))
    }

    /// Total number of places
    pub fn len(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    /// True if the catalog holds no places
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<Vec<CategorySection>> for PlaceCatalog {
    type Error = CatalogError;

    fn try_from(sections: Vec<CategorySection>) -> Result<Self, Self::Error> {
        Self::new(sections)
    }
}

impl From<PlaceCatalog> for Vec<CategorySection> {
    fn from(catalog: PlaceCatalog) -> Self {
        catalog.sections
    }
}
