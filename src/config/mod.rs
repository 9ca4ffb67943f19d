//! Navigator configuration
//!
//! Loads host settings and the place catalog from a JSON document:
//!
//! ```json
//! {
//!   "params": { "travel_preference": "walking", "voice_rate": 1.2 },
//!   "catalog": [ { "label": "Academic Facilities", "items": [ ... ] } ]
//! }
//! ```
//!
//! Both keys are optional. Missing settings take their defaults, a missing
//! catalog falls back to the compiled-in campus dataset. Out-of-range
//! settings are clamped rather than rejected; an invalid catalog is an error.

use std::path::Path;

use campus_nav_core::catalog::{CatalogError, CategorySection, PlaceCatalog};
use campus_nav_core::parameters::NavigatorParams;
use serde::Deserialize;

use crate::{log_info, log_warn};

/// Compiled-in campus dataset
pub const CAMPUS_DATASET: &str = include_str!("../../data/campus.json");

/// Errors while loading a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or has the wrong shape
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog failed validation
    #[error("Invalid catalog: {0}")]
    Catalog(CatalogError),
}

impl From<CatalogError> for ConfigError {
    fn from(error: CatalogError) -> Self {
        ConfigError::Catalog(error)
    }
}

#[derive(Debug, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    params: NavigatorParams,
    #[serde(default)]
    catalog: Option<Vec<CategorySection>>,
}

/// Settings plus catalog, ready for the orchestrator
#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorConfig {
    /// Host settings, already clamped
    pub params: NavigatorParams,
    /// Validated place catalog
    pub catalog: PlaceCatalog,
}

impl NavigatorConfig {
    /// Default settings over the compiled-in campus dataset
    ///
    /// # Errors
    ///
    /// Fails only if the compiled-in dataset is malformed.
    pub fn default_campus() -> Result<Self, ConfigError> {
        Self::from_json(CAMPUS_DATASET)
    }

    /// Parse a configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let document: ConfigDocument = serde_json::from_str(json)?;

        if !document.params.is_valid() {
            log_warn!("Configured settings out of range, clamping");
        }
        let params = document.params.clamped();

        let catalog = match document.catalog {
            Some(sections) => PlaceCatalog::new(sections)?,
            None => Self::default_campus()?.catalog,
        };

        log_info!(
            "Configuration loaded: {} sections, {} places",
            catalog.sections().len(),
            catalog.len()
        );

        Ok(Self { params, catalog })
    }

    /// Read and parse a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log_info!("Loading configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
