//! Status line types
//!
//! What the host shows above the place list: a severity, a sentence, and the
//! distance/ETA readouts of the last successful fix.

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Sentence shown while waiting for a fix
pub const LOCATING_MESSAGE: &str =
    "Fetching your current location… Please keep GPS enabled and grant permission when asked.";

/// Sentence shown before the first tap
pub const READY_MESSAGE: &str = "Tap a place to start navigation.";

/// Severity of a status update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    /// Neutral information
    #[default]
    Info,
    /// Waiting for the position fix
    Locating,
    /// Directions opened from the user position
    Success,
    /// Fallback link opened after a failure
    Warning,
}

/// One status line update
///
/// `distance_text` and `eta_text` of `None` clear the host readouts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// Severity
    pub level: StatusLevel,
    /// Sentence to show
    pub message: String,
    /// Distance readout (e.g., `"116 meters"`)
    pub distance_text: Option<String>,
    /// ETA readout (e.g., `"1 min walk"`)
    pub eta_text: Option<String>,
}

impl StatusUpdate {
    /// Status without readouts
    pub fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            distance_text: None,
            eta_text: None,
        }
    }

    /// Status shown before the first tap
    pub fn ready() -> Self {
        Self::new(StatusLevel::Info, READY_MESSAGE)
    }

    /// Status shown while locating (clears readouts)
    pub fn locating() -> Self {
        Self::new(StatusLevel::Locating, LOCATING_MESSAGE)
    }

    /// Attach distance and ETA readouts
    pub fn with_readouts(mut self, distance_text: Option<String>, eta_text: Option<String>) -> Self {
        self.distance_text = distance_text;
        self.eta_text = eta_text;
        self
    }
}
