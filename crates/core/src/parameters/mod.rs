//! Navigator settings
//!
//! Host-adjustable settings with defaults and range clamping. Loading from
//! files and JSON documents lives in the host crate.

pub mod error;
pub mod navigator;

pub use error::ParameterError;
pub use navigator::{
    clamp_voice_rate, NavigatorParams, DEFAULT_MAX_CACHE_AGE_MS, DEFAULT_TIMEOUT_MS,
    DEFAULT_VOICE_RATE, MAX_TIMEOUT_MS, MAX_VOICE_RATE, MIN_TIMEOUT_MS, MIN_VOICE_RATE,
};
