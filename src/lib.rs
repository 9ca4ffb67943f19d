//! campus_nav - Campus navigation flow
//!
//! This library ties the pure logic of `campus_nav_core` to host
//! capabilities: it acquires the user position, estimates distance and ETA,
//! opens directions in an external map service and announces the result
//! through speech synthesis.
//!
//! # Modules
//!
//! - [`platform`]: Host capability traits (geolocation, speech, host UI, time)
//! - [`devices`]: Geolocation client and voice announcer over those traits
//! - [`navigator`]: Navigation orchestrator state machine and directions links
//! - [`config`]: Navigator settings and catalog loading
//! - [`core`]: Logging

// Host capability layer
pub mod platform;

// Clients built on platform capabilities
pub mod devices;

// Navigation flow
pub mod navigator;

// Settings and catalog loading
pub mod config;

// Logging
pub mod core;

pub use campus_nav_core as nav_core;
pub use config::{ConfigError, NavigatorConfig};
pub use navigator::NavigationOrchestrator;
