//! Mock platform implementation for testing
//!
//! This module provides mock implementations of the host capabilities so the
//! navigation flow can be tested without a browser.
//!
//! Every mock is a cheap handle over shared state: keep a clone before
//! handing the platform to the orchestrator, then inspect what happened.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use campus_nav::platform::mock::MockPlatform;
//! use campus_nav::platform::HostInterface;
//!
//! let platform = MockPlatform::new();
//! let host = platform.host.clone();
//! platform.host.open_url("https://maps.app.goo.gl/x").unwrap();
//! assert_eq!(host.opened_urls(), vec!["https://maps.app.goo.gl/x".to_string()]);
//! ```

#![cfg(any(test, feature = "mock"))]

mod geolocation;
mod host;
mod platform;
mod speech;

pub use campus_nav_core::traits::MockTime;
pub use geolocation::MockGeolocation;
pub use host::MockHost;
pub use platform::MockPlatform;
pub use speech::MockSpeech;
