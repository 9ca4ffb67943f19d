//! Logging abstraction
//!
//! Provides unified logging macros for every component of the navigator.
//! The macros forward to `tracing` events, so the subscriber installed by the
//! host decides where they go:
//! - Native hosts and tests: `init_logging()` installs a `tracing-subscriber`
//!   fmt layer filtered by `RUST_LOG`
//! - Browser: the web binding leaves the subscriber to the embedding page
//!
//! ## Usage
//!
//! ```
//! use campus_nav::{core::logging::init_logging, log_info};
//!
//! init_logging();
//! log_info!("Catalog loaded: {} places", 19);
//! ```

use tracing_subscriber::EnvFilter;

#[doc(hidden)]
pub use tracing;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install the fmt subscriber
///
/// Reads the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::core::logging::tracing::info!($($arg)*)
    };
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::core::logging::tracing::warn!($($arg)*)
    };
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::core::logging::tracing::error!($($arg)*)
    };
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::core::logging::tracing::debug!($($arg)*)
    };
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        $crate::core::logging::tracing::trace!($($arg)*)
    };
}
