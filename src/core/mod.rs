//! Core navigator infrastructure
//!
//! Cross-cutting pieces shared by every component: logging.

pub mod logging;
