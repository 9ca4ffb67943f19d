//! Core traits for platform-agnostic navigator functionality.
//!
//! This module provides trait abstractions that decouple core logic from
//! host-specific implementations (browser, std, etc.).
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Host implementations live in the host and web crates

pub mod time;

pub use time::{MockTime, TimeSource};
