//! campus_nav_core - Pure no_std logic for the campus navigator
//!
//! This crate contains the platform-agnostic algorithms and types behind the
//! navigation flow. Everything here can be tested on host without a browser,
//! a speech engine or a geolocation provider.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: Only `core` and `alloc`
//! - **Trait abstractions**: Host services (time) injected via traits
//!
//! # Modules
//!
//! - [`catalog`]: Places, coordinates and category sections
//! - [`search`]: Case-insensitive filtering over the catalog
//! - [`navigation`]: Haversine distance, travel mode, ETA, request and estimate types
//! - [`geolocation`]: Position fix, query options and failure taxonomy
//! - [`speech`]: Voice descriptors, utterances and voice selection
//! - [`history`]: Session-scoped navigation history
//! - [`parameters`]: Host settings with defaults and range clamping
//! - [`status`]: Status line types shown by the host
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource)

#![no_std]

extern crate alloc;

pub mod catalog;
pub mod geolocation;
pub mod history;
pub mod navigation;
pub mod parameters;
pub mod search;
pub mod speech;
pub mod status;
pub mod traits;
