//! Device clients
//!
//! This module contains clients that use the platform capability traits,
//! keeping host specifics out of the navigation flow.
//!
//! ## Modules
//!
//! - `clock`: Wall clock backed by the system time
//! - `geolocation`: One-shot position client with failure classification
//! - `voice`: Speech announcer with voice selection and cancel-and-replace

pub mod clock;
pub mod geolocation;
pub mod voice;

pub use clock::SystemClock;
pub use geolocation::GeolocationClient;
pub use voice::VoiceAnnouncer;
