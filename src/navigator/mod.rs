//! Navigation flow
//!
//! The orchestrator state machine and the texts and links it produces.

mod announcement;
mod directions;
mod orchestrator;
mod result;

pub use announcement::{failure_status, success_speech, success_status, TEST_VOICE_TEXT};
pub use directions::{directions_url, DIRECTIONS_BASE_URL};
pub use orchestrator::NavigationOrchestrator;
pub use result::{NavigationOutcome, NavigationResult};
