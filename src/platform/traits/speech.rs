//! Speech synthesis capability

use campus_nav_core::speech::{Utterance, VoiceInfo};

use crate::platform::Result;

/// Host text-to-speech engine
///
/// Methods take `&self`; engines are process-wide singletons with their own
/// queue, so implementations use interior mutability where they need state.
pub trait SpeechInterface {
    /// True if the host has a speech engine
    fn is_supported(&self) -> bool;

    /// Voices currently offered by the engine (may be empty while loading)
    fn voices(&self) -> Vec<VoiceInfo>;

    /// True while an utterance is being spoken
    fn is_speaking(&self) -> bool;

    /// Stop the current utterance and drop anything queued
    fn cancel(&self);

    /// Start speaking an utterance
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Speech` if the engine rejects the utterance.
    fn speak(&self, utterance: &Utterance) -> Result<()>;
}
