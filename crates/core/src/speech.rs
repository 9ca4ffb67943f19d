//! Speech types and voice selection
//!
//! Describes what the host speech engine offers and what the announcer asks
//! it to say. The engine itself is a host capability.

use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::parameters::clamp_voice_rate;

/// Fixed pitch for every utterance
pub const PITCH: f32 = 1.0;
/// Fixed volume for every utterance
pub const VOLUME: f32 = 1.0;

/// Voice offered by the host speech engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Engine-specific voice name
    pub name: String,
    /// BCP 47 language tag (e.g., `en-IN`)
    pub lang: String,
}

impl VoiceInfo {
    /// Create a new voice descriptor
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// One text-to-speech request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    /// Sentence to speak
    pub text: String,
    /// Rate multiplier, always within [0.5, 2.0]
    pub rate: f32,
    /// Pitch multiplier
    pub pitch: f32,
    /// Volume [0.0, 1.0]
    pub volume: f32,
    /// Preferred voice, `None` for the engine default
    pub voice: Option<VoiceInfo>,
}

impl Utterance {
    /// Build an utterance with a clamped rate and fixed pitch/volume
    pub fn new(text: impl Into<String>, rate: f32, voice: Option<VoiceInfo>) -> Self {
        Self {
            text: text.into(),
            rate: clamp_voice_rate(rate),
            pitch: PITCH,
            volume: VOLUME,
            voice,
        }
    }
}

/// Result of one announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakOutcome {
    /// Utterance handed to the engine
    Spoken,
    /// Nothing spoken (voice disabled or engine missing)
    Skipped(SkipReason),
    /// Engine rejected the utterance; carries a note for the status line
    Failed(String),
}

/// Why an announcement was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Voice turned off in settings
    Disabled,
    /// Host has no speech engine
    Unsupported,
}

/// Pick the preferred voice
///
/// An Indian English voice first, then any English voice, otherwise `None`
/// so the engine uses its default. Language tags compare case-insensitively.
pub fn select_voice(voices: &[VoiceInfo]) -> Option<&VoiceInfo> {
    voices
        .iter()
        .find(|voice| lang_starts_with(&voice.lang, "en-in"))
        .or_else(|| voices.iter().find(|voice| lang_starts_with(&voice.lang, "en")))
}

fn lang_starts_with(lang: &str, prefix: &str) -> bool {
    lang.len() >= prefix.len()
        && lang.is_char_boundary(prefix.len())
        && lang[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_select_prefers_indian_english() {
        let voices = vec![
            VoiceInfo::new("Samantha", "en-US"),
            VoiceInfo::new("Hindi", "hi-IN"),
            VoiceInfo::new("Rishi", "en-IN"),
        ];
        assert_eq!(select_voice(&voices).unwrap().name, "Rishi");
    }

    #[test]
    fn test_select_ignores_lang_case() {
        let voices = vec![
            VoiceInfo::new("Samantha", "en-US"),
            VoiceInfo::new("Veena", "EN-in"),
        ];
        assert_eq!(select_voice(&voices).unwrap().name, "Veena");
    }

    #[test]
    fn test_select_falls_back_to_any_english() {
        let voices = vec![
            VoiceInfo::new("Thomas", "fr-FR"),
            VoiceInfo::new("Daniel", "en-GB"),
            VoiceInfo::new("Samantha", "en-US"),
        ];
        assert_eq!(select_voice(&voices).unwrap().name, "Daniel");
    }

    #[test]
    fn test_select_none_without_english() {
        let voices = vec![VoiceInfo::new("Thomas", "fr-FR"), VoiceInfo::new("Anna", "de-DE")];
        assert!(select_voice(&voices).is_none());
        assert!(select_voice(&[]).is_none());
    }

    #[test]
    fn test_utterance_clamps_rate() {
        let fast = Utterance::new("hello", 5.0, None);
        assert!((fast.rate - 2.0).abs() < 0.001);
        let slow = Utterance::new("hello", 0.1, None);
        assert!((slow.rate - 0.5).abs() < 0.001);
        assert!((slow.pitch - 1.0).abs() < 0.001);
        assert!((slow.volume - 1.0).abs() < 0.001);
    }
}
