//! Voice announcer
//!
//! Speaks navigation summaries through the host speech engine. At most one
//! utterance is active: every announcement cancels the previous one first.
//! Synthesis problems never escape as errors; they come back as
//! [`SpeakOutcome::Failed`] with a note for the status line.

use campus_nav_core::speech::{select_voice, SkipReason, SpeakOutcome, Utterance};

use crate::platform::traits::SpeechInterface;
use crate::{log_debug, log_warn};

/// Speech announcer over a host engine
pub struct VoiceAnnouncer<S> {
    engine: S,
}

impl<S: SpeechInterface> VoiceAnnouncer<S> {
    /// Create an announcer
    pub fn new(engine: S) -> Self {
        Self { engine }
    }

    /// True if the host has a speech engine
    pub fn is_supported(&self) -> bool {
        self.engine.is_supported()
    }

    /// Speak `text`, replacing anything currently being spoken
    ///
    /// Skipped when `enabled` is false or the host has no engine. The rate
    /// is clamped into [0.5, 2.0]; pitch and volume stay at 1.0.
    pub fn speak(&self, text: &str, rate: f32, enabled: bool) -> SpeakOutcome {
        if !enabled {
            log_debug!("Voice disabled, not speaking");
            return SpeakOutcome::Skipped(SkipReason::Disabled);
        }
        if !self.engine.is_supported() {
            log_debug!("Speech not supported, not speaking");
            return SpeakOutcome::Skipped(SkipReason::Unsupported);
        }

        self.engine.cancel();

        let voices = self.engine.voices();
        let voice = select_voice(&voices).cloned();
        if let Some(voice) = &voice {
            log_debug!("Using voice {} ({})", voice.name, voice.lang);
        }

        let utterance = Utterance::new(text, rate, voice);
        match self.engine.speak(&utterance) {
            Ok(()) => SpeakOutcome::Spoken,
            Err(error) => {
                log_warn!("Speech failed: {}", error);
                SpeakOutcome::Failed(format!("Voice playback failed: {}", error))
            }
        }
    }

    /// Stop the active utterance, if any
    pub fn cancel(&self) {
        if self.engine.is_supported() && self.engine.is_speaking() {
            log_debug!("Cancelling active utterance");
            self.engine.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockSpeech;
    use campus_nav_core::speech::VoiceInfo;

    #[test]
    fn test_back_to_back_only_second_completes() {
        let engine = MockSpeech::new();
        let announcer = VoiceAnnouncer::new(engine.clone());

        assert_eq!(announcer.speak("first", 1.0, true), SpeakOutcome::Spoken);
        assert_eq!(announcer.speak("second", 1.0, true), SpeakOutcome::Spoken);
        engine.finish();

        assert_eq!(engine.completed_texts(), vec!["second".to_string()]);
        assert_eq!(engine.cancelled_texts(), vec!["first".to_string()]);
        assert_eq!(engine.queued_len(), 0);
    }

    #[test]
    fn test_disabled_is_skipped() {
        let engine = MockSpeech::new();
        let announcer = VoiceAnnouncer::new(engine.clone());

        assert_eq!(
            announcer.speak("hello", 1.0, false),
            SpeakOutcome::Skipped(SkipReason::Disabled)
        );
        assert!(engine.started().is_empty());
    }

    #[test]
    fn test_unsupported_is_skipped() {
        let announcer = VoiceAnnouncer::new(MockSpeech::unsupported());
        assert_eq!(
            announcer.speak("hello", 1.0, true),
            SpeakOutcome::Skipped(SkipReason::Unsupported)
        );
    }

    #[test]
    fn test_prefers_indian_english_voice() {
        let engine = MockSpeech::with_voices(vec![
            VoiceInfo::new("Samantha", "en-US"),
            VoiceInfo::new("Rishi", "en-IN"),
        ]);
        let announcer = VoiceAnnouncer::new(engine.clone());
        announcer.speak("hello", 1.0, true);

        let started = engine.started();
        assert_eq!(started[0].voice.as_ref().unwrap().name, "Rishi");
    }

    #[test]
    fn test_rate_is_clamped() {
        let engine = MockSpeech::new();
        let announcer = VoiceAnnouncer::new(engine.clone());
        announcer.speak("fast", 4.0, true);
        announcer.speak("slow", 0.2, true);

        let started = engine.started();
        assert!((started[0].rate - 2.0).abs() < 0.001);
        assert!((started[1].rate - 0.5).abs() < 0.001);
        assert!((started[1].pitch - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_engine_failure_becomes_note() {
        let engine = MockSpeech::new();
        engine.fail_with("synthesis-failed");
        let announcer = VoiceAnnouncer::new(engine);

        match announcer.speak("hello", 1.0, true) {
            SpeakOutcome::Failed(note) => assert!(note.contains("synthesis-failed")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_only_when_speaking() {
        let engine = MockSpeech::new();
        let announcer = VoiceAnnouncer::new(engine.clone());

        announcer.cancel();
        assert_eq!(engine.cancel_calls(), 0);

        announcer.speak("hello", 1.0, true);
        let before = engine.cancel_calls();
        announcer.cancel();
        assert_eq!(engine.cancel_calls(), before + 1);
        assert_eq!(engine.cancelled_texts(), vec!["hello".to_string()]);
    }
}
