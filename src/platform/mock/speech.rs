//! Mock speech engine for testing

use std::cell::RefCell;
use std::rc::Rc;

use campus_nav_core::speech::{Utterance, VoiceInfo};

use crate::platform::{traits::SpeechInterface, PlatformError, Result};

#[derive(Debug, Default)]
struct SpeechState {
    supported: bool,
    voices: Vec<VoiceInfo>,
    current: Option<Utterance>,
    queued: Vec<Utterance>,
    started: Vec<Utterance>,
    cancelled: Vec<Utterance>,
    completed: Vec<Utterance>,
    cancel_calls: usize,
    failure: Option<String>,
}

/// Mock speech engine
///
/// Behaves like a browser engine: `speak()` while another utterance is
/// active queues it behind the current one, `cancel()` drops both, and
/// `finish()` completes the active utterance.
///
/// # Example
///
/// ```
/// use campus_nav::platform::mock::MockSpeech;
/// use campus_nav::platform::SpeechInterface;
/// use campus_nav::nav_core::speech::Utterance;
///
/// let engine = MockSpeech::new();
/// engine.speak(&Utterance::new("hello", 1.0, None)).unwrap();
/// assert!(engine.is_speaking());
/// engine.finish();
/// assert_eq!(engine.completed_texts(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct MockSpeech {
    state: Rc<RefCell<SpeechState>>,
}

impl MockSpeech {
    /// Create a supported engine without voices
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SpeechState {
                supported: true,
                ..SpeechState::default()
            })),
        }
    }

    /// Create a supported engine offering the given voices
    pub fn with_voices(voices: Vec<VoiceInfo>) -> Self {
        let engine = Self::new();
        engine.state.borrow_mut().voices = voices;
        engine
    }

    /// Create an engine reporting no speech capability
    pub fn unsupported() -> Self {
        let engine = Self::new();
        engine.state.borrow_mut().supported = false;
        engine
    }

    /// Make every following `speak()` fail with this message
    pub fn fail_with(&self, message: &str) {
        self.state.borrow_mut().failure = Some(message.to_string());
    }

    /// Complete the active utterance and start the next queued one
    pub fn finish(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(done) = state.current.take() {
            state.completed.push(done);
        }
        if !state.queued.is_empty() {
            let next = state.queued.remove(0);
            state.current = Some(next);
        }
    }

    /// Every utterance handed to `speak()`, in order
    pub fn started(&self) -> Vec<Utterance> {
        self.state.borrow().started.clone()
    }

    /// Texts of utterances that ran to completion
    pub fn completed_texts(&self) -> Vec<String> {
        texts(&self.state.borrow().completed)
    }

    /// Texts of utterances dropped by `cancel()`
    pub fn cancelled_texts(&self) -> Vec<String> {
        texts(&self.state.borrow().cancelled)
    }

    /// Number of utterances waiting behind the active one
    pub fn queued_len(&self) -> usize {
        self.state.borrow().queued.len()
    }

    /// Number of `cancel()` calls
    pub fn cancel_calls(&self) -> usize {
        self.state.borrow().cancel_calls
    }
}

impl Default for MockSpeech {
    fn default() -> Self {
        Self::new()
    }
}

fn texts(utterances: &[Utterance]) -> Vec<String> {
    utterances.iter().map(|u| u.text.clone()).collect()
}

impl SpeechInterface for MockSpeech {
    fn is_supported(&self) -> bool {
        self.state.borrow().supported
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        self.state.borrow().voices.clone()
    }

    fn is_speaking(&self) -> bool {
        self.state.borrow().current.is_some()
    }

    fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        state.cancel_calls += 1;
        if let Some(active) = state.current.take() {
            state.cancelled.push(active);
        }
        let queued: Vec<Utterance> = state.queued.drain(..).collect();
        state.cancelled.extend(queued);
    }

    fn speak(&self, utterance: &Utterance) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if let Some(message) = &state.failure {
            return Err(PlatformError::Speech(message.clone()));
        }
        state.started.push(utterance.clone());
        if state.current.is_some() {
            state.queued.push(utterance.clone());
        } else {
            state.current = Some(utterance.clone());
        }
        Ok(())
    }
}
