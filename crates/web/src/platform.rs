//! Browser platform
//!
//! Implements the navigator capabilities on top of browser APIs:
//! - Geolocation through `navigator.geolocation.getCurrentPosition`
//! - Speech through `window.speechSynthesis`
//! - Host output through page callbacks receiving JSON payloads
//! - Wall clock through `Date`

use std::cell::RefCell;

use async_trait::async_trait;
use campus_nav::platform::{
    GeolocationInterface, HostInterface, Platform, PlatformError, PlatformParts, Result,
    SpeechInterface, TimeSource,
};
use campus_nav::{log_debug, log_warn};
use campus_nav_core::catalog::Coordinate;
use campus_nav_core::geolocation::{GeoFix, GeoOptions, PositionError, POSITION_UNAVAILABLE};
use campus_nav_core::history::{HistoryEntry, RECENT_VIEW_LEN};
use campus_nav_core::speech::{Utterance, VoiceInfo};
use campus_nav_core::status::StatusUpdate;
use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice};

#[wasm_bindgen(inline_js = "
export function campus_nav_has_geolocation() {
    return typeof navigator !== 'undefined' && 'geolocation' in navigator;
}

export function campus_nav_current_position(highAccuracy, timeoutMs, maximumAgeMs) {
    return new Promise((resolve, reject) => {
        navigator.geolocation.getCurrentPosition(
            (pos) => resolve({
                lat: pos.coords.latitude,
                lng: pos.coords.longitude,
                accuracy: pos.coords.accuracy,
            }),
            (err) => reject({ code: err.code, message: err.message }),
            { enableHighAccuracy: highAccuracy, timeout: timeoutMs, maximumAge: maximumAgeMs },
        );
    });
}
")]
extern "C" {
    fn campus_nav_has_geolocation() -> bool;

    fn campus_nav_current_position(
        high_accuracy: bool,
        timeout_ms: u32,
        maximum_age_ms: u32,
    ) -> js_sys::Promise;
}

fn number(value: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()?
        .as_f64()
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

// ============================================================================
// Geolocation
// ============================================================================

/// `navigator.geolocation`
#[derive(Debug, Default)]
pub struct BrowserGeolocation;

#[async_trait(?Send)]
impl GeolocationInterface for BrowserGeolocation {
    fn is_supported(&self) -> bool {
        campus_nav_has_geolocation()
    }

    async fn current_position(
        &self,
        options: &GeoOptions,
    ) -> core::result::Result<GeoFix, PositionError> {
        let promise = campus_nav_current_position(
            options.high_accuracy,
            options.timeout_ms,
            options.max_cache_age_ms,
        );

        match JsFuture::from(promise).await {
            Ok(position) => {
                let lat = number(&position, "lat");
                let lng = number(&position, "lng");
                match (lat, lng) {
                    (Some(lat), Some(lng)) => {
                        let accuracy = number(&position, "accuracy").unwrap_or(f64::NAN);
                        Ok(GeoFix::new(Coordinate::new(lat, lng), accuracy))
                    }
                    _ => Err(PositionError::new(
                        POSITION_UNAVAILABLE,
                        "position without coordinates",
                    )),
                }
            }
            Err(error) => {
                let code = number(&error, "code").map(|code| code as u16).unwrap_or(0);
                Err(PositionError::new(code, describe(&error)))
            }
        }
    }
}

// ============================================================================
// Speech
// ============================================================================

/// `window.speechSynthesis`
#[derive(Debug)]
pub struct BrowserSpeech {
    synth: Option<SpeechSynthesis>,
}

impl BrowserSpeech {
    /// Bind to the page's speech engine, if any
    pub fn new() -> Self {
        let synth = web_sys::window().and_then(|window| window.speech_synthesis().ok());
        if synth.is_none() {
            log_warn!("speechSynthesis not available");
        }
        Self { synth }
    }

    fn native_voices(synth: &SpeechSynthesis) -> Vec<SpeechSynthesisVoice> {
        synth
            .get_voices()
            .iter()
            .filter_map(|voice| voice.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect()
    }
}

impl Default for BrowserSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechInterface for BrowserSpeech {
    fn is_supported(&self) -> bool {
        self.synth.is_some()
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        match &self.synth {
            Some(synth) => Self::native_voices(synth)
                .into_iter()
                .map(|voice| VoiceInfo::new(voice.name(), voice.lang()))
                .collect(),
            None => Vec::new(),
        }
    }

    fn is_speaking(&self) -> bool {
        self.synth.as_ref().is_some_and(|synth| synth.speaking())
    }

    fn cancel(&self) {
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }

    fn speak(&self, utterance: &Utterance) -> Result<()> {
        let synth = self
            .synth
            .as_ref()
            .ok_or(PlatformError::Unsupported("speech synthesis"))?;

        let native = SpeechSynthesisUtterance::new_with_text(&utterance.text)
            .map_err(|error| PlatformError::Speech(describe(&error)))?;
        native.set_rate(utterance.rate);
        native.set_pitch(utterance.pitch);
        native.set_volume(utterance.volume);

        if let Some(wanted) = &utterance.voice {
            let voice = Self::native_voices(synth)
                .into_iter()
                .find(|voice| voice.name() == wanted.name);
            if let Some(voice) = voice {
                native.set_voice(Some(&voice));
                native.set_lang(&wanted.lang);
            }
        }

        synth.speak(&native);
        Ok(())
    }
}

// ============================================================================
// Host page
// ============================================================================

/// Page callbacks
///
/// Each callback receives one string argument:
/// - `on_status`: JSON status update
/// - `on_spoken`: the spoken sentence
/// - `on_note`: a voice or link problem
/// - `on_history`: JSON array of the most recent entries, newest first
pub struct BrowserHost {
    on_status: Function,
    on_spoken: Function,
    on_note: Function,
    on_history: Function,
    history: RefCell<Vec<HistoryEntry>>,
}

impl BrowserHost {
    /// Create a host over page callbacks
    pub fn new(
        on_status: Function,
        on_spoken: Function,
        on_note: Function,
        on_history: Function,
    ) -> Self {
        Self {
            on_status,
            on_spoken,
            on_note,
            on_history,
            history: RefCell::new(Vec::new()),
        }
    }

    fn emit(callback: &Function, payload: &str) {
        if let Err(error) = callback.call1(&JsValue::NULL, &JsValue::from_str(payload)) {
            log_warn!("Page callback failed: {}", describe(&error));
        }
    }

    fn emit_json<T: Serialize + ?Sized>(callback: &Function, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => Self::emit(callback, &json),
            Err(error) => log_warn!("Could not serialize page update: {}", error),
        }
    }

    fn emit_history(&self) {
        let history = self.history.borrow();
        let recent: Vec<&HistoryEntry> = history.iter().rev().take(RECENT_VIEW_LEN).collect();
        Self::emit_json(&self.on_history, &recent);
    }
}

impl HostInterface for BrowserHost {
    fn open_url(&self, url: &str) -> Result<()> {
        let window = web_sys::window().ok_or(PlatformError::Unsupported("window"))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(PlatformError::OpenUrl {
                url: url.to_string(),
                reason: "popup blocked".to_string(),
            }),
            Err(error) => Err(PlatformError::OpenUrl {
                url: url.to_string(),
                reason: describe(&error),
            }),
        }
    }

    fn render_status(&self, status: &StatusUpdate) {
        Self::emit_json(&self.on_status, status);
    }

    fn render_spoken(&self, text: &str) {
        Self::emit(&self.on_spoken, text);
    }

    fn render_note(&self, note: &str) {
        Self::emit(&self.on_note, note);
    }

    fn append_history(&self, entry: &HistoryEntry) {
        self.history.borrow_mut().push(entry.clone());
        self.emit_history();
    }

    fn clear_history(&self) {
        self.history.borrow_mut().clear();
        self.emit_history();
    }
}

// ============================================================================
// Clock
// ============================================================================

/// `Date.now()` with the page's timezone offset
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl TimeSource for BrowserClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn utc_offset_minutes(&self) -> i32 {
        // getTimezoneOffset is UTC minus local
        -(js_sys::Date::new_0().get_timezone_offset() as i32)
    }
}

// ============================================================================
// Platform
// ============================================================================

/// Browser platform
pub struct WebPlatform {
    host: BrowserHost,
}

impl WebPlatform {
    /// Create a platform rendering through `host`
    pub fn new(host: BrowserHost) -> Self {
        Self { host }
    }
}

impl Platform for WebPlatform {
    type Geolocation = BrowserGeolocation;
    type Speech = BrowserSpeech;
    type Host = BrowserHost;
    type Clock = BrowserClock;

    fn into_parts(self) -> PlatformParts<Self> {
        log_debug!("Binding browser capabilities");
        PlatformParts {
            geolocation: BrowserGeolocation,
            speech: BrowserSpeech::new(),
            host: self.host,
            clock: BrowserClock,
        }
    }
}
