//! campus_nav_web - Browser bindings
//!
//! Exposes [`CampusNavigator`] to JavaScript. The page supplies four
//! callbacks (status, spoken text, notes, history) and forwards place taps,
//! search input and settings changes; everything else runs in Rust.
//!
//! ```js
//! const nav = new CampusNavigator(null, onStatus, onSpoken, onNote, onHistory);
//! renderSections(JSON.parse(nav.search("")));
//! await nav.navigate("Central Library", "Academic Facilities");
//! ```

mod platform;

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use campus_nav::navigator::NavigationOutcome;
use campus_nav::{log_info, NavigationOrchestrator, NavigatorConfig};
use campus_nav_core::navigation::TravelPreference;
use campus_nav_core::parameters::NavigatorParams;
use js_sys::{Function, Promise};
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

pub use platform::{BrowserClock, BrowserGeolocation, BrowserHost, BrowserSpeech, WebPlatform};

type Orchestrator = NavigationOrchestrator<WebPlatform>;

fn js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Navigator handle owned by the page
#[wasm_bindgen]
pub struct CampusNavigator {
    inner: Rc<RefCell<Orchestrator>>,
}

#[wasm_bindgen]
impl CampusNavigator {
    /// Create a navigator
    ///
    /// `config_json` is an optional configuration document; `null` uses the
    /// built-in campus dataset with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: Option<String>,
        on_status: Function,
        on_spoken: Function,
        on_note: Function,
        on_history: Function,
    ) -> Result<CampusNavigator, JsValue> {
        let config = match config_json {
            Some(json) => NavigatorConfig::from_json(&json),
            None => NavigatorConfig::default_campus(),
        }
        .map_err(js_error)?;

        let host = BrowserHost::new(on_status, on_spoken, on_note, on_history);
        let orchestrator = NavigationOrchestrator::from_config(WebPlatform::new(host), config);
        log_info!("Campus navigator attached to page");

        Ok(Self {
            inner: Rc::new(RefCell::new(orchestrator)),
        })
    }

    /// Filter the catalog
    ///
    /// Returns `{"sections": [...], "empty_message": string | null}`.
    pub fn search(&self, query: &str) -> Result<String, JsValue> {
        let nav = self.nav()?;
        let outcome = nav.search(query);
        let payload = json!({
            "sections": outcome.sections(),
            "empty_message": outcome.empty_message(),
        });
        Ok(payload.to_string())
    }

    /// Start navigation to a catalog place
    ///
    /// Resolves to a JSON outcome, or `null` when the tap was ignored
    /// because another request is still locating.
    pub fn navigate(&self, name: String, category: String) -> Promise {
        let inner = self.inner.clone();
        future_to_promise(async move {
            let (request, locator) = {
                let mut nav = inner.try_borrow_mut().map_err(js_error)?;
                let place = nav
                    .catalog()
                    .find(&name, &category)
                    .cloned()
                    .ok_or_else(|| JsValue::from_str(&format!("unknown place: {}", name)))?;
                let Some(request) = nav.begin(&place) else {
                    return Ok(JsValue::NULL);
                };
                (request, nav.locator())
            };

            let response = locator.acquire().await;

            let outcome = inner
                .try_borrow_mut()
                .map_err(js_error)?
                .complete(&request, response);
            let payload = match outcome {
                Some(NavigationOutcome::Succeeded(result)) => json!({
                    "state": "succeeded",
                    "result": result,
                }),
                Some(NavigationOutcome::Failed {
                    destination,
                    failure,
                }) => json!({
                    "state": "failed",
                    "destination": destination,
                    "failure": failure.name(),
                    "message": failure.message(),
                }),
                None => return Ok(JsValue::NULL),
            };
            Ok(JsValue::from_str(&payload.to_string()))
        })
    }

    /// Current navigation phase (`idle`, `locating`, ...)
    pub fn state(&self) -> Result<String, JsValue> {
        Ok(self.nav()?.state().name().to_string())
    }

    /// Set the travel preference (`auto`, `walking`, `driving`)
    pub fn set_travel_mode(&self, mode: &str) -> Result<(), JsValue> {
        let preference: TravelPreference = mode.parse().map_err(js_error)?;
        self.update(|params| params.travel_preference = preference)
    }

    /// Enable or disable voice announcements
    pub fn set_voice_enabled(&self, enabled: bool) -> Result<(), JsValue> {
        self.update(|params| params.voice_enabled = enabled)
    }

    /// Set the speech rate (clamped into [0.5, 2.0])
    pub fn set_voice_rate(&self, rate: f32) -> Result<(), JsValue> {
        self.update(|params| params.voice_rate = rate)
    }

    /// Speak the voice test sentence
    pub fn test_voice(&self) -> Result<(), JsValue> {
        self.nav_mut()?.test_voice();
        Ok(())
    }

    /// Empty the session history
    pub fn clear_history(&self) -> Result<(), JsValue> {
        self.nav_mut()?.clear_history();
        Ok(())
    }

    /// Current settings as JSON
    pub fn settings(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.nav()?.settings()).map_err(js_error)
    }
}

impl CampusNavigator {
    // Page callbacks fire while the orchestrator is borrowed
    fn nav(&self) -> Result<Ref<'_, Orchestrator>, JsValue> {
        self.inner
            .try_borrow()
            .map_err(|_| JsValue::from_str("navigator is busy"))
    }

    fn nav_mut(&self) -> Result<RefMut<'_, Orchestrator>, JsValue> {
        self.inner
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("navigator is busy"))
    }

    fn update(&self, change: impl FnOnce(&mut NavigatorParams)) -> Result<(), JsValue> {
        let mut nav = self.nav_mut()?;
        let mut params = *nav.settings();
        change(&mut params);
        nav.update_settings(params);
        Ok(())
    }
}
