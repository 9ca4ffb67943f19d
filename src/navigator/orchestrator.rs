//! Navigation orchestrator
//!
//! State machine tying the catalog, geolocation, distance estimation, voice
//! and history together:
//!
//! ```text
//! Idle --tap--> Locating --fix--> Succeeded --> Idle
//!                        --error--> Failed ----> Idle
//! ```
//!
//! A request is split into [`begin`](NavigationOrchestrator::begin) and
//! [`complete`](NavigationOrchestrator::complete) so a host can release its
//! borrow of the orchestrator while the position query is pending. Taps
//! arriving while `Locating` are ignored; responses carrying an outdated
//! request token are discarded.

use campus_nav_core::catalog::{Place, PlaceCatalog};
use campus_nav_core::geolocation::{GeoFailure, GeoFix};
use campus_nav_core::history::{time_label, HistoryEntry, HistoryLog};
use campus_nav_core::navigation::{NavigationRequest, NavigationState, RouteEstimate};
use campus_nav_core::parameters::NavigatorParams;
use campus_nav_core::search::{self, SearchOutcome};
use campus_nav_core::speech::SpeakOutcome;
use campus_nav_core::status::StatusUpdate;

use super::announcement::{failure_status, success_speech, success_status, TEST_VOICE_TEXT};
use super::directions::directions_url;
use super::result::{NavigationOutcome, NavigationResult};
use crate::config::NavigatorConfig;
use crate::devices::{GeolocationClient, VoiceAnnouncer};
use crate::platform::traits::{HostInterface, Platform, PlatformParts, TimeSource};
use crate::{log_debug, log_error, log_info, log_warn};

/// Navigation orchestrator
pub struct NavigationOrchestrator<P: Platform> {
    catalog: PlaceCatalog,
    params: NavigatorParams,
    locator: GeolocationClient<P::Geolocation>,
    announcer: VoiceAnnouncer<P::Speech>,
    host: P::Host,
    clock: P::Clock,
    state: NavigationState,
    last_token: u64,
    pending: Option<NavigationRequest>,
    status: StatusUpdate,
    last_result: Option<NavigationResult>,
    last_spoken: Option<String>,
    note: Option<String>,
    history: HistoryLog,
}

impl<P: Platform> NavigationOrchestrator<P> {
    /// Create an orchestrator over a platform
    ///
    /// Settings are clamped into range. Renders the initial status.
    pub fn new(platform: P, catalog: PlaceCatalog, params: NavigatorParams) -> Self {
        let PlatformParts {
            geolocation,
            speech,
            host,
            clock,
        } = platform.into_parts();

        let params = params.clamped();
        let status = StatusUpdate::ready();
        host.render_status(&status);

        log_info!(
            "Navigator ready: {} places, travel preference {}",
            catalog.len(),
            params.travel_preference.as_str()
        );

        Self {
            catalog,
            params,
            locator: GeolocationClient::new(geolocation, params.geo_options()),
            announcer: VoiceAnnouncer::new(speech),
            host,
            clock,
            state: NavigationState::Idle,
            last_token: 0,
            pending: None,
            status,
            last_result: None,
            last_spoken: None,
            note: None,
            history: HistoryLog::new(),
        }
    }

    /// Create an orchestrator from a loaded configuration
    pub fn from_config(platform: P, config: NavigatorConfig) -> Self {
        let NavigatorConfig { params, catalog } = config;
        Self::new(platform, catalog, params)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Start a request for `place` (`Idle → Locating`)
    ///
    /// Returns `None` and changes nothing while another request is locating.
    pub fn begin(&mut self, place: &Place) -> Option<NavigationRequest> {
        if self.state == NavigationState::Locating {
            log_info!(
                "Ignoring tap on {}: request #{} still locating",
                place.name,
                self.last_token
            );
            return None;
        }

        self.last_token += 1;
        let request = NavigationRequest::new(self.last_token, place.clone(), self.clock.now_ms());
        log_info!("Navigation request #{} to {}", request.token, place.name);

        self.transition(NavigationState::Locating);
        self.pending = Some(request.clone());
        self.announcer.cancel();
        self.note = None;
        self.set_status(StatusUpdate::locating());

        Some(request)
    }

    /// Finish a request with the geolocation response
    ///
    /// Returns `None` if the response is stale (unknown token, or nothing is
    /// locating). Otherwise opens the directions or fallback link, announces
    /// the result and returns to `Idle`.
    pub fn complete(
        &mut self,
        request: &NavigationRequest,
        response: Result<GeoFix, GeoFailure>,
    ) -> Option<NavigationOutcome> {
        let is_current = self.state == NavigationState::Locating
            && self
                .pending
                .as_ref()
                .is_some_and(|pending| pending.token == request.token);
        if !is_current {
            log_warn!("Discarding stale response for request #{}", request.token);
            return None;
        }
        self.pending = None;

        let outcome = match response {
            Ok(fix) => self.succeed(request, fix),
            Err(failure) => self.fail(request, failure),
        };

        self.transition(NavigationState::Idle);
        Some(outcome)
    }

    /// Run a whole request: `begin`, acquire a fix, `complete`
    ///
    /// The position query is the only suspension point.
    pub async fn navigate(&mut self, place: &Place) -> Option<NavigationOutcome> {
        let request = self.begin(place)?;
        let response = self.locator.acquire().await;
        self.complete(&request, response)
    }

    fn succeed(&mut self, request: &NavigationRequest, fix: GeoFix) -> NavigationOutcome {
        let estimate = RouteEstimate::from_fix(&fix, &request.place, self.params.travel_preference);
        let url = directions_url(estimate.origin, &estimate.destination.name, estimate.travel_mode);

        self.transition(NavigationState::Succeeded);
        self.set_status(success_status(&estimate));
        self.open_link(&url);
        self.announce(&success_speech(&estimate));

        let label = time_label(request.requested_at_ms, self.clock.utc_offset_minutes());
        let entry = HistoryEntry::from_estimate(&estimate, label);
        self.host.append_history(&entry);
        self.history.push(entry);

        let result = NavigationResult {
            estimate,
            directions_url: url,
        };
        self.last_result = Some(result.clone());
        NavigationOutcome::Succeeded(result)
    }

    fn fail(&mut self, request: &NavigationRequest, failure: GeoFailure) -> NavigationOutcome {
        log_warn!(
            "Request #{} to {} failed: {}",
            request.token,
            request.place.name,
            failure.name()
        );

        self.transition(NavigationState::Failed);
        self.set_status(failure_status(failure));
        self.open_link(&request.place.map_url);
        self.announce(failure.message());

        NavigationOutcome::Failed {
            destination: request.place.clone(),
            failure,
        }
    }

    fn transition(&mut self, next: NavigationState) {
        if !self.state.can_transition_to(next) {
            log_error!(
                "Invalid navigation transition: {} -> {}",
                self.state.name(),
                next.name()
            );
            return;
        }
        log_debug!(
            "Navigation transition: {} -> {}",
            self.state.name(),
            next.name()
        );
        self.state = next;
    }

    // ------------------------------------------------------------------
    // Host output
    // ------------------------------------------------------------------

    fn set_status(&mut self, status: StatusUpdate) {
        self.host.render_status(&status);
        self.status = status;
    }

    fn open_link(&mut self, url: &str) {
        match self.host.open_url(url) {
            Ok(()) => log_info!("Opened {}", url),
            Err(error) => {
                log_error!("Failed to open link: {}", error);
                self.set_note(format!(
                    "Could not open Google Maps automatically ({}). Please allow pop-ups and try again.",
                    error
                ));
            }
        }
    }

    fn announce(&mut self, text: &str) -> SpeakOutcome {
        self.host.render_spoken(text);
        self.last_spoken = Some(text.to_string());

        let outcome = self
            .announcer
            .speak(text, self.params.voice_rate, self.params.voice_enabled);
        if let SpeakOutcome::Failed(note) = &outcome {
            self.set_note(note.clone());
        }
        outcome
    }

    fn set_note(&mut self, note: String) {
        self.host.render_note(&note);
        self.note = Some(note);
    }

    // ------------------------------------------------------------------
    // Host actions
    // ------------------------------------------------------------------

    /// Speak the voice test sentence
    pub fn test_voice(&mut self) -> SpeakOutcome {
        log_debug!("Voice test");
        self.announce(TEST_VOICE_TEXT)
    }

    /// Empty the session history
    pub fn clear_history(&mut self) {
        log_info!("Clearing {} history entries", self.history.len());
        self.history.clear();
        self.host.clear_history();
    }

    /// Replace the host settings (clamped into range)
    pub fn update_settings(&mut self, params: NavigatorParams) {
        let params = params.clamped();
        self.locator.set_options(params.geo_options());
        log_info!(
            "Settings updated: travel={}, voice={}, rate={:.2}",
            params.travel_preference.as_str(),
            params.voice_enabled,
            params.voice_rate
        );
        self.params = params;
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current phase
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Current status line
    pub fn status(&self) -> &StatusUpdate {
        &self.status
    }

    /// Result of the most recent successful request
    pub fn last_result(&self) -> Option<&NavigationResult> {
        self.last_result.as_ref()
    }

    /// Most recent announcement text (shown even when voice is off)
    pub fn last_spoken(&self) -> Option<&str> {
        self.last_spoken.as_deref()
    }

    /// Latest voice or link problem since the last tap
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Session history
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Current settings
    pub fn settings(&self) -> &NavigatorParams {
        &self.params
    }

    /// Place catalog
    pub fn catalog(&self) -> &PlaceCatalog {
        &self.catalog
    }

    /// Request waiting for its position fix
    pub fn pending_request(&self) -> Option<&NavigationRequest> {
        self.pending.as_ref()
    }

    /// Filter the catalog by a free-text query
    pub fn search(&self, query: &str) -> SearchOutcome {
        search::search(self.catalog.sections(), query)
    }

    /// Geolocation client sharing this orchestrator's provider and options
    pub fn locator(&self) -> GeolocationClient<P::Geolocation> {
        self.locator.clone()
    }
}
