//! Mock geolocation provider for testing

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use campus_nav_core::catalog::Coordinate;
use campus_nav_core::geolocation::{GeoFix, GeoOptions, PositionError, POSITION_UNAVAILABLE};

use crate::platform::traits::GeolocationInterface;

#[derive(Debug)]
struct GeoState {
    supported: bool,
    responses: VecDeque<Result<GeoFix, PositionError>>,
    requests: Vec<GeoOptions>,
}

/// Mock geolocation provider
///
/// Answers queries from a queue of scripted responses. An empty queue
/// answers with `POSITION_UNAVAILABLE`.
///
/// # Example
///
/// ```
/// use campus_nav::platform::mock::MockGeolocation;
///
/// let geo = MockGeolocation::new();
/// geo.push_fix(12.2116825, 75.1343226, 10.0);
/// geo.push_error(1, "User denied Geolocation");
/// assert_eq!(geo.request_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockGeolocation {
    state: Rc<RefCell<GeoState>>,
}

impl MockGeolocation {
    /// Create a supported provider with no scripted responses
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(GeoState {
                supported: true,
                responses: VecDeque::new(),
                requests: Vec::new(),
            })),
        }
    }

    /// Create a provider reporting no geolocation capability
    pub fn unsupported() -> Self {
        let geo = Self::new();
        geo.set_supported(false);
        geo
    }

    /// Toggle capability support
    pub fn set_supported(&self, supported: bool) {
        self.state.borrow_mut().supported = supported;
    }

    /// Queue a successful fix
    pub fn push_fix(&self, lat: f64, lng: f64, accuracy_m: f64) {
        self.state
            .borrow_mut()
            .responses
            .push_back(Ok(GeoFix::new(Coordinate::new(lat, lng), accuracy_m)));
    }

    /// Queue a raw provider error
    pub fn push_error(&self, code: u16, message: &str) {
        self.state
            .borrow_mut()
            .responses
            .push_back(Err(PositionError::new(code, message)));
    }

    /// Options of every query received so far
    pub fn requests(&self) -> Vec<GeoOptions> {
        self.state.borrow().requests.clone()
    }

    /// Number of queries received so far
    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }
}

impl Default for MockGeolocation {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl GeolocationInterface for MockGeolocation {
    fn is_supported(&self) -> bool {
        self.state.borrow().supported
    }

    async fn current_position(&self, options: &GeoOptions) -> Result<GeoFix, PositionError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(*options);
        state.responses.pop_front().unwrap_or_else(|| {
            Err(PositionError::new(
                POSITION_UNAVAILABLE,
                "no scripted response",
            ))
        })
    }
}
