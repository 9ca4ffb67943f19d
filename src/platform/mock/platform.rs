//! Mock Platform implementation for testing

use campus_nav_core::traits::MockTime;

use super::{MockGeolocation, MockHost, MockSpeech};
use crate::platform::traits::{Platform, PlatformParts};

/// Mock Platform implementation
///
/// Provides mock capabilities for browser-free testing. Fields are public
/// handles: clone them before `into_parts()` to inspect the recorded calls.
///
/// # Example
///
/// ```
/// use campus_nav::platform::mock::MockPlatform;
///
/// let platform = MockPlatform::new();
/// let geo = platform.geolocation.clone();
/// geo.push_error(1, "denied");
/// ```
#[derive(Debug, Clone)]
pub struct MockPlatform {
    /// Scripted geolocation provider
    pub geolocation: MockGeolocation,
    /// Recording speech engine
    pub speech: MockSpeech,
    /// Recording host page
    pub host: MockHost,
    /// Controllable clock
    pub clock: MockTime,
}

impl MockPlatform {
    /// Create a new mock platform with supported capabilities
    pub fn new() -> Self {
        Self {
            geolocation: MockGeolocation::new(),
            speech: MockSpeech::new(),
            host: MockHost::new(),
            clock: MockTime::new(),
        }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: MockTime) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the speech engine
    pub fn with_speech(mut self, speech: MockSpeech) -> Self {
        self.speech = speech;
        self
    }

    /// Replace the geolocation provider
    pub fn with_geolocation(mut self, geolocation: MockGeolocation) -> Self {
        self.geolocation = geolocation;
        self
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Geolocation = MockGeolocation;
    type Speech = MockSpeech;
    type Host = MockHost;
    type Clock = MockTime;

    fn into_parts(self) -> PlatformParts<Self> {
        PlatformParts {
            geolocation: self.geolocation,
            speech: self.speech,
            host: self.host,
            clock: self.clock,
        }
    }
}
