//! Time abstraction traits for platform-agnostic timestamps.
//!
//! This module provides the `TimeSource` trait that abstracts over different
//! wall clocks (browser `Date`, system clock, mock) so request timestamps and
//! history labels can be tested without a real clock.

use core::cell::Cell;

/// Platform-agnostic wall clock.
///
/// This trait abstracts over different clock providers:
/// - `BrowserClock` (in the web crate) backed by `Date.now()`
/// - `SystemClock` (in the host crate) backed by `std::time::SystemTime`
/// - `MockTime` for host testing with controllable time
///
/// # Example
///
/// ```
/// use campus_nav_core::history::time_label;
/// use campus_nav_core::traits::{MockTime, TimeSource};
///
/// fn label<T: TimeSource>(time: &T) -> String {
///     time_label(time.now_ms(), time.utc_offset_minutes())
/// }
///
/// let time = MockTime::with_initial(9 * 3_600_000);
/// assert_eq!(label(&time), "09:00");
/// ```
pub trait TimeSource: Clone {
    /// Returns wall-clock time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;

    /// Returns the local offset east of UTC in minutes.
    fn utc_offset_minutes(&self) -> i32 {
        0
    }

    /// Returns elapsed milliseconds since a reference point.
    ///
    /// Uses saturating subtraction so a clock stepping backwards reads as 0.
    fn elapsed_since(&self, reference_ms: u64) -> u64 {
        self.now_ms().saturating_sub(reference_ms)
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source for testing with controllable time advancement.
///
/// # Example
///
/// ```
/// use campus_nav_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// assert_eq!(time.now_ms(), 0);
///
/// time.advance(1500);
/// assert_eq!(time.now_ms(), 1500);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockTime {
    current_ms: Cell<u64>,
    offset_minutes: Cell<i32>,
}

impl MockTime {
    /// Creates a new `MockTime` at the epoch in UTC.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `MockTime` starting at the specified time.
    pub fn with_initial(ms: u64) -> Self {
        Self {
            current_ms: Cell::new(ms),
            offset_minutes: Cell::new(0),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, ms: u64) {
        self.current_ms.set(ms);
    }

    /// Advances the current time by the specified amount.
    pub fn advance(&self, ms: u64) {
        self.current_ms.set(self.current_ms.get() + ms);
    }

    /// Sets the reported UTC offset.
    pub fn set_utc_offset(&self, minutes: i32) {
        self.offset_minutes.set(minutes);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_ms.get()
    }

    fn utc_offset_minutes(&self) -> i32 {
        self.offset_minutes.get()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
