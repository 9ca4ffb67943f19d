//! System wall clock

use std::time::{SystemTime, UNIX_EPOCH};

use crate::platform::TimeSource;

/// Wall clock backed by `std::time::SystemTime`
///
/// The UTC offset is fixed at construction; std has no portable way to read
/// the local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    utc_offset_minutes: i32,
}

impl SystemClock {
    /// Clock reporting UTC labels
    pub fn utc() -> Self {
        Self::default()
    }

    /// Clock reporting labels at a fixed offset east of UTC
    pub fn with_offset(utc_offset_minutes: i32) -> Self {
        Self { utc_offset_minutes }
    }
}

impl TimeSource for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }

    fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }
}
