//! Session navigation history
//!
//! Append-only list of successful navigations for the current session.
//! Hosts display the most recent entries, newest first.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::catalog::Coordinate;
use crate::navigation::{RouteEstimate, TravelMode};

/// Number of entries hosts show
pub const RECENT_VIEW_LEN: usize = 5;

const MS_PER_MINUTE: i64 = 60_000;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// One past navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Destination name
    pub destination: String,
    /// Local time of the tap, `HH:MM`
    pub time_label: String,
    /// Distance at the time of the fix, if known
    pub distance_km: Option<f64>,
    /// Travel mode used for directions
    pub mode: TravelMode,
    /// User position at the time of the fix
    pub coordinate: Coordinate,
}

impl HistoryEntry {
    /// Build an entry from a route estimate
    pub fn from_estimate(estimate: &RouteEstimate, time_label: String) -> Self {
        Self {
            destination: estimate.destination.name.clone(),
            time_label,
            distance_km: estimate.distance_km,
            mode: estimate.travel_mode,
            coordinate: estimate.origin,
        }
    }
}

/// Session history
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Most recent entries, newest first, at most [`RECENT_VIEW_LEN`]
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter().rev().take(RECENT_VIEW_LEN)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format epoch milliseconds as a local `HH:MM` label
///
/// `utc_offset_minutes` is the host's offset east of UTC (IST is +330).
pub fn time_label(epoch_ms: u64, utc_offset_minutes: i32) -> String {
    let minutes = (epoch_ms / MS_PER_MINUTE as u64) as i64 + i64::from(utc_offset_minutes);
    let minute_of_day = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Place;
    use crate::geolocation::GeoFix;
    use crate::navigation::TravelPreference;

    fn entry(name: &str) -> HistoryEntry {
        HistoryEntry {
            destination: name.into(),
            time_label: "10:00".into(),
            distance_km: Some(0.5),
            mode: TravelMode::Walking,
            coordinate: Coordinate::new(12.21, 75.13),
        }
    }

    #[test]
    fn test_history_append_only() {
        let mut log = HistoryLog::new();
        assert!(log.is_empty());
        log.push(entry("A"));
        log.push(entry("B"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].destination, "A");
        assert_eq!(log.entries()[1].destination, "B");
    }

    #[test]
    fn test_recent_is_newest_first_and_capped() {
        let mut log = HistoryLog::new();
        for name in ["1", "2", "3", "4", "5", "6", "7"] {
            log.push(entry(name));
        }
        let recent: Vec<&str> = log.recent().map(|e| e.destination.as_str()).collect();
        assert_eq!(recent, ["7", "6", "5", "4", "3"]);
        assert_eq!(log.len(), 7);
    }

    #[test]
    fn test_clear() {
        let mut log = HistoryLog::new();
        log.push(entry("A"));
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.recent().count(), 0);
    }

    #[test]
    fn test_entry_from_estimate() {
        let place = Place::new("Central Library", "Academic Facilities", "https://m/lib")
            .with_coordinate(12.2123142, 75.1351663);
        let fix = GeoFix::new(Coordinate::new(12.2116825, 75.1343226), 10.0);
        let result = RouteEstimate::from_fix(&fix, &place, TravelPreference::Auto);

        let entry = HistoryEntry::from_estimate(&result, "09:15".into());
        assert_eq!(entry.destination, "Central Library");
        assert_eq!(entry.mode, TravelMode::Walking);
        assert_eq!(entry.coordinate, fix.coordinate);
        assert!((entry.distance_km.unwrap() - 0.12).abs() < 0.01);
    }

    #[test]
    fn test_time_label_utc() {
        // 2024-01-01T13:45:30Z
        assert_eq!(time_label(1_704_116_730_000, 0), "13:45");
        assert_eq!(time_label(0, 0), "00:00");
    }

    #[test]
    fn test_time_label_applies_offset() {
        // 13:45 UTC is 19:15 IST
        assert_eq!(time_label(1_704_116_730_000, 330), "19:15");
        // 00:30 UTC minus 5h is 19:30 the day before
        assert_eq!(time_label(30 * 60_000, -300), "19:30");
    }
}
