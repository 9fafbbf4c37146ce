//! Location log embedded in survey records
//!
//! An ordered sequence of geo-timestamped points captured during a site
//! visit. Insertion order is chronological by convention only; nothing
//! enforces it. The summary counter and the start/end times are independent
//! fields carried alongside the sequence, so they can be unset (or drift)
//! even when points exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel returned when a record has no location points
pub const NO_LOCATION_DATA: &str = "No location data";

/// Placeholder for an unset start/end time in a non-empty log
const TIME_PLACEHOLDER: &str = "N/A";

/// A single geo-timestamped point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

/// The location tracking data of one survey record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationLog {
    /// Ordered point sequence, append-only by convention
    pub points: Vec<LocationPoint>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Separate counter; formatted as stored, never recomputed
    pub total_points: i32,
}

impl LocationLog {
    /// Human-readable summary: `"<count> points | <start> to <end>"`,
    /// or the fixed sentinel when the sequence is empty.
    pub fn summary(&self) -> String {
        if self.points.is_empty() {
            return NO_LOCATION_DATA.to_string();
        }

        let start = self
            .start_time
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| TIME_PLACEHOLDER.to_string());
        let end = self
            .end_time
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| TIME_PLACEHOLDER.to_string());

        format!("{} points | {} to {}", self.total_points, start, end)
    }

    /// First captured point; `None` on an empty sequence (a valid state,
    /// not a failure)
    pub fn first(&self) -> Option<&LocationPoint> {
        self.points.first()
    }

    /// Last captured point; `None` on an empty sequence
    pub fn last(&self) -> Option<&LocationPoint> {
        self.points.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(lat: f64, lon: f64, hour: u32) -> LocationPoint {
        LocationPoint {
            latitude: lat,
            longitude: lon,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 14, hour, 30, 0).unwrap(),
        }
    }

    #[test]
    fn empty_log_uses_sentinel() {
        let log = LocationLog::default();
        assert_eq!(log.summary(), "No location data");
        assert!(log.first().is_none());
        assert!(log.last().is_none());
    }

    #[test]
    fn summary_formats_count_and_times() {
        let log = LocationLog {
            points: vec![point(23.81, 90.41, 9), point(23.82, 90.42, 11)],
            start_time: Some(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()),
            end_time: Some(Utc.with_ymd_and_hms(2025, 3, 14, 11, 45, 0).unwrap()),
            total_points: 2,
        };
        assert_eq!(log.summary(), "2 points | 2025-03-14 09:30 to 2025-03-14 11:45");
    }

    #[test]
    fn summary_placeholders_when_times_unset() {
        let log = LocationLog {
            points: vec![point(23.81, 90.41, 9)],
            start_time: None,
            end_time: None,
            total_points: 1,
        };
        assert_eq!(log.summary(), "1 points | N/A to N/A");
    }

    #[test]
    fn summary_trusts_stored_counter() {
        // The counter is maintained separately and may drift from the
        // actual sequence length; the summary reports it as stored.
        let log = LocationLog {
            points: vec![point(23.81, 90.41, 9)],
            start_time: None,
            end_time: None,
            total_points: 7,
        };
        assert!(log.summary().starts_with("7 points"));
    }

    #[test]
    fn first_and_last_return_boundary_points() {
        let log = LocationLog {
            points: vec![point(1.0, 2.0, 8), point(3.0, 4.0, 9), point(5.0, 6.0, 10)],
            start_time: None,
            end_time: None,
            total_points: 3,
        };
        assert_eq!(log.first().unwrap().latitude, 1.0);
        assert_eq!(log.last().unwrap().longitude, 6.0);
    }
}
