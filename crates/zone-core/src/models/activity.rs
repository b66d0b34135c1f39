// ABOUTME: Activity listing entries and the date range used to request them
// ABOUTME: Only the activity id is needed downstream; the rest is passthrough
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Minimal activity entry from the athlete activities listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Strava activity id
    pub id: u64,
    /// Activity title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Strava activity type (`Run`, `Ride`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    /// Activity start time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}

impl ActivitySummary {
    /// Entry with only an id
    #[must_use]
    pub const fn with_id(id: u64) -> Self {
        Self {
            id,
            name: None,
            activity_type: None,
            start_date: None,
        }
    }
}

/// Half-open window of activity start times, `after <= start < before`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Lower bound
    pub after: DateTime<Utc>,
    /// Upper bound
    pub before: DateTime<Utc>,
}

impl DateRange {
    /// Build a range, rejecting `after > before`
    ///
    /// # Errors
    ///
    /// Returns `invalid_input` when the bounds are reversed.
    pub fn new(after: DateTime<Utc>, before: DateTime<Utc>) -> AppResult<Self> {
        if after > before {
            return Err(AppError::invalid_input(format!(
                "date range start {after} is after its end {before}"
            )));
        }
        Ok(Self { after, before })
    }

    /// `after` as epoch seconds
    #[must_use]
    pub fn after_epoch(&self) -> i64 {
        self.after.timestamp()
    }

    /// `before` as epoch seconds
    #[must_use]
    pub fn before_epoch(&self) -> i64 {
        self.before.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reversed_range_rejected() {
        let a = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(DateRange::new(a, b).is_err());
        let range = DateRange::new(b, a).unwrap();
        assert_eq!(range.after_epoch(), 1_704_067_200);
        assert_eq!(range.before_epoch(), 1_706_745_600);
    }

    #[test]
    fn test_activity_listing_ignores_unknown_fields() {
        let body = r#"{"id": 123, "name": "Morning Run", "type": "Run",
                       "start_date": "2024-01-15T10:00:00Z", "distance": 5000.0}"#;
        let activity: ActivitySummary = serde_json::from_str(body).unwrap();
        assert_eq!(activity.id, 123);
        assert_eq!(activity.activity_type.as_deref(), Some("Run"));
        assert!(activity.start_date.is_some());
    }
}
