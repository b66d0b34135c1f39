// ABOUTME: Interval classifier mapping raw zone buckets to canonical labels
// ABOUTME: Heart-rate bounds are used as-is; pace bounds are converted from m/s to min/mile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use zone_core::constants::units::{MINUTES_PER_HOUR, MPS_TO_MPH, SECONDS_PER_MINUTE};
use zone_core::errors::ZoneError;
use zone_core::models::{ZoneBucket, ZoneDomain};

/// Stable, human-readable name of a classified interval
///
/// Derived only from a bucket's bounds and domain, so equal bounds always
/// produce equal labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneLabel(String);

impl ZoneLabel {
    /// Wrap an already-canonical label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Label text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Result of classifying one bucket
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedBucket {
    /// Canonical label
    pub label: ZoneLabel,
    /// Seconds spent in the interval, validated non-negative
    pub duration: f64,
}

/// Classify one bucket
///
/// `activity_id` is only used to give errors context.
///
/// # Errors
///
/// - `InvalidDuration` if `time` is negative or not finite
/// - `DegenerateInterval` if a pace bound that must be converted is not a
///   positive finite speed
pub fn classify(
    bucket: &ZoneBucket,
    domain: ZoneDomain,
    activity_id: u64,
) -> Result<ClassifiedBucket, ZoneError> {
    if !bucket.time.is_finite() || bucket.time < 0.0 {
        return Err(ZoneError::InvalidDuration {
            activity_id,
            domain,
            time: bucket.time,
        });
    }

    let label = match domain {
        ZoneDomain::HeartRate => heart_rate_label(bucket.min, bucket.max),
        ZoneDomain::Pace => {
            pace_label(bucket.min, bucket.max).ok_or(ZoneError::DegenerateInterval {
                activity_id,
                domain,
                min: bucket.min,
                max: bucket.max,
            })?
        }
    };

    Ok(ClassifiedBucket {
        label: ZoneLabel(label),
        duration: bucket.time,
    })
}

fn heart_rate_label(min: f64, max: f64) -> String {
    if min >= 0.0 && max >= 0.0 {
        format!("{min} - {max}")
    } else if min <= 0.0 {
        format!("{max}")
    } else {
        format!("{min}+")
    }
}

// A zero lower bound lands in the same branch as a negative sentinel.
fn pace_label(min: f64, max: f64) -> Option<String> {
    if min > 0.0 && max > 0.0 {
        Some(format!("{}-{}", format_pace(min)?, format_pace(max)?))
    } else if min <= 0.0 {
        Some(format!("> {}", format_pace(max)?))
    } else if min > 0.0 {
        Some(format!("< {}", format_pace(min)?))
    } else {
        None
    }
}

/// Convert a speed in m/s to decimal minutes per mile
///
/// Returns `None` for zero, negative, or non-finite speeds.
#[must_use]
pub fn speed_to_pace_minutes(speed_mps: f64) -> Option<f64> {
    if !speed_mps.is_finite() || speed_mps <= 0.0 {
        return None;
    }
    Some(MINUTES_PER_HOUR / (speed_mps * MPS_TO_MPH))
}

/// Render decimal minutes as `MM:SS`, truncating both parts
#[must_use]
pub fn format_minutes(pace_minutes: f64) -> String {
    let minutes = pace_minutes.trunc();
    let seconds = ((pace_minutes - minutes) * SECONDS_PER_MINUTE).trunc();
    format!("{:02}:{:02}", minutes as i64, seconds as i64)
}

/// Convert a speed in m/s straight to an `MM:SS` pace per mile
#[must_use]
pub fn format_pace(speed_mps: f64) -> Option<String> {
    speed_to_pace_minutes(speed_mps).map(format_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes_truncates_seconds() {
        assert_eq!(format_minutes(7.999), "07:59");
        assert_eq!(format_minutes(3.0), "03:00");
        assert_eq!(format_minutes(12.5), "12:30");
        assert_eq!(format_minutes(105.25), "105:15");
    }

    #[test]
    fn test_zero_speed_has_no_pace() {
        assert_eq!(speed_to_pace_minutes(0.0), None);
        assert_eq!(speed_to_pace_minutes(-1.0), None);
        assert_eq!(speed_to_pace_minutes(f64::NAN), None);
    }

    #[test]
    fn test_heart_rate_bounds_render_without_decimals() {
        assert_eq!(heart_rate_label(114.0, 153.0), "114 - 153");
        assert_eq!(heart_rate_label(-1.0, 114.0), "114");
        assert_eq!(heart_rate_label(150.0, -1.0), "150+");
    }
}
