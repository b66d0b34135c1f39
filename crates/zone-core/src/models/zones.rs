// ABOUTME: Zone distribution models as returned by the Strava activity zones endpoint
// ABOUTME: Defines ZoneDomain, ZoneBucket, ZoneDistribution, and passthrough ZoneMetadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement domain of a zone distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneDomain {
    /// Speed buckets in meters/second, reported as pace per mile
    #[serde(rename = "pace")]
    Pace,
    /// Heart-rate buckets in beats per minute
    #[serde(rename = "heartrate")]
    HeartRate,
}

impl ZoneDomain {
    /// All domains in report order
    pub const ALL: [Self; 2] = [Self::Pace, Self::HeartRate];

    /// Value of the `type` field Strava uses for this domain
    #[must_use]
    pub const fn strava_type(self) -> &'static str {
        match self {
            Self::Pace => "pace",
            Self::HeartRate => "heartrate",
        }
    }

    /// Title-case name for report headings
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pace => "Pace",
            Self::HeartRate => "Heartrate",
        }
    }

    /// Passthrough metadata columns carried by tables of this domain
    ///
    /// Heart-rate responses additionally carry `points` and `custom_zones`.
    #[must_use]
    pub const fn metadata_columns(self) -> &'static [&'static str] {
        match self {
            Self::Pace => &["type", "score", "resource_state", "sensor_based", "id"],
            Self::HeartRate => &[
                "type",
                "score",
                "resource_state",
                "sensor_based",
                "id",
                "points",
                "custom_zones",
            ],
        }
    }
}

impl fmt::Display for ZoneDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strava_type())
    }
}

impl FromStr for ZoneDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pace" => Ok(Self::Pace),
            "heartrate" | "heart_rate" | "hr" => Ok(Self::HeartRate),
            other => Err(format!("unknown zone domain '{other}'")),
        }
    }
}

/// One raw `{min, max, time}` interval from the zones feed
///
/// Negative bounds mean "unbounded in this direction"; zero is domain
/// dependent. `time` is seconds spent inside the interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBucket {
    /// Lower bound (m/s for pace, bpm for heart rate)
    pub min: f64,
    /// Upper bound (m/s for pace, bpm for heart rate)
    pub max: f64,
    /// Seconds spent in the interval
    pub time: f64,
}

impl ZoneBucket {
    /// Construct a bucket
    #[must_use]
    pub const fn new(min: f64, max: f64, time: f64) -> Self {
        Self { min, max, time }
    }
}

/// Non-additive fields passed through from a zone response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneMetadata {
    /// Strava's relative effort score for this distribution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Strava resource detail level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_state: Option<i64>,
    /// Whether the distribution came from a sensor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor_based: Option<bool>,
    /// Heart-rate effort points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    /// Whether the athlete configured custom heart-rate zones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_zones: Option<bool>,
}

/// One entry of an activity's zones response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDistribution {
    /// Raw zone type (`pace`, `heartrate`, `power`, ...)
    #[serde(rename = "type")]
    pub zone_type: String,
    /// Interval buckets for this zone type
    #[serde(default)]
    pub distribution_buckets: Vec<ZoneBucket>,
    /// Passthrough fields
    #[serde(flatten)]
    pub metadata: ZoneMetadata,
}

impl ZoneDistribution {
    /// Build a distribution for a known domain
    #[must_use]
    pub fn new(domain: ZoneDomain, buckets: Vec<ZoneBucket>) -> Self {
        Self {
            zone_type: domain.strava_type().to_owned(),
            distribution_buckets: buckets,
            metadata: ZoneMetadata::default(),
        }
    }

    /// Attach passthrough metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: ZoneMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Domain of this entry, `None` for zone types the report ignores
    #[must_use]
    pub fn domain(&self) -> Option<ZoneDomain> {
        ZoneDomain::ALL
            .into_iter()
            .find(|d| d.strava_type() == self.zone_type)
    }

    /// First entry of a zones response matching `domain`
    #[must_use]
    pub fn find(distributions: &[Self], domain: ZoneDomain) -> Option<&Self> {
        distributions.iter().find(|d| d.domain() == Some(domain))
    }

    /// Sum of `time` over every bucket
    #[must_use]
    pub fn zones_sum(&self) -> f64 {
        self.distribution_buckets.iter().map(|b| b.time).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_strava_zones_response() {
        let body = r#"[
            {"score": 42, "distribution_buckets": [{"min": 0, "max": 114, "time": 120},
                                                   {"min": 114, "max": -1, "time": 60}],
             "type": "heartrate", "resource_state": 3, "sensor_based": true,
             "points": 7, "custom_zones": false},
            {"score": 3, "distribution_buckets": [{"min": 0, "max": 2.5, "time": 10}],
             "type": "pace", "resource_state": 3, "sensor_based": true},
            {"distribution_buckets": [], "type": "power",
             "resource_state": 3, "sensor_based": false}
        ]"#;

        let parsed: Vec<ZoneDistribution> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.len(), 3);

        let hr = ZoneDistribution::find(&parsed, ZoneDomain::HeartRate).unwrap();
        assert_eq!(hr.distribution_buckets.len(), 2);
        assert_eq!(hr.metadata.points, Some(7));
        assert_eq!(hr.metadata.custom_zones, Some(false));
        assert!((hr.zones_sum() - 180.0).abs() < f64::EPSILON);

        let pace = ZoneDistribution::find(&parsed, ZoneDomain::Pace).unwrap();
        assert_eq!(pace.metadata.points, None);
        assert_eq!(parsed[2].domain(), None);
    }

    #[test]
    fn test_domain_parsing() {
        assert_eq!("pace".parse::<ZoneDomain>(), Ok(ZoneDomain::Pace));
        assert_eq!("HeartRate".parse::<ZoneDomain>(), Ok(ZoneDomain::HeartRate));
        assert_eq!("hr".parse::<ZoneDomain>(), Ok(ZoneDomain::HeartRate));
        assert!("power".parse::<ZoneDomain>().is_err());
    }

    #[test]
    fn test_heart_rate_carries_extra_metadata_columns() {
        assert!(!ZoneDomain::Pace.metadata_columns().contains(&"points"));
        assert!(ZoneDomain::HeartRate.metadata_columns().contains(&"points"));
        assert!(ZoneDomain::HeartRate
            .metadata_columns()
            .contains(&"custom_zones"));
    }
}
