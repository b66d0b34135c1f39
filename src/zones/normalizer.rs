// ABOUTME: Row normalizer turning one activity's zone distribution into label -> duration
// ABOUTME: Selects the domain entry from a zones response and sums bucket time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use zone_core::errors::ZoneError;
use zone_core::models::{ZoneDistribution, ZoneDomain, ZoneMetadata};

use super::classifier::{classify, ZoneLabel};

/// One activity's durations per canonical label, for one domain
///
/// Cells keep the order in which labels were first seen in the bucket list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRow {
    /// Activity the row describes
    pub activity_id: u64,
    /// Domain of the row
    pub domain: ZoneDomain,
    /// Passthrough metadata from the zone response
    pub metadata: ZoneMetadata,
    /// Sum of `time` over every bucket of the distribution
    pub zones_sum: f64,
    cells: Vec<(ZoneLabel, f64)>,
}

impl NormalizedRow {
    /// Duration recorded under `label`
    #[must_use]
    pub fn get(&self, label: &ZoneLabel) -> Option<f64> {
        self.cells
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, seconds)| *seconds)
    }

    /// `(label, seconds)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&ZoneLabel, f64)> {
        self.cells.iter().map(|(label, seconds)| (label, *seconds))
    }

    /// Labels in first-seen order
    pub fn labels(&self) -> impl Iterator<Item = &ZoneLabel> {
        self.cells.iter().map(|(label, _)| label)
    }

    /// Number of distinct labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the distribution had no buckets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn accumulate(&mut self, label: ZoneLabel, seconds: f64) {
        match self.cells.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, total)) => *total += seconds,
            None => self.cells.push((label, seconds)),
        }
    }
}

/// Pick the entry for `domain` out of an activity's zones response
///
/// # Errors
///
/// `MissingZoneType` when the response has no entry of that type.
pub fn select_distribution(
    activity_id: u64,
    distributions: &[ZoneDistribution],
    domain: ZoneDomain,
) -> Result<&ZoneDistribution, ZoneError> {
    ZoneDistribution::find(distributions, domain).ok_or(ZoneError::MissingZoneType {
        activity_id,
        domain,
    })
}

/// Classify every bucket of `distribution` and collect the durations by label
///
/// Buckets that map to the same label are summed.
///
/// # Errors
///
/// Propagates the first classifier failure.
pub fn normalize(
    activity_id: u64,
    distribution: &ZoneDistribution,
    domain: ZoneDomain,
) -> Result<NormalizedRow, ZoneError> {
    let mut row = NormalizedRow {
        activity_id,
        domain,
        metadata: distribution.metadata.clone(),
        zones_sum: 0.0,
        cells: Vec::with_capacity(distribution.distribution_buckets.len()),
    };

    for bucket in &distribution.distribution_buckets {
        let classified = classify(bucket, domain, activity_id)?;
        row.zones_sum += classified.duration;
        row.accumulate(classified.label, classified.duration);
    }

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zone_core::models::ZoneBucket;

    #[test]
    fn test_duplicate_labels_accumulate() {
        let distribution = ZoneDistribution::new(
            ZoneDomain::HeartRate,
            vec![
                ZoneBucket::new(-1.0, 114.0, 100.0),
                ZoneBucket::new(0.0, 114.0, 50.0),
                ZoneBucket::new(-5.0, 114.0, 25.0),
            ],
        );
        let row = normalize(1, &distribution, ZoneDomain::HeartRate).unwrap();

        // (-1, 114) and (-5, 114) share "114"; (0, 114) is the closed "0 - 114"
        assert_eq!(row.len(), 2);
        assert_eq!(row.get(&ZoneLabel::from("114")), Some(125.0));
        assert_eq!(row.get(&ZoneLabel::from("0 - 114")), Some(50.0));
        assert!((row.zones_sum - 175.0).abs() < f64::EPSILON);
    }
}
