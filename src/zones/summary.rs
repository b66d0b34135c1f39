// ABOUTME: Summary reporter deriving percentage shares from an aggregate table's Total row
// ABOUTME: Output feeds both the tabular summary and the proportion chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use zone_core::errors::ZoneError;
use zone_core::models::ZoneDomain;

use super::aggregator::AggregateTable;
use super::classifier::ZoneLabel;

/// Total seconds and share of total per label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSummary {
    /// Domain summarized
    pub domain: ZoneDomain,
    /// Labels in table column order
    pub labels: Vec<ZoneLabel>,
    /// Total seconds per label
    pub values: Vec<f64>,
    /// `value / sum(values) * 100` per label
    pub percentages: Vec<f64>,
}

impl ZoneSummary {
    /// `(label, seconds, percent)` triples
    pub fn entries(&self) -> impl Iterator<Item = (&ZoneLabel, f64, f64)> {
        self.labels
            .iter()
            .zip(self.values.iter().copied())
            .zip(self.percentages.iter().copied())
            .map(|((label, seconds), percent)| (label, seconds, percent))
    }

    /// Sum of `values`
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Read the Total row of `table` and compute each label's share
///
/// # Errors
///
/// `EmptyDataset` when the table has no activities or no recorded time.
pub fn summarize(table: &AggregateTable) -> Result<ZoneSummary, ZoneError> {
    let values = table.total.values.clone();
    let sum: f64 = values.iter().sum();

    if table.activities.is_empty() || sum <= 0.0 || !sum.is_finite() {
        return Err(ZoneError::EmptyDataset {
            domain: table.domain,
        });
    }

    let percentages = values.iter().map(|v| v / sum * 100.0).collect();

    Ok(ZoneSummary {
        domain: table.domain,
        labels: table.columns.clone(),
        values,
        percentages,
    })
}
