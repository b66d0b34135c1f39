// ABOUTME: Zone aggregator merging normalized rows from many activities into one table
// ABOUTME: Discovers label columns in first-seen order, zero-fills gaps, appends a Total row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::collections::HashMap;
use std::iter;
use tracing::debug;
use zone_core::errors::ZoneError;
use zone_core::models::{ZoneDomain, ZoneMetadata};

use super::classifier::ZoneLabel;
use super::normalizer::NormalizedRow;

/// One activity's row in a finalized table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRow {
    /// Activity id
    pub activity_id: u64,
    /// Passthrough metadata
    pub metadata: ZoneMetadata,
    /// Seconds per column, aligned with `AggregateTable::columns`; 0 where absent
    pub values: Vec<f64>,
    /// Sum of the activity's bucket times
    pub zones_sum: f64,
}

/// Column sums over every activity row
///
/// Carries no metadata: identifiers and flags are not additive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalRow {
    /// Seconds per column, aligned with `AggregateTable::columns`
    pub values: Vec<f64>,
    /// Sum of every activity's `zones_sum`
    pub zones_sum: f64,
}

/// Row view distinguishing activity rows from the Total row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableRow<'a> {
    /// A real activity
    Activity(&'a ActivityRow),
    /// The synthetic Total row
    Total(&'a TotalRow),
}

impl TableRow<'_> {
    /// Label shown in the row header
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Activity(row) => row.activity_id.to_string(),
            Self::Total(_) => "Total".to_owned(),
        }
    }

    /// Per-column values
    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Activity(row) => &row.values,
            Self::Total(row) => &row.values,
        }
    }

    /// Row's `zones_sum`
    #[must_use]
    pub const fn zones_sum(&self) -> f64 {
        match self {
            Self::Activity(row) => row.zones_sum,
            Self::Total(row) => row.zones_sum,
        }
    }

    /// Metadata, `None` for the Total row
    #[must_use]
    pub const fn metadata(&self) -> Option<&ZoneMetadata> {
        match self {
            Self::Activity(row) => Some(&row.metadata),
            Self::Total(_) => None,
        }
    }
}

/// Finalized, read-only table for one domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateTable {
    /// Domain of every row
    pub domain: ZoneDomain,
    /// Union of labels over all rows, in first-seen order
    pub columns: Vec<ZoneLabel>,
    /// One row per activity, in insertion order
    pub activities: Vec<ActivityRow>,
    /// Column sums
    pub total: TotalRow,
}

impl AggregateTable {
    /// Activity rows followed by the Total row
    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.activities
            .iter()
            .map(TableRow::Activity)
            .chain(iter::once(TableRow::Total(&self.total)))
    }

    /// Position of `label` in `columns`
    #[must_use]
    pub fn column_index(&self, label: &ZoneLabel) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Total seconds under `label`
    #[must_use]
    pub fn column_total(&self, label: &ZoneLabel) -> Option<f64> {
        self.column_index(label).map(|i| self.total.values[i])
    }

    /// Seconds one activity spent under `label`
    #[must_use]
    pub fn value(&self, activity_id: u64, label: &ZoneLabel) -> Option<f64> {
        let index = self.column_index(label)?;
        self.activities
            .iter()
            .find(|row| row.activity_id == activity_id)
            .map(|row| row.values[index])
    }

    /// Number of activity rows
    #[must_use]
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

/// Incremental table builder: push one row per activity, then finalize
#[derive(Debug, Clone)]
pub struct ZoneAggregator {
    domain: ZoneDomain,
    columns: Vec<ZoneLabel>,
    column_index: HashMap<ZoneLabel, usize>,
    rows: Vec<NormalizedRow>,
}

impl ZoneAggregator {
    /// Empty builder for `domain`
    #[must_use]
    pub fn new(domain: ZoneDomain) -> Self {
        Self {
            domain,
            columns: Vec::new(),
            column_index: HashMap::new(),
            rows: Vec::new(),
        }
    }

    /// Add one activity's row, extending the column set with unseen labels
    ///
    /// # Errors
    ///
    /// `DomainMismatch` when the row belongs to another domain.
    pub fn push(&mut self, row: NormalizedRow) -> Result<(), ZoneError> {
        if row.domain != self.domain {
            return Err(ZoneError::DomainMismatch {
                activity_id: row.activity_id,
                expected: self.domain,
                found: row.domain,
            });
        }

        for label in row.labels() {
            if !self.column_index.contains_key(label) {
                self.column_index.insert(label.clone(), self.columns.len());
                self.columns.push(label.clone());
            }
        }
        self.rows.push(row);
        Ok(())
    }

    /// Rows pushed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True before any row is pushed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Zero-fill missing cells and append the Total row
    #[must_use]
    pub fn finalize(self) -> AggregateTable {
        let width = self.columns.len();
        let mut total = TotalRow {
            values: vec![0.0; width],
            zones_sum: 0.0,
        };

        let activities: Vec<ActivityRow> = self
            .rows
            .into_iter()
            .map(|row| {
                let mut values = vec![0.0; width];
                for (label, seconds) in row.iter() {
                    if let Some(&index) = self.column_index.get(label) {
                        values[index] += seconds;
                    }
                }
                for (sum, value) in total.values.iter_mut().zip(&values) {
                    *sum += value;
                }
                total.zones_sum += row.zones_sum;

                ActivityRow {
                    activity_id: row.activity_id,
                    metadata: row.metadata,
                    values,
                    zones_sum: row.zones_sum,
                }
            })
            .collect();

        debug!(
            zone.domain = %self.domain,
            activities = activities.len(),
            columns = width,
            "Aggregated zone table"
        );

        AggregateTable {
            domain: self.domain,
            columns: self.columns,
            activities,
            total,
        }
    }
}

/// Build a table from a sequence of rows in one call
///
/// # Errors
///
/// `DomainMismatch` if any row belongs to another domain.
pub fn aggregate<I>(domain: ZoneDomain, rows: I) -> Result<AggregateTable, ZoneError>
where
    I: IntoIterator<Item = NormalizedRow>,
{
    let mut aggregator = ZoneAggregator::new(domain);
    for row in rows {
        aggregator.push(row)?;
    }
    Ok(aggregator.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_aggregate_has_zero_total() {
        let table = aggregate(ZoneDomain::Pace, Vec::new()).unwrap();
        assert!(table.columns.is_empty());
        assert_eq!(table.activity_count(), 0);
        assert!(table.total.zones_sum.abs() < f64::EPSILON);
        assert_eq!(table.rows().count(), 1);
    }
}
