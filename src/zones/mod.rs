// ABOUTME: Zone-bucket normalization and aggregation engine
// ABOUTME: Classifies raw buckets, builds per-activity rows, merges tables, derives shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Zone Engine
//!
//! Pure, synchronous transformations over already-fetched zone data:
//!
//! 1. [`classifier`] maps one `{min, max, time}` bucket to a canonical label
//! 2. [`normalizer`] applies the classifier to one activity's distribution
//! 3. [`aggregator`] merges normalized rows into a table with a Total row
//! 4. [`summary`] turns the Total row into a percentage vector

/// Interval classification and pace conversion
pub mod classifier;

/// Per-activity row normalization
pub mod normalizer;

/// Cross-activity table aggregation
pub mod aggregator;

/// Percentage-share summaries
pub mod summary;

pub use aggregator::{aggregate, ActivityRow, AggregateTable, TableRow, TotalRow, ZoneAggregator};
pub use classifier::{classify, ClassifiedBucket, ZoneLabel};
pub use normalizer::{normalize, select_distribution, NormalizedRow};
pub use summary::{summarize, ZoneSummary};
