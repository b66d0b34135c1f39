// ABOUTME: Data-shape errors raised while classifying and aggregating zone buckets
// ABOUTME: Each variant carries activity id, domain, and bounds for diagnosis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::ZoneDomain;

/// Errors produced by the zone classification and aggregation engine
///
/// None of these are transient: they describe the shape of fetched data, so
/// the whole run fails closed instead of producing a partial aggregate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZoneError {
    /// An activity's zones response has no entry for the requested domain
    #[error("activity {activity_id} has no '{domain}' zone distribution")]
    MissingZoneType {
        /// Activity whose response was inspected
        activity_id: u64,
        /// Domain that was requested
        domain: ZoneDomain,
    },

    /// A pace bound that must be converted is zero or not a positive speed
    #[error(
        "activity {activity_id}: '{domain}' bucket [{min}, {max}] cannot be converted to a pace"
    )]
    DegenerateInterval {
        /// Activity the bucket belongs to
        activity_id: u64,
        /// Domain of the bucket
        domain: ZoneDomain,
        /// Raw lower bound
        min: f64,
        /// Raw upper bound
        max: f64,
    },

    /// A bucket reported a negative or non-finite duration
    #[error("activity {activity_id}: '{domain}' bucket has invalid duration {time}s")]
    InvalidDuration {
        /// Activity the bucket belongs to
        activity_id: u64,
        /// Domain of the bucket
        domain: ZoneDomain,
        /// Reported seconds
        time: f64,
    },

    /// A row was pushed into a table built for another domain
    #[error("activity {activity_id}: '{found}' row cannot join a '{expected}' table")]
    DomainMismatch {
        /// Activity of the rejected row
        activity_id: u64,
        /// Domain of the table
        expected: ZoneDomain,
        /// Domain of the row
        found: ZoneDomain,
    },

    /// No time was recorded in any zone, so shares are undefined
    #[error("no '{domain}' zone time recorded in the selected activities")]
    EmptyDataset {
        /// Domain being summarized
        domain: ZoneDomain,
    },
}

impl ZoneError {
    /// Activity the error refers to, if any
    #[must_use]
    pub const fn activity_id(&self) -> Option<u64> {
        match self {
            Self::MissingZoneType { activity_id, .. }
            | Self::DegenerateInterval { activity_id, .. }
            | Self::InvalidDuration { activity_id, .. }
            | Self::DomainMismatch { activity_id, .. } => Some(*activity_id),
            Self::EmptyDataset { .. } => None,
        }
    }

    /// Domain the error refers to
    #[must_use]
    pub const fn domain(&self) -> ZoneDomain {
        match self {
            Self::MissingZoneType { domain, .. }
            | Self::DegenerateInterval { domain, .. }
            | Self::InvalidDuration { domain, .. }
            | Self::EmptyDataset { domain } => *domain,
            Self::DomainMismatch { expected, .. } => *expected,
        }
    }
}
