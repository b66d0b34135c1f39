// ABOUTME: Batch pipeline from fetched activities to per-domain tables and summaries
// ABOUTME: Fetches sequentially, normalizes per domain, aggregates, and summarizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Zone Report Pipeline
//!
//! `fetch → select domain → normalize → aggregate → summarize`.
//!
//! Fetching is sequential and any failure aborts the run: there is no partial
//! report and no retry. The only tolerated gap is an activity without a
//! requested zone type, and only under [`MissingZonePolicy::Skip`].

use serde::Serialize;
use tracing::{debug, info, warn};
use zone_core::errors::{AppResult, ZoneError};
use zone_core::models::{ActivitySummary, DateRange, ZoneDistribution, ZoneDomain};
use zone_providers::ZoneDataProvider;

use crate::config::{MissingZonePolicy, ReportConfig};
use crate::zones::{
    normalize, select_distribution, summarize, AggregateTable, ZoneAggregator, ZoneSummary,
};

/// Pipeline options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Domains to build tables for, in output order
    pub domains: Vec<ZoneDomain>,
    /// Handling of activities missing a domain
    pub missing_zone_policy: MissingZonePolicy,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            domains: ZoneDomain::ALL.to_vec(),
            missing_zone_policy: MissingZonePolicy::Fail,
        }
    }
}

/// An activity together with its full zones response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchedActivity {
    /// Listing entry
    pub activity: ActivitySummary,
    /// Every zone entry Strava returned for it
    pub zones: Vec<ZoneDistribution>,
}

/// Table and summary for one domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainReport {
    /// Domain
    pub domain: ZoneDomain,
    /// Aggregate table including the Total row
    pub table: AggregateTable,
    /// Percentage shares
    pub summary: ZoneSummary,
    /// Activities left out under the skip policy
    pub skipped_activities: Vec<u64>,
}

/// Output of a report run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneReport {
    /// Requested window
    pub range: DateRange,
    /// Activities found in the window
    pub activity_count: usize,
    /// One entry per requested domain
    pub domains: Vec<DomainReport>,
}

impl ZoneReport {
    /// Report for `domain`, if requested
    #[must_use]
    pub fn domain(&self, domain: ZoneDomain) -> Option<&DomainReport> {
        self.domains.iter().find(|d| d.domain == domain)
    }
}

/// Fetch the activity list and then each activity's zones, one call at a time
///
/// # Errors
///
/// The first provider error aborts the fetch.
pub async fn fetch_activity_zones(
    provider: &dyn ZoneDataProvider,
    range: &DateRange,
) -> AppResult<Vec<FetchedActivity>> {
    let activities = provider.fetch_activities(range).await?;
    info!(
        provider = provider.name(),
        count = activities.len(),
        "Fetching zones for activities"
    );

    let mut fetched = Vec::with_capacity(activities.len());
    for activity in activities {
        let zones = provider.fetch_zone_distributions(activity.id).await?;
        debug!(
            activity.id = activity.id,
            zone_types = zones.len(),
            "Fetched activity zones"
        );
        fetched.push(FetchedActivity { activity, zones });
    }
    Ok(fetched)
}

/// Build the table and summary of one domain from fetched data
///
/// # Errors
///
/// - `MissingZoneType` under the fail policy
/// - classifier errors for malformed buckets
/// - `EmptyDataset` when no zone time was recorded
pub fn build_domain_report(
    fetched: &[FetchedActivity],
    domain: ZoneDomain,
    policy: MissingZonePolicy,
) -> Result<DomainReport, ZoneError> {
    let mut aggregator = ZoneAggregator::new(domain);
    let mut skipped_activities = Vec::new();

    for entry in fetched {
        let activity_id = entry.activity.id;
        let distribution = match select_distribution(activity_id, &entry.zones, domain) {
            Ok(distribution) => distribution,
            Err(error) if policy == MissingZonePolicy::Skip => {
                warn!(activity.id = activity_id, zone.domain = %domain, "{error}; skipping");
                skipped_activities.push(activity_id);
                continue;
            }
            Err(error) => return Err(error),
        };

        let row = normalize(activity_id, distribution, domain)?;
        debug!(
            activity.id = activity_id,
            zone.domain = %domain,
            zone.labels = row.len(),
            zones_sum = row.zones_sum,
            "Normalized zone row"
        );
        aggregator.push(row)?;
    }

    let table = aggregator.finalize();
    let summary = summarize(&table)?;
    info!(
        zone.domain = %domain,
        activities = table.activity_count(),
        columns = table.columns.len(),
        skipped = skipped_activities.len(),
        "Built zone table"
    );

    Ok(DomainReport {
        domain,
        table,
        summary,
        skipped_activities,
    })
}

/// Build reports for every requested domain from already-fetched data
///
/// # Errors
///
/// The first domain failure aborts the whole report.
pub fn assemble_report(
    range: DateRange,
    fetched: &[FetchedActivity],
    options: &ReportOptions,
) -> AppResult<ZoneReport> {
    let domains = options
        .domains
        .iter()
        .map(|&domain| build_domain_report(fetched, domain, options.missing_zone_policy))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ZoneReport {
        range,
        activity_count: fetched.len(),
        domains,
    })
}

/// Fetch everything in `range` and build the report
///
/// # Errors
///
/// Provider failures and zone errors both abort the run.
pub async fn build_zone_report(
    provider: &dyn ZoneDataProvider,
    range: &DateRange,
    options: &ReportOptions,
) -> AppResult<ZoneReport> {
    let fetched = fetch_activity_zones(provider, range).await?;
    assemble_report(*range, &fetched, options)
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            domains: config.domains.domains(),
            missing_zone_policy: config.missing_zone_policy,
        }
    }
}
