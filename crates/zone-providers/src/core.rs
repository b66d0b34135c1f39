// ABOUTME: Provider trait for fetching activity listings and per-activity zone distributions
// ABOUTME: Lets the report pipeline run against Strava or an in-memory provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::models::{ActivitySummary, DateRange, ZoneDistribution};

/// Source of activities and their zone distributions
///
/// Calls are issued sequentially by the pipeline. Implementations handle
/// authentication and pagination themselves.
#[async_trait]
pub trait ZoneDataProvider: Send + Sync {
    /// Provider name for logs and errors
    fn name(&self) -> &'static str;

    /// Every activity that started inside `range`
    async fn fetch_activities(
        &self,
        range: &DateRange,
    ) -> Result<Vec<ActivitySummary>, ProviderError>;

    /// The full zones response of one activity (pace, heartrate, power, ...)
    async fn fetch_zone_distributions(
        &self,
        activity_id: u64,
    ) -> Result<Vec<ZoneDistribution>, ProviderError>;
}
