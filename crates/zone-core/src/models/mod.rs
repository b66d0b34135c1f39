// ABOUTME: Data models for Strava zone distributions and activity listings
// ABOUTME: Re-exports zone bucket, distribution, domain, activity, and date range types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod activity;
mod zones;

pub use activity::{ActivitySummary, DateRange};
pub use zones::{ZoneBucket, ZoneDistribution, ZoneDomain, ZoneMetadata};
