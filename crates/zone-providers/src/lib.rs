// ABOUTME: Fitness data provider implementations for the zone report
// ABOUTME: Provider trait and the Strava activities/zones client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness data providers.
//!
//! The report engine only needs two calls from a provider: list the activities
//! in a date range, and fetch the zone distributions of one activity. Both are
//! expressed by [`ZoneDataProvider`] so the pipeline can run against Strava or
//! an in-memory provider in tests.

pub use zone_core::errors;
pub use zone_core::models;

/// Provider trait consumed by the report pipeline
pub mod core;

/// Strava API client
pub mod strava;

pub use crate::core::ZoneDataProvider;
pub use strava::{
    StravaCredentials, StravaProvider, StravaProviderConfig, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_TIMEOUT_SECS,
};
