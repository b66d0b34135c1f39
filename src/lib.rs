// ABOUTME: Main library entry point for the Strava zone report
// ABOUTME: Classifies, normalizes, aggregates, and summarizes pace and heart-rate zone time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Strava Zones
//!
//! Aggregates the time an athlete spent in each pace and heart-rate zone
//! across every activity in a date range.
//!
//! ## Architecture
//!
//! - **`zones`**: classifier, row normalizer, zone aggregator, summary reporter
//! - **`report`**: batch pipeline over a [`zone_providers::ZoneDataProvider`]
//! - **`formatters`**: fixed-width tables, proportion charts, JSON export
//! - **`config`** / **`logging`**: environment-driven settings and `tracing` setup
//! - **`date_input`**: `MM-DD-YYYY` window entry
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use strava_zones::config::ZoneReportConfig;
//! use strava_zones::date_input::parse_date_range;
//! use strava_zones::errors::AppResult;
//! use strava_zones::report::{build_zone_report, ReportOptions};
//! use strava_zones::zone_providers::StravaProvider;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ZoneReportConfig::from_env()?;
//!     let provider =
//!         StravaProvider::authenticate(config.provider_config(), &config.strava.credentials())
//!             .await?;
//!
//!     let range = parse_date_range("01-01-2024", "02-01-2024")?;
//!     let options = ReportOptions::from(&config.report);
//!     let report = build_zone_report(&provider, &range, &options).await?;
//!     println!("{} activities", report.activity_count);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Date-range entry
pub mod date_input;

/// Table, chart, pie-chart image, and JSON output
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Fetch-to-summary pipeline
pub mod report;

/// Zone classification and aggregation engine
pub mod zones;

pub use zone_core::{constants, errors, models};
pub use zone_providers;
