// ABOUTME: Configuration module for the zone report
// ABOUTME: Re-exports environment-driven settings types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based configuration
pub mod environment;

pub use environment::{
    load_dotenv, DomainSelection, HttpClientConfig, LogLevel, MissingZonePolicy, ReportConfig,
    StravaConfig, ZoneReportConfig,
};
