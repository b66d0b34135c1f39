// ABOUTME: Core types and constants for the Strava zone report workspace
// ABOUTME: Foundation crate with error handling, zone models, and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Zone Core
//!
//! Foundation crate shared by the provider crate and the report engine.
//!
//! ## Modules
//!
//! - **errors**: `AppError`/`ErrorCode` plus the domain errors `ZoneError` and `ProviderError`
//! - **models**: Strava zone buckets, zone distributions, activity summaries, date ranges
//! - **constants**: Unit conversion factors used by the pace classifier

/// Unified error handling with zone and provider error taxonomies
pub mod errors;

/// Zone and activity data models
pub mod models;

/// Unit conversion constants
pub mod constants;
