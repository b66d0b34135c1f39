// ABOUTME: Application constants organized by domain
// ABOUTME: Re-exports unit conversion factors and Strava endpoint defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion constants for distance and time
pub mod units;

/// Strava API defaults
pub mod strava {
    /// Public Strava REST API base URL
    pub const API_BASE_URL: &str = "https://www.strava.com/api/v3";

    /// OAuth token endpoint used for refresh-token exchange
    pub const TOKEN_URL: &str = "https://www.strava.com/oauth/token";

    /// Largest page size the activities endpoint accepts
    pub const MAX_PAGE_SIZE: u32 = 200;

    /// Provider name used in errors and logs
    pub const PROVIDER_NAME: &str = "strava";
}
