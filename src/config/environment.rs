// ABOUTME: Environment-based configuration for the zone report
// ABOUTME: Strava credentials, HTTP timeouts, paging, missing-zone policy, and log level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use zone_core::constants::strava;
use zone_core::errors::{AppError, AppResult};
use zone_core::models::ZoneDomain;
use zone_providers::{
    StravaCredentials, StravaProviderConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Default
    #[default]
    Info,
    /// Verbose
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// What to do when an activity's zones response lacks a requested domain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingZonePolicy {
    /// Abort the run with `MissingZoneType`
    #[default]
    Fail,
    /// Leave the activity out of that domain's table and log a warning
    Skip,
}

impl MissingZonePolicy {
    /// Parse from string with fallback to `Fail`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "skip" | "warn" => Self::Skip,
            _ => Self::Fail,
        }
    }
}

/// Which domains to report on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DomainSelection {
    /// Pace and heart rate
    #[default]
    All,
    /// Pace only
    Pace,
    /// Heart rate only
    HeartRate,
}

impl DomainSelection {
    /// Parse from string with fallback to `All`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pace" => Self::Pace,
            "heartrate" | "heart_rate" | "hr" => Self::HeartRate,
            _ => Self::All,
        }
    }

    /// Selected domains in report order
    #[must_use]
    pub fn domains(self) -> Vec<ZoneDomain> {
        match self {
            Self::All => ZoneDomain::ALL.to_vec(),
            Self::Pace => vec![ZoneDomain::Pace],
            Self::HeartRate => vec![ZoneDomain::HeartRate],
        }
    }
}

/// Strava OAuth application and endpoint settings
#[derive(Clone)]
pub struct StravaConfig {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Athlete refresh token
    pub refresh_token: String,
    /// REST API base URL
    pub api_base_url: String,
    /// OAuth token endpoint
    pub token_url: String,
}

impl fmt::Debug for StravaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StravaConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("token_url", &self.token_url)
            .finish()
    }
}

impl StravaConfig {
    /// Credentials for the token exchange
    #[must_use]
    pub fn credentials(&self) -> StravaCredentials {
        StravaCredentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

/// HTTP client timeouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout
    pub timeout_secs: u64,
    /// Connect timeout
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Report behaviour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Activities per listing page (1..=200)
    pub page_size: u32,
    /// Handling of activities without a requested zone type
    pub missing_zone_policy: MissingZonePolicy,
    /// Domains to report on
    pub domains: DomainSelection,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_size: strava::MAX_PAGE_SIZE,
            missing_zone_policy: MissingZonePolicy::default(),
            domains: DomainSelection::default(),
        }
    }
}

impl ReportConfig {
    /// Load report settings from environment
    ///
    /// # Errors
    ///
    /// Returns a config error for a non-numeric page size.
    pub fn from_env() -> AppResult<Self> {
        let page_size: u32 = parse_var("ZONE_REPORT_PAGE_SIZE", strava::MAX_PAGE_SIZE)?;
        Ok(Self {
            page_size: page_size.clamp(1, strava::MAX_PAGE_SIZE),
            missing_zone_policy: MissingZonePolicy::from_str_or_default(&env_var_or(
                "ZONE_REPORT_MISSING_ZONES",
                "fail",
            )),
            domains: DomainSelection::from_str_or_default(&env_var_or(
                "ZONE_REPORT_DOMAINS",
                "all",
            )),
        })
    }
}

/// Load `.env` from the working directory or its parents
///
/// Existing process variables win over file entries. Returns the file read,
/// if any.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Complete configuration for one report run
#[derive(Debug, Clone)]
pub struct ZoneReportConfig {
    /// Strava settings
    pub strava: StravaConfig,
    /// HTTP settings
    pub http: HttpClientConfig,
    /// Report settings
    pub report: ReportConfig,
}

impl ZoneReportConfig {
    /// Load configuration from environment variables
    ///
    /// Call [`load_dotenv`] first to pick up a `.env` file.
    ///
    /// # Errors
    ///
    /// - `ConfigMissing` when a Strava credential is unset
    /// - `ConfigInvalid` when a numeric setting does not parse
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            strava: StravaConfig {
                client_id: required_var("STRAVA_CLIENT_ID")?,
                client_secret: required_var("STRAVA_CLIENT_SECRET")?,
                refresh_token: required_var("STRAVA_REFRESH_TOKEN")?,
                api_base_url: env_var_or("STRAVA_API_BASE_URL", strava::API_BASE_URL),
                token_url: env_var_or("STRAVA_TOKEN_URL", strava::TOKEN_URL),
            },
            http: HttpClientConfig {
                timeout_secs: parse_var("HTTP_CLIENT_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
                connect_timeout_secs: parse_var(
                    "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
                    DEFAULT_CONNECT_TIMEOUT_SECS,
                )?,
            },
            report: ReportConfig::from_env()?,
        };

        info!(
            page_size = config.report.page_size,
            missing_zones = ?config.report.missing_zone_policy,
            domains = ?config.report.domains,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Strava client settings: endpoints, page size, and HTTP timeouts
    #[must_use]
    pub fn provider_config(&self) -> StravaProviderConfig {
        StravaProviderConfig {
            api_base_url: self.strava.api_base_url.clone(),
            token_url: self.strava.token_url.clone(),
            page_size: self.report.page_size,
            timeout_secs: self.http.timeout_secs,
            connect_timeout_secs: self.http.connect_timeout_secs,
        }
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn required_var(key: &str) -> AppResult<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config_missing(key)),
    }
}

fn parse_var<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
