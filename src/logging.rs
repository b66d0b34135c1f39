// ABOUTME: Logging configuration and structured logging setup for the zone report
// ABOUTME: Configures level, output format, and noise filters; writes to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging with `tracing`
//!
//! Logs go to stderr so that stdout only carries the rendered report.

use anyhow::Result;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogLevel;

/// Service name reported in startup logs
pub const SERVICE_NAME: &str = "zone-report";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread ids and names
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines
    Json,
    /// Multi-field human readable output
    Pretty,
    /// Single-line output
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Compact`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info.to_string(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| {
                LogLevel::from_str_or_default(&env::var("LOG_LEVEL").unwrap_or_default())
                    .to_string()
            }),
            format: LogFormat::from_str_or_default(&env::var("LOG_FORMAT").unwrap_or_default()),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            ..Self::default()
        }
    }

    /// Override the level
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level.to_string();
        self
    }

    /// Filter applying the configured level plus noise reduction for HTTP internals
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let mut filter = EnvFilter::new(&self.level);
        for directive in ["hyper=warn", "hyper_util=warn", "reqwest=warn", "rustls=warn"] {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }
        filter
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .json()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Zone report starting up"
        );
        Ok(())
    }
}
