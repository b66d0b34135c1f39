// ABOUTME: Unified error handling with standard error codes for the zone report
// ABOUTME: Wraps zone, provider, IO, and serialization failures into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! `AppError` is the error returned across crate boundaries. Domain-specific
//! failures (`ZoneError`, `ProviderError`) convert into it with a matching
//! `ErrorCode`, and the original error is kept as the source.

/// Provider (HTTP collaborator) errors
pub mod provider;

/// Zone engine errors
pub mod zone;

pub use provider::ProviderError;
pub use zone::ZoneError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;

/// Standard error codes
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Caller supplied malformed input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Fetched data does not have the shape the engine requires
    #[serde(rename = "INVALID_DATA")]
    InvalidData,
    /// Nothing to summarize
    #[serde(rename = "EMPTY_DATASET")]
    EmptyDataset,
    /// Provider authentication failed
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed,
    /// Provider rate limit hit
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited,
    /// Any other provider failure
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing,
    /// Configuration present but unusable
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Serialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Anything else
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Short user-facing description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidData => "Fetched zone data is malformed",
            Self::EmptyDataset => "There is no zone data to summarize",
            Self::ExternalAuthFailed => "Authentication with external service failed",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Process exit code used by the binary
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InvalidInput | Self::ConfigMissing | Self::ConfigInvalid => 2,
            Self::InvalidData | Self::EmptyDataset => 3,
            Self::ExternalAuthFailed | Self::ExternalRateLimited | Self::ExternalServiceError => 4,
            Self::SerializationError | Self::InternalError => 1,
        }
    }
}

/// Unified error type
#[derive(Debug, thiserror::Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Underlying error
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create an error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing configuration key
    pub fn config_missing(key: &str) -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            format!("environment variable {key} is not set"),
        )
    }

    /// Unusable configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// The zone error behind this one, if any
    #[must_use]
    pub fn zone_error(&self) -> Option<&ZoneError> {
        self.source.as_deref()?.downcast_ref::<ZoneError>()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result alias
pub type AppResult<T> = Result<T, AppError>;

impl From<ZoneError> for AppError {
    fn from(error: ZoneError) -> Self {
        let code = match error {
            ZoneError::EmptyDataset { .. } => ErrorCode::EmptyDataset,
            ZoneError::MissingZoneType { .. }
            | ZoneError::DegenerateInterval { .. }
            | ZoneError::InvalidDuration { .. } => ErrorCode::InvalidData,
            ZoneError::DomainMismatch { .. } => ErrorCode::InternalError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = match error {
            ProviderError::AuthenticationFailed { .. } => ErrorCode::ExternalAuthFailed,
            ProviderError::RateLimitExceeded { .. } => ErrorCode::ExternalRateLimited,
            ProviderError::ConfigurationError { .. } => ErrorCode::ConfigInvalid,
            ProviderError::ApiError { .. }
            | ProviderError::NetworkError { .. }
            | ProviderError::ParseError { .. } => ErrorCode::ExternalServiceError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::internal(format!("I/O error: {error}")).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ZoneDomain;

    #[test]
    fn test_zone_error_conversion_keeps_source() {
        let error = AppError::from(ZoneError::MissingZoneType {
            activity_id: 42,
            domain: ZoneDomain::HeartRate,
        });
        assert_eq!(error.code, ErrorCode::InvalidData);
        assert!(error.message.contains("42"));
        assert!(error.message.contains("heartrate"));
        assert_eq!(error.zone_error().and_then(ZoneError::activity_id), Some(42));
    }

    #[test]
    fn test_empty_dataset_has_own_code() {
        let error = AppError::from(ZoneError::EmptyDataset {
            domain: ZoneDomain::Pace,
        });
        assert_eq!(error.code, ErrorCode::EmptyDataset);
        assert_eq!(error.code.exit_code(), 3);
    }

    #[test]
    fn test_rate_limit_maps_to_rate_limited() {
        let provider_error = ProviderError::RateLimitExceeded {
            provider: "strava".to_owned(),
            retry_after_secs: 900,
            limit_type: "15-minute".to_owned(),
        };
        assert!(provider_error.is_retryable());
        assert_eq!(provider_error.retry_after_secs(), Some(900));
        let error = AppError::from(provider_error);
        assert_eq!(error.code, ErrorCode::ExternalRateLimited);
    }
}
