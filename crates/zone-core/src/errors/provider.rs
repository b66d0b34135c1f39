// ABOUTME: Structured error types for fitness provider operations
// ABOUTME: Distinguishes auth, rate limit, network, and parse failures with context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Errors raised by the HTTP collaborators that fetch activities and zones
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Non-success HTTP status from the provider API
    #[error("{provider} API error ({status_code}): {message}")]
    ApiError {
        /// Provider name
        provider: String,
        /// HTTP status returned
        status_code: u16,
        /// Response body or summary
        message: String,
    },

    /// Token exchange failed or the access token was rejected
    #[error("{provider} authentication failed: {reason}")]
    AuthenticationFailed {
        /// Provider name
        provider: String,
        /// Why authentication failed
        reason: String,
    },

    /// Provider rate limit was hit
    #[error("{provider} rate limit exceeded ({limit_type}), retry after {retry_after_secs}s")]
    RateLimitExceeded {
        /// Provider name
        provider: String,
        /// Seconds until the limit resets
        retry_after_secs: u64,
        /// Which limit tripped
        limit_type: String,
    },

    /// Transport-level failure
    #[error("{provider} network error: {message}")]
    NetworkError {
        /// Provider name
        provider: String,
        /// Underlying error text
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("{provider} returned an unparseable {field}: {message}")]
    ParseError {
        /// Provider name
        provider: String,
        /// What was being decoded
        field: &'static str,
        /// Decoder message
        message: String,
    },

    /// Provider was built with unusable configuration
    #[error("{provider} configuration error: {details}")]
    ConfigurationError {
        /// Provider name
        provider: String,
        /// What is wrong
        details: String,
    },
}

impl ProviderError {
    /// Whether waiting and retrying could succeed
    ///
    /// The report pipeline never retries; this only informs the error message.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimitExceeded { .. } | Self::NetworkError { .. }
        )
    }

    /// Suggested wait for rate-limit errors
    #[must_use]
    pub const fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::RateLimitExceeded {
                retry_after_secs, ..
            } => Some(*retry_after_secs),
            _ => None,
        }
    }
}
