// ABOUTME: Strava API client for activity listings and per-activity zone distributions
// ABOUTME: Handles refresh-token exchange, page-until-empty pagination, and status mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::core::ZoneDataProvider;
use crate::errors::ProviderError;
use crate::models::{ActivitySummary, DateRange, ZoneDistribution};
use zone_core::constants::strava::{API_BASE_URL, MAX_PAGE_SIZE, PROVIDER_NAME, TOKEN_URL};

/// Fallback wait when a 429 carries no `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Default whole-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// OAuth application credentials and the athlete's long-lived refresh token
#[derive(Debug, Clone)]
pub struct StravaCredentials {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Refresh token exchanged for a short-lived access token
    pub refresh_token: String,
}

/// Endpoint, paging, and HTTP timeout settings
#[derive(Debug, Clone)]
pub struct StravaProviderConfig {
    /// REST API base, without trailing slash
    pub api_base_url: String,
    /// OAuth token endpoint
    pub token_url: String,
    /// Activities requested per page (1..=200)
    pub page_size: u32,
    /// Whole-request timeout
    pub timeout_secs: u64,
    /// Connect timeout
    pub connect_timeout_secs: u64,
}

impl Default for StravaProviderConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_owned(),
            token_url: TOKEN_URL.to_owned(),
            page_size: MAX_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl StravaProviderConfig {
    /// Reject settings no request could succeed with
    ///
    /// # Errors
    ///
    /// `ConfigurationError` for a blank URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.api_base_url.trim().is_empty() {
            return Err(configuration_error("API base URL is empty"));
        }
        if self.token_url.trim().is_empty() {
            return Err(configuration_error("token URL is empty"));
        }
        if self.timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(configuration_error("HTTP timeouts must be at least one second"));
        }
        Ok(())
    }

    fn build_client(&self) -> Result<Client, ProviderError> {
        ClientBuilder::new()
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .build()
            .map_err(|e| configuration_error(&format!("HTTP client could not be built: {e}")))
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Authenticated Strava client
pub struct StravaProvider {
    config: StravaProviderConfig,
    client: Client,
    access_token: String,
}

impl StravaProvider {
    /// Exchange the refresh token for an access token
    ///
    /// # Errors
    ///
    /// - `ConfigurationError` for unusable endpoint or timeout settings
    /// - `AuthenticationFailed` if the token endpoint rejects the credentials
    /// - `NetworkError` if it cannot be reached
    pub async fn authenticate(
        config: StravaProviderConfig,
        credentials: &StravaCredentials,
    ) -> Result<Self, ProviderError> {
        config.validate()?;
        let client = config.build_client()?;
        info!(
            timeout_secs = config.timeout_secs,
            connect_timeout_secs = config.connect_timeout_secs,
            "Requesting Strava access token"
        );

        let params = [
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("refresh_token", credentials.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
            ("f", "json"),
        ];

        let response = client
            .post(&config.token_url)
            .form(&params)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::AuthenticationFailed {
                provider: PROVIDER_NAME.to_owned(),
                reason: format!("token refresh returned {status}: {body}"),
            });
        }

        let token: TokenResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::ParseError {
                    provider: PROVIDER_NAME.to_owned(),
                    field: "token response",
                    message: e.to_string(),
                })?;

        Ok(Self::from_parts(config, client, token.access_token))
    }

    /// Build a client around an access token obtained elsewhere
    ///
    /// # Errors
    ///
    /// `ConfigurationError` for unusable endpoint or timeout settings.
    pub fn with_access_token(
        config: StravaProviderConfig,
        access_token: String,
    ) -> Result<Self, ProviderError> {
        config.validate()?;
        let client = config.build_client()?;
        Ok(Self::from_parts(config, client, access_token))
    }

    fn from_parts(config: StravaProviderConfig, client: Client, access_token: String) -> Self {
        let page_size = config.page_size.clamp(1, MAX_PAGE_SIZE);
        Self {
            config: StravaProviderConfig { page_size, ..config },
            client,
            access_token,
        }
    }

    /// Effective page size after clamping
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.config.page_size
    }

    async fn get_json<T>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        field: &'static str,
    ) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &headers, body));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError {
                provider: PROVIDER_NAME.to_owned(),
                field,
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl ZoneDataProvider for StravaProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_activities(
        &self,
        range: &DateRange,
    ) -> Result<Vec<ActivitySummary>, ProviderError> {
        let mut activities = Vec::new();
        let mut page: u32 = 1;

        loop {
            info!(page, "Requesting page {page} of activities");
            let query = [
                ("per_page", self.config.page_size.to_string()),
                ("page", page.to_string()),
                ("before", range.before_epoch().to_string()),
                ("after", range.after_epoch().to_string()),
            ];
            let batch: Vec<ActivitySummary> = self
                .get_json("athlete/activities", &query, "activity list")
                .await?;

            if batch.is_empty() {
                break;
            }
            debug!(page, count = batch.len(), "Received activity page");
            activities.extend(batch);
            page += 1;
        }

        info!(total = activities.len(), "Fetched activity list");
        Ok(activities)
    }

    async fn fetch_zone_distributions(
        &self,
        activity_id: u64,
    ) -> Result<Vec<ZoneDistribution>, ProviderError> {
        debug!(activity.id = activity_id, "Requesting activity zones");
        self.get_json(
            &format!("activities/{activity_id}/zones"),
            &[],
            "zones response",
        )
        .await
    }
}

fn configuration_error(details: &str) -> ProviderError {
    ProviderError::ConfigurationError {
        provider: PROVIDER_NAME.to_owned(),
        details: details.to_owned(),
    }
}

fn network_error(error: reqwest::Error) -> ProviderError {
    ProviderError::NetworkError {
        provider: PROVIDER_NAME.to_owned(),
        message: error.to_string(),
    }
}

fn status_error(status: StatusCode, headers: &HeaderMap, body: String) -> ProviderError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationFailed {
            provider: PROVIDER_NAME.to_owned(),
            reason: format!("API returned {status}: {body}"),
        },
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded {
            provider: PROVIDER_NAME.to_owned(),
            retry_after_secs: headers
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS),
            limit_type: "API rate limit".to_owned(),
        },
        _ => ProviderError::ApiError {
            provider: PROVIDER_NAME.to_owned(),
            status_code: status.as_u16(),
            message: body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_is_clamped() {
        let provider = StravaProvider::with_access_token(
            StravaProviderConfig {
                page_size: 500,
                ..StravaProviderConfig::default()
            },
            "token".to_owned(),
        )
        .unwrap();
        assert_eq!(provider.page_size(), 200);

        let provider = StravaProvider::with_access_token(
            StravaProviderConfig {
                page_size: 0,
                ..StravaProviderConfig::default()
            },
            "token".to_owned(),
        )
        .unwrap();
        assert_eq!(provider.page_size(), 1);
    }

    #[test]
    fn test_blank_base_url_is_configuration_error() {
        let result = StravaProvider::with_access_token(
            StravaProviderConfig {
                api_base_url: "  ".to_owned(),
                ..StravaProviderConfig::default()
            },
            "token".to_owned(),
        );
        assert!(matches!(
            result,
            Err(ProviderError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_zero_timeout_is_configuration_error() {
        let config = StravaProviderConfig {
            timeout_secs: 0,
            ..StravaProviderConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("timeouts"));
    }

    #[test]
    fn test_rate_limit_honours_retry_after() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, "120".parse().unwrap());
        let error = status_error(StatusCode::TOO_MANY_REQUESTS, &headers, String::new());
        assert_eq!(error.retry_after_secs(), Some(120));

        let error = status_error(
            StatusCode::TOO_MANY_REQUESTS,
            &HeaderMap::new(),
            String::new(),
        );
        assert_eq!(error.retry_after_secs(), Some(DEFAULT_RETRY_AFTER_SECS));
    }

    #[test]
    fn test_not_found_is_api_error() {
        let error = status_error(StatusCode::NOT_FOUND, &HeaderMap::new(), "nope".to_owned());
        assert!(matches!(
            error,
            ProviderError::ApiError {
                status_code: 404,
                ..
            }
        ));
    }
}
