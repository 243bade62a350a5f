//! Record API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use sitelink_core::{defaults, Error, RecordStore, Result, StoreFailure, StoreSubError};

/// Configuration for the record API client.
#[derive(Debug, Clone)]
pub struct RecordsConfig {
    /// Base URL of the record API.
    pub base_url: String,
    /// Bearer token, when the deployment requires one.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::RECORDS_URL.to_string(),
            api_key: None,
            timeout_seconds: defaults::HTTP_TIMEOUT_SECS,
        }
    }
}

impl RecordsConfig {
    /// Create from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | SITELINK_RECORDS_URL | [`defaults::RECORDS_URL`] |
    /// | SITELINK_RECORDS_API_KEY | (none) |
    /// | SITELINK_RECORDS_TIMEOUT | [`defaults::HTTP_TIMEOUT_SECS`] |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SITELINK_RECORDS_URL")
                .unwrap_or_else(|_| defaults::RECORDS_URL.to_string()),
            api_key: std::env::var("SITELINK_RECORDS_API_KEY").ok(),
            timeout_seconds: std::env::var("SITELINK_RECORDS_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::HTTP_TIMEOUT_SECS),
        }
    }
}

/// Record API client.
pub struct RecordsClient {
    client: Client,
    config: RecordsConfig,
}

/// Wire shape of a successful create response.
#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: String,
}

impl RecordsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RecordsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(base_url = %config.base_url, "Initializing record API client");

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(RecordsConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &RecordsConfig {
        &self.config
    }

    fn build_post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let mut req = self.client.post(&url);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        req.header("Content-Type", "application/json")
    }
}

/// Parse a non-success record API body into a structured failure.
///
/// The API reports rejections as a JSON array of `{errorCode, message}`
/// objects. Anything else (HTML error pages, proxies, truncated bodies) is
/// preserved verbatim as the top-level message with no sub-errors, which
/// callers treat as a non-duplicate failure.
fn parse_failure(status: StatusCode, body: &str) -> StoreFailure {
    match serde_json::from_str::<Vec<StoreSubError>>(body) {
        Ok(errors) if !errors.is_empty() => StoreFailure {
            message: format!("record API returned {}", status),
            errors,
        },
        _ => StoreFailure {
            message: if body.trim().is_empty() {
                format!("record API returned {}", status)
            } else {
                body.to_string()
            },
            errors: Vec::new(),
        },
    }
}

#[async_trait]
impl RecordStore for RecordsClient {
    async fn create(&self, object_type: &str, fields: JsonValue) -> Result<String> {
        debug!(object_type = %object_type, "Creating record");

        let response = self
            .build_post(&format!("/records/{}", object_type))
            .json(&fields)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Store(parse_failure(status, &body)));
        }

        let created: CreateResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("record create response: {}", e)))?;

        debug!(object_type = %object_type, record_id = %created.id, "Record created");
        Ok(created.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitelink_core::DUPLICATE_VALUE_CODE;

    #[test]
    fn config_default_uses_shared_constants() {
        let config = RecordsConfig::default();
        assert_eq!(config.base_url, defaults::RECORDS_URL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn parse_failure_preserves_sub_errors_in_order() {
        let body = r#"[
            {"errorCode": "DUPLICATE_VALUE", "message": "duplicate value found: record with id: C99"},
            {"errorCode": "FIELD_INTEGRITY", "message": "secondary"}
        ]"#;

        let failure = parse_failure(StatusCode::BAD_REQUEST, body);
        assert_eq!(failure.errors.len(), 2);
        assert_eq!(failure.errors[0].error_code, DUPLICATE_VALUE_CODE);
        assert_eq!(failure.errors[1].message, "secondary");
        assert!(failure.message.contains("400"));
    }

    #[test]
    fn parse_failure_keeps_unparseable_body_verbatim() {
        let failure = parse_failure(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
        assert!(failure.errors.is_empty());
        assert_eq!(failure.message, "<html>Bad Gateway</html>");
    }

    #[test]
    fn parse_failure_empty_body_falls_back_to_status() {
        let failure = parse_failure(StatusCode::SERVICE_UNAVAILABLE, "");
        assert!(failure.errors.is_empty());
        assert!(failure.message.contains("503"));
    }

    #[test]
    fn parse_failure_empty_array_falls_back_to_status() {
        let failure = parse_failure(StatusCode::BAD_REQUEST, "[]");
        assert!(failure.errors.is_empty());
        assert_eq!(failure.message, "[]");
    }
}
