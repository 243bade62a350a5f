//! Workspace API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use sitelink_core::{defaults, DocumentStore, Error, Result, SearchFilter, WorkspaceDocument};

/// Configuration for the workspace client.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    /// Base URL of the workspace API.
    pub base_url: String,
    /// API key sent in the `X-Api-Key` header.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::WORKSPACE_URL.to_string(),
            api_key: String::new(),
            timeout_seconds: defaults::HTTP_TIMEOUT_SECS,
        }
    }
}

impl WorkspaceConfig {
    /// Create from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | SITELINK_WORKSPACE_URL | [`defaults::WORKSPACE_URL`] |
    /// | SITELINK_WORKSPACE_API_KEY | (empty) |
    /// | SITELINK_WORKSPACE_TIMEOUT | [`defaults::HTTP_TIMEOUT_SECS`] |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SITELINK_WORKSPACE_URL")
                .unwrap_or_else(|_| defaults::WORKSPACE_URL.to_string()),
            api_key: std::env::var("SITELINK_WORKSPACE_API_KEY").unwrap_or_default(),
            timeout_seconds: std::env::var("SITELINK_WORKSPACE_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::HTTP_TIMEOUT_SECS),
        }
    }
}

/// Workspace API client.
pub struct WorkspaceClient {
    client: Client,
    config: WorkspaceConfig,
}

/// Wire shape of a search response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    documents: Vec<WorkspaceDocument>,
}

/// Wire shape of a workspace error body.
#[derive(Debug, Deserialize)]
struct WorkspaceErrorBody {
    message: Option<String>,
}

impl WorkspaceClient {
    /// Create a new client with the given configuration.
    pub fn new(config: WorkspaceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(base_url = %config.base_url, "Initializing workspace client");

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(WorkspaceConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    fn build_get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        self.client.get(&url).header("X-Api-Key", &self.config.api_key)
    }

    async fn error_from_response(&self, op: &str, response: reqwest::Response) -> Error {
        let status = response.status();
        let message = response
            .json::<WorkspaceErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "unknown error".to_string());
        Error::Request(format!("workspace {} returned {}: {}", op, status, message))
    }
}

#[async_trait]
impl DocumentStore for WorkspaceClient {
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<WorkspaceDocument>> {
        if filter.is_empty() {
            return Err(Error::InvalidInput(
                "search filter must have at least one clause".to_string(),
            ));
        }

        let query = filter.to_query_string();
        debug!(query = %query, "Searching workspace documents");

        let response = self
            .build_get("/documents")
            .query(&[("query", query.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.error_from_response("search", response).await);
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("workspace search response: {}", e)))?;

        debug!(result_count = body.documents.len(), "Workspace search complete");
        Ok(body.documents)
    }

    async fn fetch(&self, id: &str) -> Result<WorkspaceDocument> {
        debug!(document_id = %id, "Fetching workspace document");

        let response = self.build_get(&format!("/documents/{}", id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("workspace document {}", id)));
        }
        if !response.status().is_success() {
            return Err(self.error_from_response("fetch", response).await);
        }

        response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("workspace document {}: {}", id, e)))
    }
}
