//! Guided-workflow catalog and session URLs.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sitelink_core::{defaults, Error, Result};

/// One guided workflow in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub name: String,
    /// Version currently published for use. Workflows without one are
    /// drafts and cannot be launched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_version_id: Option<String>,
}

impl Workflow {
    /// Check if this workflow has a published version to run.
    pub fn is_launchable(&self) -> bool {
        self.active_version_id.is_some()
    }
}

/// Render the URL that runs a workflow version against a work order.
pub fn session_url(base: &str, version_id: &str, work_order_id: &str) -> String {
    format!(
        "{}/new/{}?{}={}",
        base.trim_end_matches('/'),
        version_id,
        defaults::FLOW_WORK_ORDER_PARAM,
        work_order_id
    )
}

/// Configuration for the workflow catalog client.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Workflow catalog endpoint.
    pub catalog_url: String,
    /// Base URL for session pages.
    pub session_base_url: String,
    /// API key sent in the `X-Api-Key` header, when required.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            catalog_url: defaults::FLOW_CATALOG_URL.to_string(),
            session_base_url: defaults::FLOW_SESSION_URL.to_string(),
            api_key: None,
            timeout_seconds: defaults::HTTP_TIMEOUT_SECS,
        }
    }
}

impl FlowConfig {
    /// Create from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | SITELINK_FLOW_CATALOG_URL | [`defaults::FLOW_CATALOG_URL`] |
    /// | SITELINK_FLOW_SESSION_URL | [`defaults::FLOW_SESSION_URL`] |
    /// | SITELINK_FLOW_API_KEY | (none) |
    /// | SITELINK_FLOW_TIMEOUT | [`defaults::HTTP_TIMEOUT_SECS`] |
    pub fn from_env() -> Self {
        Self {
            catalog_url: std::env::var("SITELINK_FLOW_CATALOG_URL")
                .unwrap_or_else(|_| defaults::FLOW_CATALOG_URL.to_string()),
            session_base_url: std::env::var("SITELINK_FLOW_SESSION_URL")
                .unwrap_or_else(|_| defaults::FLOW_SESSION_URL.to_string()),
            api_key: std::env::var("SITELINK_FLOW_API_KEY").ok(),
            timeout_seconds: std::env::var("SITELINK_FLOW_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::HTTP_TIMEOUT_SECS),
        }
    }
}

/// Workflow catalog client.
pub struct FlowClient {
    client: Client,
    config: FlowConfig,
}

impl FlowClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FlowConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(catalog_url = %config.catalog_url, "Initializing workflow client");

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(FlowConfig::from_env())
    }

    /// List every workflow in the catalog, drafts included.
    pub async fn list_workflows(&self) -> Result<Vec<Workflow>> {
        let mut req = self.client.get(&self.config.catalog_url);
        if let Some(ref api_key) = self.config.api_key {
            req = req.header("X-Api-Key", api_key);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Request(format!(
                "workflow catalog returned {}: {}",
                status, body
            )));
        }

        let workflows: Vec<Workflow> = response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("workflow catalog response: {}", e)))?;

        debug!(result_count = workflows.len(), "Workflow catalog loaded");
        Ok(workflows)
    }

    /// List workflows that have a published version.
    pub async fn launchable_workflows(&self) -> Result<Vec<Workflow>> {
        Ok(self
            .list_workflows()
            .await?
            .into_iter()
            .filter(Workflow::is_launchable)
            .collect())
    }

    /// Render the session URL for a workflow version and work order.
    pub fn session_url(&self, version_id: &str, work_order_id: &str) -> String {
        session_url(&self.config.session_base_url, version_id, work_order_id)
    }
}
