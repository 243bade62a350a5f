//! Session launch requests.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use sitelink_core::{defaults, Error, Result};

/// Marker the launch API embeds in the returned URI when the callee is not
/// a member of the caller's domain and cannot be contacted.
pub const UNREACHABLE_MARKER: &str = "https://tools.ietf.org/html/rfc7231";

/// Device platform the session should launch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "PC")]
    Pc,
    #[serde(rename = "iOS")]
    Ios,
    Android,
}

impl Platform {
    /// Derive the platform from device flags.
    pub fn from_device(is_phone: bool, is_android: bool) -> Self {
        if is_phone {
            if is_android {
                Self::Android
            } else {
                Self::Ios
            }
        } else {
            Self::Pc
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pc => write!(f, "PC"),
            Self::Ios => write!(f, "iOS"),
            Self::Android => write!(f, "Android"),
        }
    }
}

/// Body of a launch request.
///
/// The capitalized `Platform` key is the launch API's contract; the other
/// keys are camelCase.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchRequest {
    #[serde(rename = "Platform")]
    pub platform: Platform,
    /// Caller's email address.
    pub email: String,
    #[serde(rename = "calleeEmail")]
    pub callee_email: String,
    #[serde(rename = "metadataItems")]
    pub metadata_items: BTreeMap<String, String>,
}

impl LaunchRequest {
    /// Build a launch request stamped with the work order, so documents
    /// captured during the session can be found by the import search later.
    pub fn for_work_order(
        platform: Platform,
        email: impl Into<String>,
        callee_email: impl Into<String>,
        work_order_id: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            email: email.into(),
            callee_email: callee_email.into(),
            metadata_items: BTreeMap::from([(
                defaults::WORK_ORDER_METADATA_KEY.to_string(),
                work_order_id.into(),
            )]),
        }
    }
}

/// Result of a launch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// URI that opens the session on the requested platform.
    Ready(String),
    /// The callee is not reachable on the remote-assistance domain.
    CalleeUnreachable,
}

/// Configuration for the launch client.
#[derive(Debug, Clone)]
pub struct ConnectConfig {
    /// Launch request endpoint.
    pub launch_url: String,
    /// API key for the `ls Bearer` authorization scheme.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            launch_url: defaults::CONNECT_LAUNCH_URL.to_string(),
            api_key: String::new(),
            timeout_seconds: defaults::HTTP_TIMEOUT_SECS,
        }
    }
}

impl ConnectConfig {
    /// Create from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | SITELINK_CONNECT_LAUNCH_URL | [`defaults::CONNECT_LAUNCH_URL`] |
    /// | SITELINK_CONNECT_API_KEY | (empty) |
    /// | SITELINK_CONNECT_TIMEOUT | [`defaults::HTTP_TIMEOUT_SECS`] |
    pub fn from_env() -> Self {
        Self {
            launch_url: std::env::var("SITELINK_CONNECT_LAUNCH_URL")
                .unwrap_or_else(|_| defaults::CONNECT_LAUNCH_URL.to_string()),
            api_key: std::env::var("SITELINK_CONNECT_API_KEY").unwrap_or_default(),
            timeout_seconds: std::env::var("SITELINK_CONNECT_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::HTTP_TIMEOUT_SECS),
        }
    }
}

/// Launch API client.
pub struct ConnectClient {
    client: Client,
    config: ConnectConfig,
}

impl ConnectClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ConnectConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(launch_url = %config.launch_url, "Initializing launch client");

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ConnectConfig::from_env())
    }

    /// Request a session launch URI.
    ///
    /// A successful response is the URI as a JSON-quoted string. The API
    /// signals an uncontactable callee inside a 200 response by returning a
    /// URI pointing at [`UNREACHABLE_MARKER`] instead of a session URI.
    pub async fn launch(&self, request: &LaunchRequest) -> Result<LaunchOutcome> {
        info!(
            platform = %request.platform,
            callee = %request.callee_email,
            "Requesting session launch"
        );

        let response = self
            .client
            .post(&self.config.launch_url)
            .header("Authorization", format!("ls Bearer: {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Request(format!(
                "launch request returned {}: {}",
                status, body
            )));
        }

        let uri = body.trim().trim_matches('"').to_string();
        if uri.contains(UNREACHABLE_MARKER) {
            warn!(
                callee = %request.callee_email,
                "Callee is not reachable on the remote-assistance domain"
            );
            return Ok(LaunchOutcome::CalleeUnreachable);
        }

        debug!("Launch URI issued");
        Ok(LaunchOutcome::Ready(uri))
    }
}
