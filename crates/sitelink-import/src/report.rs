//! Per-run import report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to one asset during an import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    /// A new document record was created.
    Imported,
    /// The record store already held this asset; nothing was created.
    AlreadyImported,
    /// The asset produced no records (e.g. its parent call is missing).
    Skipped,
}

impl std::fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Imported => write!(f, "imported"),
            Self::AlreadyImported => write!(f, "already imported"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// Outcome for one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetOutcome {
    /// Workspace identifier of the asset document.
    pub document_id: String,
    pub status: ImportStatus,
    /// Reason, for skipped assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AssetOutcome {
    pub fn imported(document_id: &str) -> Self {
        Self {
            document_id: document_id.to_string(),
            status: ImportStatus::Imported,
            reason: None,
        }
    }

    pub fn already_imported(document_id: &str) -> Self {
        Self {
            document_id: document_id.to_string(),
            status: ImportStatus::AlreadyImported,
            reason: None,
        }
    }

    pub fn skipped(document_id: &str, reason: &str) -> Self {
        Self {
            document_id: document_id.to_string(),
            status: ImportStatus::Skipped,
            reason: Some(reason.to_string()),
        }
    }
}

/// Result of one completed import run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    /// Per-asset outcomes in processing order.
    pub outcomes: Vec<AssetOutcome>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ImportReport {
    pub fn new(
        outcomes: Vec<AssetOutcome>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            outcomes,
            started_at,
            finished_at,
        }
    }

    /// Assets imported or confirmed already present. Skipped assets are
    /// not counted; this is the number reported to the user.
    pub fn imported(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status != ImportStatus::Skipped)
            .count()
    }

    /// Assets that produced no records.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == ImportStatus::Skipped)
            .count()
    }

    /// Total assets the search returned.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Wall-clock duration of the run in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
