//! Shared data model for workspace documents and record store failures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Error classification the record store uses for uniqueness violations.
pub const DUPLICATE_VALUE_CODE: &str = "DUPLICATE_VALUE";

/// A document held in the remote workspace.
///
/// The same shape describes both asset documents (photos, files, reports
/// captured during a session) and the call documents that parent them. An
/// asset points at its call through `parent_id`; call documents carry no
/// parent of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDocument {
    /// The workspace's identifier for this document.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Document type as reported by the workspace (e.g. "image").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form metadata attached at capture time. Kept in a `BTreeMap`
    /// so serialized forms are stable across runs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub external_metadata: BTreeMap<String, String>,
    /// Identifier of the parent call document, when this is an asset.
    #[serde(rename = "parentID", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Direct download locator for the document content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// Structured failure reported by the record store.
///
/// The store reports rejections as a list of sub-errors, each carrying an
/// error classification code and a human-readable message. Duplicate-value
/// rejections are recognized by [`DUPLICATE_VALUE_CODE`] on the first
/// sub-error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreFailure {
    /// Top-level summary (status line or raw body when no sub-errors parsed).
    pub message: String,
    /// Structured sub-errors in the order the store reported them.
    #[serde(default)]
    pub errors: Vec<StoreSubError>,
}

impl std::fmt::Display for StoreFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.errors.first() {
            Some(first) => write!(f, "{}", first.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// One structured sub-error within a [`StoreFailure`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSubError {
    /// Error classification code (e.g. `DUPLICATE_VALUE`).
    pub error_code: String,
    /// Human-readable message.
    pub message: String,
}
