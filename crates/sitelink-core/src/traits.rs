//! Core traits for sitelink's remote collaborators.
//!
//! These traits define the interfaces the concrete HTTP clients satisfy,
//! enabling pluggable backends and testability. The import routine only
//! ever talks to the collaborators through these traits.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::{error, info};

use crate::error::Result;
use crate::filter::SearchFilter;
use crate::models::WorkspaceDocument;

// =============================================================================
// DOCUMENT STORE
// =============================================================================

/// Document-retrieval service holding workspace documents.
///
/// One `search` per import run returns a finite, ordered sequence; the
/// sequence is not restartable. A missing document on `fetch` surfaces as
/// [`crate::Error::NotFound`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Query documents matching the given filter.
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<WorkspaceDocument>>;

    /// Fetch a single document by its workspace identifier.
    async fn fetch(&self, id: &str) -> Result<WorkspaceDocument>;
}

// =============================================================================
// RECORD STORE
// =============================================================================

/// Persistence service creating records in the host system.
///
/// A uniqueness violation on an external-identifier field surfaces as
/// [`crate::Error::Store`] whose first sub-error carries
/// [`crate::DUPLICATE_VALUE_CODE`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create a record of the given object type with the given field map,
    /// returning the new record's identifier.
    async fn create(&self, object_type: &str, fields: JsonValue) -> Result<String>;
}

// =============================================================================
// NOTIFIER
// =============================================================================

/// Fire-and-forget user-visible notifications.
///
/// The import routine emits exactly one success notification per completed
/// run and exactly one failure notification per aborted run.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Report a successful operation to the user.
    async fn success(&self, message: &str);

    /// Report a failed operation to the user.
    async fn failure(&self, title: &str, message: &str);
}

/// No-op notifier for when notifications aren't needed.
pub struct NoOpNotifier;

#[async_trait]
impl Notifier for NoOpNotifier {
    async fn success(&self, _message: &str) {}
    async fn failure(&self, _title: &str, _message: &str) {}
}

/// Notifier that reports through the tracing subscriber. Default surface
/// for the command-line runner.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn success(&self, message: &str) {
        info!(notification = message, "Success");
    }

    async fn failure(&self, title: &str, message: &str) {
        error!(notification = message, "{}", title);
    }
}
