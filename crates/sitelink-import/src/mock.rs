//! In-memory collaborator mocks for deterministic reconciler tests.
//!
//! `MockRecordStore` simulates the store's uniqueness constraint on the
//! `externalId` field: a second create with the same external id fails with
//! the same duplicate-value shape the real record API emits, so idempotence
//! tests exercise the production duplicate-handling path.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use sitelink_core::{
    DocumentStore, Error, Notifier, RecordStore, Result, SearchFilter, StoreFailure, StoreSubError,
    WorkspaceDocument, DUPLICATE_VALUE_CODE,
};

/// One logged collaborator call, for assertions.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub operation: String,
    pub input: String,
}

// =============================================================================
// DOCUMENT STORE
// =============================================================================

#[derive(Default)]
struct DocumentStoreState {
    search_results: Vec<WorkspaceDocument>,
    documents: HashMap<String, WorkspaceDocument>,
    search_failure: Option<String>,
    fetch_failures: HashMap<String, String>,
    calls: Vec<MockCall>,
}

/// Scriptable in-memory [`DocumentStore`].
#[derive(Clone, Default)]
pub struct MockDocumentStore {
    state: Arc<Mutex<DocumentStoreState>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the documents the next search returns, in order.
    pub fn with_search_results(self, documents: Vec<WorkspaceDocument>) -> Self {
        self.state.lock().unwrap().search_results = documents;
        self
    }

    /// Make a document fetchable by id.
    pub fn with_document(self, document: WorkspaceDocument) -> Self {
        self.state
            .lock()
            .unwrap()
            .documents
            .insert(document.id.clone(), document);
        self
    }

    /// Make the search fail with a transport error.
    pub fn with_search_failure(self, message: &str) -> Self {
        self.state.lock().unwrap().search_failure = Some(message.to_string());
        self
    }

    /// Make fetching the given id fail with a transport error.
    pub fn with_fetch_failure(self, id: &str, message: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .fetch_failures
            .insert(id.to_string(), message.to_string());
        self
    }

    /// All logged calls, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of fetches issued for the given id.
    pub fn fetch_count(&self, id: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| c.operation == "fetch" && c.input == id)
            .count()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<WorkspaceDocument>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(MockCall {
            operation: "search".to_string(),
            input: filter.to_query_string(),
        });
        if let Some(message) = &state.search_failure {
            return Err(Error::Request(message.clone()));
        }
        Ok(state.search_results.clone())
    }

    async fn fetch(&self, id: &str) -> Result<WorkspaceDocument> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(MockCall {
            operation: "fetch".to_string(),
            input: id.to_string(),
        });
        if let Some(message) = state.fetch_failures.get(id) {
            return Err(Error::Request(message.clone()));
        }
        state
            .documents
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("workspace document {}", id)))
    }
}

// =============================================================================
// RECORD STORE
// =============================================================================

/// A record the mock store accepted.
#[derive(Debug, Clone)]
pub struct CreatedRecord {
    pub object_type: String,
    pub record_id: String,
    pub fields: JsonValue,
}

/// Scripted failure for one create call.
pub enum ScriptedFailure {
    /// Transport-level failure (maps to [`Error::Request`]).
    Transport(String),
    /// Structured store rejection with one sub-error.
    Store { error_code: String, message: String },
}

#[derive(Default)]
struct RecordStoreState {
    next_id: u32,
    created: Vec<CreatedRecord>,
    attempts: Vec<String>,
    existing: HashMap<(String, String), String>,
    failures: HashMap<(String, String), ScriptedFailure>,
}

/// In-memory [`RecordStore`] enforcing uniqueness on `externalId`.
#[derive(Clone, Default)]
pub struct MockRecordStore {
    state: Arc<Mutex<RecordStoreState>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record as already present, keyed by external id.
    pub fn with_existing(self, object_type: &str, external_id: &str, record_id: &str) -> Self {
        self.state.lock().unwrap().existing.insert(
            (object_type.to_string(), external_id.to_string()),
            record_id.to_string(),
        );
        self
    }

    /// Script a failure for the create carrying this external id.
    pub fn with_failure(
        self,
        object_type: &str,
        external_id: &str,
        failure: ScriptedFailure,
    ) -> Self {
        self.state.lock().unwrap().failures.insert(
            (object_type.to_string(), external_id.to_string()),
            failure,
        );
        self
    }

    /// Records accepted so far, in creation order.
    pub fn created(&self) -> Vec<CreatedRecord> {
        self.state.lock().unwrap().created.clone()
    }

    /// Records of one object type, in creation order.
    pub fn created_of(&self, object_type: &str) -> Vec<CreatedRecord> {
        self.created()
            .into_iter()
            .filter(|r| r.object_type == object_type)
            .collect()
    }

    /// Every create attempt as `"<objectType>:<externalId>"`, in call order,
    /// including attempts that failed.
    pub fn attempts(&self) -> Vec<String> {
        self.state.lock().unwrap().attempts.clone()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn create(&self, object_type: &str, fields: JsonValue) -> Result<String> {
        let mut state = self.state.lock().unwrap();
        let external_id = fields
            .get("externalId")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        state
            .attempts
            .push(format!("{}:{}", object_type, external_id));

        let key = (object_type.to_string(), external_id);
        if let Some(failure) = state.failures.get(&key) {
            return Err(match failure {
                ScriptedFailure::Transport(message) => Error::Request(message.clone()),
                ScriptedFailure::Store {
                    error_code,
                    message,
                } => Error::Store(StoreFailure {
                    message: "record API returned 400".to_string(),
                    errors: vec![StoreSubError {
                        error_code: error_code.clone(),
                        message: message.clone(),
                    }],
                }),
            });
        }

        if let Some(existing_id) = state.existing.get(&key) {
            let message = format!(
                "duplicate value found: externalId duplicates value on record with id: {}",
                existing_id
            );
            return Err(Error::Store(StoreFailure {
                message: "record API returned 400".to_string(),
                errors: vec![StoreSubError {
                    error_code: DUPLICATE_VALUE_CODE.to_string(),
                    message,
                }],
            }));
        }

        state.next_id += 1;
        let record_id = format!("rec-{:03}", state.next_id);
        state.existing.insert(key, record_id.clone());
        state.created.push(CreatedRecord {
            object_type: object_type.to_string(),
            record_id: record_id.clone(),
            fields,
        });
        Ok(record_id)
    }
}

// =============================================================================
// NOTIFIER
// =============================================================================

#[derive(Default)]
struct NotifierState {
    successes: Vec<String>,
    failures: Vec<(String, String)>,
}

/// Notifier that records every notification for assertions.
#[derive(Clone, Default)]
pub struct MockNotifier {
    state: Arc<Mutex<NotifierState>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.state.lock().unwrap().successes.clone()
    }

    pub fn failures(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().failures.clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn success(&self, message: &str) {
        self.state.lock().unwrap().successes.push(message.to_string());
    }

    async fn failure(&self, title: &str, message: &str) {
        self.state
            .lock()
            .unwrap()
            .failures
            .push((title.to_string(), message.to_string()));
    }
}
