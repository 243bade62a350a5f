//! Asset import reconciliation.
//!
//! Walks the flat list of workspace documents captured for a work order and
//! persists it as a deduplicated hierarchy of host records: one call record
//! per distinct parent document, one document record per asset.
//!
//! The walk is strictly sequential. Each document record depends on its
//! call record having been resolved first, so every remote call is awaited
//! before the next asset is considered. The parent-to-call-record mapping
//! lives on this function's stack and is discarded when the run ends;
//! nothing is shared across runs.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};

use sitelink_core::{
    defaults, DocumentStore, Error, Notifier, RecordStore, Result, SearchFilter, WorkspaceDocument,
};

use crate::duplicate::duplicate_record_id;
use crate::report::{AssetOutcome, ImportReport};

/// One import invocation.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    /// Work order whose captured assets should be imported.
    pub work_order_id: String,
    /// Optional free text; when present, the search also matches any
    /// document with a metadata value equal to it.
    pub search_text: Option<String>,
}

impl ImportRequest {
    pub fn new(work_order_id: impl Into<String>) -> Self {
        Self {
            work_order_id: work_order_id.into(),
            search_text: None,
        }
    }

    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }
}

/// Result of one record-create attempt under the duplicate policy.
enum Insert {
    Created(String),
    AlreadyPresent(String),
}

impl Insert {
    fn record_id(&self) -> &str {
        match self {
            Self::Created(id) | Self::AlreadyPresent(id) => id,
        }
    }
}

/// Imports workspace assets into the host record store.
pub struct Importer {
    documents: Arc<dyn DocumentStore>,
    records: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
}

impl Importer {
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        records: Arc<dyn RecordStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            documents,
            records,
            notifier,
        }
    }

    /// Run one import pass for a work order.
    ///
    /// Absorbed conditions: a parent call document missing remotely skips
    /// the asset; a duplicate-value rejection counts as already imported.
    /// Any other failure aborts the run at its current point — records
    /// created so far stand, one failure notification is emitted, and the
    /// error surfaces with its reason text intact. There are no retries.
    pub async fn run(&self, request: &ImportRequest) -> Result<ImportReport> {
        if request.work_order_id.trim().is_empty() {
            return Err(Error::InvalidInput(
                "work order id must not be empty".to_string(),
            ));
        }

        let started_at = Utc::now();

        let mut filter = SearchFilter::for_work_order(&request.work_order_id);
        if let Some(text) = request.search_text.as_deref() {
            if !text.is_empty() {
                filter = filter.any_metadata_value(text);
            }
        }

        let assets = match self.documents.search(&filter).await {
            Ok(assets) => assets,
            Err(e) => {
                self.notifier.failure("Import failed", &e.to_string()).await;
                return Err(e);
            }
        };

        info!(
            work_order_id = %request.work_order_id,
            result_count = assets.len(),
            "Importing workspace assets"
        );

        // Parent document id -> call record id, scoped to this run.
        let mut call_records: HashMap<String, String> = HashMap::new();
        let mut outcomes = Vec::with_capacity(assets.len());

        for asset in &assets {
            let Some(parent_id) = asset.parent_id.as_deref() else {
                warn!(document_id = %asset.id, "Asset has no parent call, skipping");
                outcomes.push(AssetOutcome::skipped(&asset.id, "no parent call"));
                continue;
            };

            let call_record_id = match call_records.get(parent_id) {
                Some(id) => id.clone(),
                None => {
                    let parent = match self.documents.fetch(parent_id).await {
                        Ok(parent) => parent,
                        Err(Error::NotFound(_)) => {
                            warn!(
                                document_id = %asset.id,
                                parent_id = %parent_id,
                                "Parent call not found, skipping asset"
                            );
                            outcomes.push(AssetOutcome::skipped(&asset.id, "parent call not found"));
                            continue;
                        }
                        Err(e) => {
                            self.notifier
                                .failure("Call not imported", &e.to_string())
                                .await;
                            return Err(e);
                        }
                    };

                    let insert = match self
                        .insert_call_record(&parent, &request.work_order_id)
                        .await
                    {
                        Ok(insert) => insert,
                        Err(e) => {
                            self.notifier
                                .failure("Call not imported", &e.to_string())
                                .await;
                            return Err(e);
                        }
                    };
                    let id = insert.record_id().to_string();
                    call_records.insert(parent_id.to_string(), id.clone());
                    id
                }
            };

            match self.insert_document_record(asset, &call_record_id).await {
                Ok(Insert::Created(_)) => outcomes.push(AssetOutcome::imported(&asset.id)),
                Ok(Insert::AlreadyPresent(_)) => {
                    outcomes.push(AssetOutcome::already_imported(&asset.id))
                }
                Err(e) => {
                    self.notifier
                        .failure("Workspace document not imported", &e.to_string())
                        .await;
                    return Err(e);
                }
            }
        }

        let report = ImportReport::new(outcomes, started_at, Utc::now());
        info!(
            work_order_id = %request.work_order_id,
            imported = report.imported(),
            skipped = report.skipped(),
            duration_ms = report.duration_ms(),
            "Import run complete"
        );
        self.notifier
            .success(&format!("{} asset(s) imported", report.imported()))
            .await;
        Ok(report)
    }

    /// Create the call record for a parent call document.
    async fn insert_call_record(
        &self,
        call: &WorkspaceDocument,
        work_order_id: &str,
    ) -> Result<Insert> {
        let fields = call_record_fields(call, work_order_id);
        self.insert_with_duplicate_policy(defaults::CALL_OBJECT, fields)
            .await
    }

    /// Create the document record for an asset, linked to its call record.
    async fn insert_document_record(
        &self,
        asset: &WorkspaceDocument,
        call_record_id: &str,
    ) -> Result<Insert> {
        let fields = document_record_fields(asset, call_record_id)?;
        self.insert_with_duplicate_policy(defaults::DOCUMENT_OBJECT, fields)
            .await
    }

    /// Create a record, degrading a duplicate-value rejection to the
    /// pre-existing record's id. Any other failure propagates.
    async fn insert_with_duplicate_policy(
        &self,
        object_type: &str,
        fields: JsonValue,
    ) -> Result<Insert> {
        match self.records.create(object_type, fields).await {
            Ok(record_id) => Ok(Insert::Created(record_id)),
            Err(Error::Store(failure)) => match duplicate_record_id(&failure) {
                Some(existing_id) => {
                    debug!(
                        object_type = %object_type,
                        record_id = %existing_id,
                        "Record already present, reusing"
                    );
                    Ok(Insert::AlreadyPresent(existing_id))
                }
                None => Err(Error::Store(failure)),
            },
            Err(e) => Err(e),
        }
    }
}

fn call_record_fields(call: &WorkspaceDocument, work_order_id: &str) -> JsonValue {
    json!({
        "externalId": call.id,
        "name": call.title,
        "workOrderId": work_order_id,
    })
}

fn document_record_fields(asset: &WorkspaceDocument, call_record_id: &str) -> Result<JsonValue> {
    Ok(json!({
        "name": asset.title,
        "externalId": asset.id,
        "type": asset.doc_type,
        "description": asset.description,
        "externalMetadata": serde_json::to_string(&asset.external_metadata)?,
        "parentExternalId": asset.parent_id,
        "downloadUrl": asset.download_url,
        "callRecordId": call_record_id,
    }))
}
