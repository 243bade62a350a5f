//! # sitelink-import
//!
//! Asset import reconciliation for sitelink work orders.
//!
//! After a remote-assistance session, the workspace holds one call document
//! plus one document per captured asset. This crate walks that flat list
//! and persists it as a deduplicated hierarchy in the host system: one call
//! record per distinct parent document, one document record per asset, each
//! linked to its call record and to the work order.
//!
//! Records already present in the host system degrade to duplicate-value
//! lookups, so re-running an import is safe.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sitelink_core::LogNotifier;
//! use sitelink_import::{ImportRequest, Importer};
//! use sitelink_records::RecordsClient;
//! use sitelink_workspace::WorkspaceClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let importer = Importer::new(
//!         Arc::new(WorkspaceClient::from_env().unwrap()),
//!         Arc::new(RecordsClient::from_env().unwrap()),
//!         Arc::new(LogNotifier),
//!     );
//!
//!     let report = importer
//!         .run(&ImportRequest::new("WO-1"))
//!         .await
//!         .unwrap();
//!     println!("{} asset(s) imported", report.imported());
//! }
//! ```

pub mod duplicate;
pub mod reconciler;
pub mod report;

// In-memory collaborator mocks for reconciler tests
#[cfg(test)]
pub mod mock;

pub use duplicate::duplicate_record_id;
pub use reconciler::{ImportRequest, Importer};
pub use report::{AssetOutcome, ImportReport, ImportStatus};
