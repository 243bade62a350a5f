//! # sitelink-workspace
//!
//! HTTP client for the remote document workspace.
//!
//! The workspace holds one document per completed remote-assistance call
//! plus one document per asset captured during the call. This crate
//! implements [`sitelink_core::DocumentStore`] against the workspace's REST
//! surface:
//!
//! - `GET /documents?query=<filter>` — metadata search
//! - `GET /documents/{id}` — fetch by identifier
//!
//! # Example
//!
//! ```rust,no_run
//! use sitelink_core::{DocumentStore, SearchFilter};
//! use sitelink_workspace::WorkspaceClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = WorkspaceClient::from_env().unwrap();
//!     let filter = SearchFilter::for_work_order("WO-1");
//!     let documents = client.search(&filter).await.unwrap();
//!     println!("{} document(s)", documents.len());
//! }
//! ```

mod client;

pub use client::{WorkspaceClient, WorkspaceConfig};
