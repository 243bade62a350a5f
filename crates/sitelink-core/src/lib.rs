//! # sitelink-core
//!
//! Core types, traits, and abstractions for sitelink.
//!
//! This crate provides the shared data model and the trait definitions the
//! other sitelink crates depend on:
//! - Workspace document model and the search filter grammar
//! - Record store field maps and structured failure model
//! - Collaborator traits (`DocumentStore`, `RecordStore`, `Notifier`)
//! - Error taxonomy and default constants

pub mod defaults;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use filter::{FilterClause, SearchFilter};
pub use models::{StoreFailure, StoreSubError, WorkspaceDocument, DUPLICATE_VALUE_CODE};
pub use traits::{DocumentStore, LogNotifier, NoOpNotifier, Notifier, RecordStore};
