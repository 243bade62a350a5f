//! # sitelink-records
//!
//! HTTP client for the host system's record API.
//!
//! The record API creates one record per call `POST /records/{objectType}`
//! with a JSON field map and enforces a uniqueness constraint on external
//! identifier fields. Rejections arrive as a JSON array of structured
//! sub-errors; this crate preserves them in
//! [`sitelink_core::StoreFailure`] so callers can recognize duplicate-value
//! conflicts.

mod client;

pub use client::{RecordsClient, RecordsConfig};
