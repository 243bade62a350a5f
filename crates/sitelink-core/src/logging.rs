//! Structured logging schema and field name constants for sitelink.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Run aborted, requires operator attention |
//! | WARN  | Recoverable issue (asset skipped, callee unreachable) |
//! | INFO  | Run lifecycle, operation completions |
//! | DEBUG | Decision points, per-request details |
//! | TRACE | Per-item iteration, raw payloads |

/// Default `RUST_LOG`-style filter for the import runner.
pub const DEFAULT_ENV_FILTER: &str =
    "sitelink_import=debug,sitelink_workspace=debug,sitelink_records=debug,sitelink_connect=debug";

// ─── Identity fields ───────────────────────────────────────────────────────

/// Component within a crate. Examples: "workspace", "records", "importer"
pub const COMPONENT: &str = "component";

/// Logical operation name. Examples: "search", "fetch", "create", "launch"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Work order the operation is scoped to.
pub const WORK_ORDER_ID: &str = "work_order_id";

/// Workspace document id being operated on.
pub const DOCUMENT_ID: &str = "document_id";

/// Parent call document id.
pub const PARENT_ID: &str = "parent_id";

/// Record id returned by the record store.
pub const RECORD_ID: &str = "record_id";

/// Record object type being created.
pub const OBJECT_TYPE: &str = "object_type";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of documents returned by a workspace search.
pub const RESULT_COUNT: &str = "result_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
