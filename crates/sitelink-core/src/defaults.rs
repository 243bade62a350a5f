//! Centralized default constants for sitelink.
//!
//! **This module is the single source of truth** for shared default values.
//! The client crates and the import runner reference these constants instead
//! of defining their own copies.

// =============================================================================
// REMOTE ENDPOINTS
// =============================================================================

/// Default base URL for the document workspace API.
pub const WORKSPACE_URL: &str = "https://workspace.sitelink.dev/api";

/// Default base URL for the host record API.
pub const RECORDS_URL: &str = "https://records.sitelink.dev/api";

/// Default endpoint for session launch requests.
pub const CONNECT_LAUNCH_URL: &str = "https://connect.sitelink.dev/api/launchrequest";

/// Default endpoint for the guided-workflow catalog.
pub const FLOW_CATALOG_URL: &str = "https://flow.sitelink.dev/api/workflows";

/// Default base URL for guided-workflow session pages.
pub const FLOW_SESSION_URL: &str = "https://flow.sitelink.dev";

/// Default HTTP request timeout in seconds, shared by all clients.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// RECORD OBJECTS
// =============================================================================

/// Record object type for an imported remote-assistance call.
pub const CALL_OBJECT: &str = "AssistCall";

/// Record object type for an imported workspace document.
pub const DOCUMENT_OBJECT: &str = "AssistDocument";

// =============================================================================
// WIRE CONTRACTS
// =============================================================================

/// Metadata key stamped on every workspace document captured for a work
/// order. Both the launch request and the import search filter use it.
pub const WORK_ORDER_METADATA_KEY: &str = "salesforceWorkOrderId";

/// Query parameter carrying the work order id into a guided-workflow session.
pub const FLOW_WORK_ORDER_PARAM: &str = "sfWorkOrderId";
