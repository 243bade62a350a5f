//! # sitelink-connect
//!
//! Clients for starting remote-assistance work from a work order:
//!
//! - [`ConnectClient`] asks the launch API for a one-shot URI that opens a
//!   video session with a named callee, stamped with the work order so the
//!   session's artifacts can be imported later.
//! - [`FlowClient`] lists guided workflows and builds the session URL that
//!   runs one against a work order.

pub mod flow;
pub mod launch;

pub use flow::{session_url, FlowClient, FlowConfig, Workflow};
pub use launch::{ConnectClient, ConnectConfig, LaunchOutcome, LaunchRequest, Platform};
