//! Extraction of pre-existing record ids from duplicate-value failures.

use once_cell::sync::Lazy;
use regex::Regex;

use sitelink_core::{StoreFailure, DUPLICATE_VALUE_CODE};

/// Tail of the record store's duplicate-value message, with the conflicting
/// record's id captured to end of message.
static RECORD_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"record with id: (.+)$").expect("invalid record id pattern"));

/// Extract the pre-existing record id from a duplicate-value store failure.
///
/// Only the first sub-error is inspected. Returns `Some(id)` when it is
/// classified [`DUPLICATE_VALUE_CODE`] and its message ends with
/// `record with id: <id>`; `None` otherwise. `None` covers both "not a
/// duplicate" and "duplicate with no parseable id" — callers treat both as
/// a failed create.
///
/// The message format is an informal contract of the record store, not a
/// documented API. If the store ever words its duplicate messages
/// differently, extraction fails closed and the import run aborts; see the
/// non-matching-message tests below for the pinned behavior.
pub fn duplicate_record_id(failure: &StoreFailure) -> Option<String> {
    let first = failure.errors.first()?;
    if first.error_code != DUPLICATE_VALUE_CODE {
        return None;
    }
    RECORD_ID_PATTERN
        .captures(&first.message)
        .map(|caps| caps[1].to_string())
}
