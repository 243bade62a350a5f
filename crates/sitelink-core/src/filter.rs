//! Search filter grammar for workspace document queries.
//!
//! The workspace query language is an OR-combination of clauses, each
//! matching either one named metadata entry or any metadata value:
//!
//! ```text
//! (externalMetadataName.1 = 'salesforceWorkOrderId' AND externalMetadataValue.1 = 'WO-1')
//!     OR (externalMetadataValue = 'pump housing')
//! ```
//!
//! Values are passed through verbatim; the grammar is owned by the workspace
//! service, not by sitelink.

use crate::defaults;

/// One clause of a workspace search filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// Match documents whose metadata entry `key` has exactly `value`.
    Metadata { key: String, value: String },
    /// Match documents where any metadata value equals `value`.
    AnyMetadataValue(String),
}

impl FilterClause {
    fn render(&self) -> String {
        match self {
            Self::Metadata { key, value } => format!(
                "(externalMetadataName.1 = '{}' AND externalMetadataValue.1 = '{}')",
                key, value
            ),
            Self::AnyMetadataValue(value) => format!("(externalMetadataValue = '{}')", value),
        }
    }
}

/// An OR-combination of [`FilterClause`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    clauses: Vec<FilterClause>,
}

impl SearchFilter {
    /// Create an empty filter. Empty filters are rejected by the workspace
    /// client; callers must add at least one clause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter anchored to a work order: matches documents whose
    /// `salesforceWorkOrderId` metadata entry equals `work_order_id`.
    pub fn for_work_order(work_order_id: &str) -> Self {
        Self::new().metadata(defaults::WORK_ORDER_METADATA_KEY, work_order_id)
    }

    /// Add a named metadata clause.
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.clauses.push(FilterClause::Metadata {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Add an any-metadata-value clause.
    pub fn any_metadata_value(mut self, value: impl Into<String>) -> Self {
        self.clauses
            .push(FilterClause::AnyMetadataValue(value.into()));
        self
    }

    /// Check if the filter has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Render the filter in the workspace query grammar.
    pub fn to_query_string(&self) -> String {
        self.clauses
            .iter()
            .map(FilterClause::render)
            .collect::<Vec<_>>()
            .join(" OR ")
    }
}
