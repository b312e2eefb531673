//! Pagination and shared request option types.

use serde::{Deserialize, Serialize};

/// Optional paging parameters accepted by list endpoints.
///
/// Embedded into endpoint-specific option structs with `#[serde(flatten)]`,
/// so the fields always end up as top-level query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// The index of the first item to return (0-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u32>,
    /// Maximum number of items per page. JIRA's default is 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    /// Comma-separated sections to expand in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
}

impl SearchOptions {
    /// Options for one page of `max_results` items starting at `start_at`.
    pub fn page(start_at: u32, max_results: u32) -> Self {
        Self {
            start_at: Some(start_at),
            max_results: Some(max_results),
            expand: None,
        }
    }

    /// Set the sections to expand.
    pub fn with_expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }
}

/// A page of values as returned by paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    /// The index of the first result.
    #[serde(default)]
    pub start_at: u32,
    /// Maximum results requested.
    #[serde(default)]
    pub max_results: u32,
    /// Total number of matching values.
    #[serde(default)]
    pub total: u32,
    /// Whether this is the last page.
    #[serde(default)]
    pub is_last: bool,
    /// The values on this page.
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
}

impl<T> Pagination<T> {
    /// Check if there are more pages of results.
    pub fn has_more(&self) -> bool {
        !self.is_last && self.next_start() < self.total
    }

    /// Get the starting index for the next page.
    ///
    /// Saturates at `u32::MAX` instead of overflowing on bogus server values.
    pub fn next_start(&self) -> u32 {
        let len = u32::try_from(self.values.len()).unwrap_or(u32::MAX);
        self.start_at.saturating_add(len)
    }
}

/// A key/value entity property attached to issues, comments and worklogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityProperty {
    pub key: String,
    pub value: serde_json::Value,
}
