//! Work logged against issues.

use serde::{Deserialize, Serialize};

use super::{EntityProperty, User};

/// The work log of an issue: zero or more records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Worklog {
    pub start_at: u32,
    pub max_results: u32,
    pub total: u32,
    pub worklogs: Vec<WorklogRecord>,
}

impl Worklog {
    /// Total time spent across all records on this page, in seconds.
    pub fn time_spent_seconds(&self) -> i64 {
        self.worklogs
            .iter()
            .filter_map(|w| w.time_spent_seconds)
            .sum()
    }
}

/// One entry of a work log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorklogRecord {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// When the work started, e.g. `2024-01-15T10:30:00.000+0000`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
    /// Human-readable duration such as `3h 20m`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<EntityProperty>,
}

impl WorklogRecord {
    /// A new record with a human-readable duration such as `1h 30m`.
    pub fn spent(time_spent: impl Into<String>) -> Self {
        Self {
            time_spent: Some(time_spent.into()),
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn started_at(mut self, started: impl Into<String>) -> Self {
        self.started = Some(started.into());
        self
    }
}
