//! Issues, transitions, changelogs and the issue endpoint options.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Comments, EntityProperty, IssueFields, IssueType, IssueTypeLevel, Status, User};

/// A JIRA issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Issue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// The issue key, e.g. `PROJ-123`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<IssueFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_fields: Option<IssueRenderedFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changelog: Option<Changelog>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<Transition>,
    /// Display names of the returned fields, keyed by field ID.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub names: HashMap<String, String>,
}

impl Issue {
    /// The issue summary, or an empty string when fields were not returned.
    pub fn summary(&self) -> &str {
        self.fields
            .as_ref()
            .and_then(|f| f.summary.as_deref())
            .unwrap_or_default()
    }

    /// The current status name, if the status field was returned.
    pub fn status_name(&self) -> Option<&str> {
        self.fields
            .as_ref()
            .and_then(|f| f.status.as_ref())
            .map(|s| s.name.as_str())
    }
}

/// Fields rendered to HTML by JIRA. Only a subset of fields is rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueRenderedFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolutiondate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duedate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    pub comments: Option<Comments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A workflow transition available for an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    pub id: String,
    pub name: String,
    /// The status the issue moves to.
    pub to: Status,
    pub fields: HashMap<String, TransitionField>,
}

/// Screen field metadata of a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionField {
    pub required: bool,
}

/// Response wrapper for the transitions endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TransitionsResponse {
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

/// Request body for performing a transition.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionRequest {
    pub transition: TransitionId,
}

impl TransitionRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            transition: TransitionId { id: id.into() },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionId {
    pub id: String,
}

/// The change history of an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Changelog {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub histories: Vec<ChangelogHistory>,
}

/// One change set: who changed what, and when.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogHistory {
    pub id: String,
    pub author: User,
    pub created: String,
    pub items: Vec<ChangelogItem>,
}

/// A single field change inside a changelog history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangelogItem {
    pub field: String,
    pub field_id: String,
    #[serde(rename = "fieldtype")]
    pub field_type: String,
    pub from: Option<String>,
    #[serde(rename = "fromString")]
    pub from_display: Option<String>,
    pub to: Option<String>,
    #[serde(rename = "toString")]
    pub to_display: Option<String>,
}

/// Request body (and query flag) for `POST /rest/api/2/issue`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateIssueOptions {
    /// Add the project to the user's recently viewed history.
    /// Sent as the `updateHistory` query parameter, never in the body.
    #[serde(skip)]
    pub update_history: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<IssueFields>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<EntityProperty>,
}

impl CreateIssueOptions {
    /// Options creating an issue with the given fields.
    pub fn with_fields(fields: IssueFields) -> Self {
        Self {
            fields: Some(fields),
            ..Default::default()
        }
    }
}

/// Query parameters for `GET /rest/api/2/issue/{key}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIssueOptions {
    /// Comma-separated list of fields to return, e.g. `summary,status`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_by_keys: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_history: Option<bool>,
}

/// Query parameters for `GET /rest/api/2/issuetype/project`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectIssueTypeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<IssueTypeLevel>,
}

/// A page of issue types that can be used to create issues in a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateMetadataPage {
    pub issue_types: Vec<IssueType>,
    pub start_at: i64,
    pub total: i64,
    pub max_results: i64,
}
