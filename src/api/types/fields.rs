//! Issue fields and the building blocks they are made of.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Comments, IssueLink, IssueType, Priority, Project, Resolution, Status, User, Version, Worklog};

/// A field definition, as listed by `GET /rest/api/2/field`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    pub key: String,
    pub name: String,
    pub custom: bool,
    pub navigable: bool,
    pub orderable: bool,
    pub searchable: bool,
    pub clause_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<FieldSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldSchema {
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<i64>,
}

/// The fields of an issue.
///
/// Every member is optional because JIRA only returns the fields that were
/// requested, and a create request only sends the ones that are set. Custom
/// fields (`customfield_*`) and anything else this crate does not model end
/// up in `custom_fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
    #[serde(rename = "issuetype", skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<IssueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolutiondate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duedate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watches: Option<Watches>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<User>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    #[serde(rename = "aggregateprogress", skip_serializing_if = "Option::is_none")]
    pub aggregate_progress: Option<Progress>,
    #[serde(rename = "timetracking", skip_serializing_if = "Option::is_none")]
    pub time_tracking: Option<TimeTracking>,
    #[serde(rename = "timespent", skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<i64>,
    #[serde(rename = "timeestimate", skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,
    #[serde(rename = "timeoriginalestimate", skip_serializing_if = "Option::is_none")]
    pub time_original_estimate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worklog: Option<Worklog>,
    #[serde(rename = "issuelinks", skip_serializing_if = "Vec::is_empty")]
    pub issue_links: Vec<IssueLink>,
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    pub comments: Option<Comments>,
    #[serde(rename = "fixVersions", skip_serializing_if = "Vec::is_empty")]
    pub fix_versions: Vec<FixVersion>,
    #[serde(rename = "versions", skip_serializing_if = "Vec::is_empty")]
    pub affects_versions: Vec<Version>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<Subtask>,
    #[serde(rename = "attachment", skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic: Option<Epic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint: Option<Sprint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    #[serde(rename = "aggregatetimeoriginalestimate", skip_serializing_if = "Option::is_none")]
    pub aggregate_time_original_estimate: Option<i64>,
    #[serde(rename = "aggregatetimespent", skip_serializing_if = "Option::is_none")]
    pub aggregate_time_spent: Option<i64>,
    #[serde(rename = "aggregatetimeestimate", skip_serializing_if = "Option::is_none")]
    pub aggregate_time_estimate: Option<i64>,
    /// Custom and unmodelled fields, keyed by field ID.
    #[serde(flatten)]
    pub custom_fields: HashMap<String, serde_json::Value>,
}

impl IssueFields {
    /// Look up a custom field, ignoring explicit nulls.
    pub fn custom_field(&self, id: &str) -> Option<&serde_json::Value> {
        self.custom_fields.get(id).filter(|v| !v.is_null())
    }
}

/// Which users are watching an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Watches {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    pub watch_count: i64,
    pub is_watching: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub watchers: Vec<Watcher>,
}

/// A simplified user that watches an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Watcher {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub active: bool,
}

/// A component of an issue. Components are user defined per project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub progress: i64,
    pub total: i64,
    pub percent: i64,
}

/// Time tracking estimates, as text ("1w 2d") and in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeTracking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_estimate_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_estimate_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<i64>,
}

/// A subtask of a parent issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subtask {
    pub id: String,
    pub key: String,
    #[serde(rename = "self")]
    pub self_url: String,
    pub fields: IssueFields,
}

/// A software release in which an issue is fixed.
pub type FixVersion = Version;

/// The epic an issue belongs to. The returned color is not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Epic {
    pub id: i64,
    pub key: String,
    #[serde(rename = "self")]
    pub self_url: String,
    pub name: String,
    pub summary: String,
    pub done: bool,
}

/// A sprint on an agile board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sprint {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    pub origin_board_id: i64,
    #[serde(rename = "self")]
    pub self_url: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

/// The parent of a subtask.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// A file attached to an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attachment {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Download URL of the attachment content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_definition() {
        let json = r#"{
            "id": "customfield_10016",
            "key": "customfield_10016",
            "name": "Story point estimate",
            "custom": true,
            "orderable": true,
            "navigable": true,
            "searchable": true,
            "clauseNames": ["cf[10016]", "Story point estimate"],
            "schema": {
                "type": "number",
                "custom": "com.pyxis.greenhopper.jira:jsw-story-points",
                "customId": 10016
            }
        }"#;

        let field: Field = serde_json::from_str(json).unwrap();
        assert!(field.custom);
        assert_eq!(field.clause_names.len(), 2);
        let schema = field.schema.unwrap();
        assert_eq!(schema.field_type, "number");
        assert_eq!(schema.custom_id, Some(10016));
    }

    #[test]
    fn test_issue_fields_capture_custom_fields() {
        let json = r#"{
            "summary": "Estimate me",
            "customfield_10016": 5.0,
            "customfield_10020": null,
            "timetracking": {"originalEstimate": "1d", "originalEstimateSeconds": 28800}
        }"#;

        let fields: IssueFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.summary.as_deref(), Some("Estimate me"));
        assert_eq!(fields.custom_field("customfield_10016"), Some(&serde_json::json!(5.0)));
        assert!(fields.custom_field("customfield_10020").is_none());
        assert_eq!(
            fields.time_tracking.unwrap().original_estimate_seconds,
            Some(28800)
        );
    }

    #[test]
    fn test_issue_fields_serialize_only_set_values() {
        let fields = IssueFields {
            summary: Some("New bug".to_string()),
            issue_type: Some(IssueType::named("Bug")),
            labels: vec!["backend".to_string()],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            serde_json::json!({
                "summary": "New bug",
                "issuetype": {"name": "Bug"},
                "labels": ["backend"]
            })
        );
    }
}
