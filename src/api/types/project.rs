//! Projects, their components and versions, and the project endpoint options.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AvatarUrls, IssueType, SearchOptions, User};

/// A JIRA project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// The project key (e.g., "PROJ").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<User>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ProjectComponent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issue_types: Vec<IssueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<Version>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Role names mapped to their resource URLs.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub roles: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_urls: Option<AvatarUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_category: Option<ProjectCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type_key: Option<String>,
}

impl Project {
    /// A project reference by key, as used when creating issues.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Default::default()
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.key, &self.name) {
            (Some(key), Some(name)) => write!(f, "{} ({})", name, key),
            (Some(key), None) => write!(f, "{}", key),
            (None, Some(name)) => write!(f, "{}", name),
            (None, None) => Ok(()),
        }
    }
}

/// A component defined on a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectComponent {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_assignee_type_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCategory {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A project version (release).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Version {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_release_date: Option<String>,
    /// Unlike other IDs this one is returned as a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// Query parameters for `GET /rest/api/2/project/search`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectOptions {
    #[serde(flatten)]
    pub search: SearchOptions,
    /// Sort order, e.g. `key`, `-lastIssueUpdatedTime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Matches against project key and name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Filter by permission: `view`, `browse` or `edit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub id: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
}

/// Query parameters for `GET /rest/api/2/project/{projectIdOrKey}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetProjectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Pagination;

    #[test]
    fn test_parse_project_search_page() {
        let json = r#"{
            "self": "https://company.atlassian.net/rest/api/2/project/search?startAt=0",
            "startAt": 0,
            "maxResults": 50,
            "total": 1,
            "isLast": true,
            "values": [{
                "id": "10000",
                "key": "PROJ",
                "name": "My Project",
                "isPrivate": false,
                "projectTypeKey": "software",
                "projectCategory": {"id": "10000", "name": "Engineering"},
                "versions": [{"id": "10010", "name": "1.0", "released": true, "projectId": 10000}]
            }]
        }"#;

        let page: Pagination<Project> = serde_json::from_str(json).unwrap();
        assert!(!page.has_more());
        let project = &page.values[0];
        assert_eq!(project.to_string(), "My Project (PROJ)");
        assert_eq!(project.project_type_key.as_deref(), Some("software"));
        assert_eq!(project.versions[0].project_id, Some(10000));
        assert_eq!(
            project.project_category.as_ref().and_then(|c| c.name.as_deref()),
            Some("Engineering")
        );
    }

    #[test]
    fn test_project_reference_serialization() {
        assert_eq!(
            serde_json::to_value(Project::with_key("PROJ")).unwrap(),
            serde_json::json!({"key": "PROJ"})
        );
    }
}
