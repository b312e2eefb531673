//! User types and user endpoint options.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::SearchOptions;

/// The kind of account behind a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// A regular Atlassian account.
    Atlassian,
    /// An app or integration user.
    App,
    /// A Jira Service Management customer.
    Customer,
    #[serde(other)]
    Unknown,
}

/// A JIRA user.
///
/// Returned by `GET /rest/api/2/myself` and the user search endpoints, and
/// embedded in issues, comments and worklogs. When sent back to JIRA (e.g.
/// as an assignee) only the populated fields are serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// The user's account ID (JIRA Cloud).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    /// The username (JIRA Server / Data Center).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The user's email address (may be hidden by privacy settings).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_urls: Option<AvatarUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<UserGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_roles: Option<ApplicationRoles>,
}

impl User {
    /// A user reference by account ID, as used for assignees and reporters.
    pub fn with_account_id(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Default::default()
        }
    }

    /// The display name, falling back to the username or account ID.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.account_id.as_deref())
            .unwrap_or_default()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Avatar URLs for a user or project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarUrls {
    /// 48x48 pixel avatar.
    #[serde(rename = "48x48", skip_serializing_if = "Option::is_none")]
    pub size_48: Option<String>,
    /// 24x24 pixel avatar.
    #[serde(rename = "24x24", skip_serializing_if = "Option::is_none")]
    pub size_24: Option<String>,
    /// 16x16 pixel avatar.
    #[serde(rename = "16x16", skip_serializing_if = "Option::is_none")]
    pub size_16: Option<String>,
    /// 32x32 pixel avatar.
    #[serde(rename = "32x32", skip_serializing_if = "Option::is_none")]
    pub size_32: Option<String>,
}

/// A group the user belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroup {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroups {
    pub size: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<UserGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationRoles {
    pub size: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ApplicationRole>,
}

/// An application role assigned to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationRole {
    pub key: String,
    pub groups: Vec<String>,
    pub name: String,
    pub default_groups: Vec<String>,
    pub selected_by_default: bool,
    pub defined: bool,
    pub number_of_seats: i64,
    pub remaining_seats: i64,
    pub user_count: i64,
    pub user_count_description: String,
    pub has_unlimited_seats: bool,
    pub platform: bool,
}

/// Query parameters for `GET /rest/api/2/user/search`.
///
/// `query` matches against display name and email address.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindUsersOptions {
    #[serde(flatten)]
    pub search: SearchOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

/// Query parameters for `GET /rest/api/2/user/search/query`.
///
/// `query` is a structured user query, e.g. `is assignee of PROJ`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FindUsersByQueryOptions {
    #[serde(flatten)]
    pub search: SearchOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Request body for `POST /rest/api/2/user`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_user() {
        let json = r#"{
            "self": "https://company.atlassian.net/rest/api/2/user?accountId=abc123",
            "accountId": "abc123",
            "accountType": "atlassian",
            "emailAddress": "john@example.com",
            "avatarUrls": {"48x48": "https://avatar/48.png"},
            "displayName": "John Doe",
            "active": true,
            "timeZone": "Europe/Berlin",
            "groups": {"size": 1, "items": [{"name": "jira-users"}]},
            "applicationRoles": {"size": 0, "items": []}
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.account_id.as_deref(), Some("abc123"));
        assert_eq!(user.account_type, Some(AccountType::Atlassian));
        assert_eq!(user.display_name.as_deref(), Some("John Doe"));
        assert_eq!(user.active, Some(true));
        assert_eq!(
            user.avatar_urls.unwrap().size_48.as_deref(),
            Some("https://avatar/48.png")
        );
        assert_eq!(user.groups.unwrap().items[0].name.as_deref(), Some("jira-users"));
    }

    #[test]
    fn test_unknown_account_type() {
        let user: User = serde_json::from_str(r#"{"accountType": "robot"}"#).unwrap();
        assert_eq!(user.account_type, Some(AccountType::Unknown));
    }

    #[test]
    fn test_user_reference_serializes_only_account_id() {
        let json = serde_json::to_value(User::with_account_id("abc123")).unwrap();
        assert_eq!(json, serde_json::json!({"accountId": "abc123"}));
    }

    #[test]
    fn test_user_display() {
        let user = User {
            display_name: Some("Jane Smith".to_string()),
            name: Some("jsmith".to_string()),
            ..Default::default()
        };
        assert_eq!(format!("{}", user), "Jane Smith");

        let server_user = User {
            name: Some("jsmith".to_string()),
            ..Default::default()
        };
        assert_eq!(server_user.to_string(), "jsmith");
    }

    #[test]
    fn test_create_user_options_serialization() {
        let opts = CreateUserOptions {
            email_address: Some("new@example.com".to_string()),
            products: vec![],
        };
        assert_eq!(
            serde_json::to_value(opts).unwrap(),
            serde_json::json!({"emailAddress": "new@example.com"})
        );
    }
}
