//! Issue comments.

use serde::{Deserialize, Serialize};

use super::{EntityProperty, User};

/// The comments embedded in an issue's `comment` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comments {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

/// A page of comments, as returned by `GET /rest/api/2/issue/{key}/comment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentPage {
    pub start_at: u32,
    pub max_results: u32,
    pub total: u32,
    pub comments: Vec<Comment>,
}

/// Who may see a comment, e.g. type "role" with value "Administrators".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentVisibility {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub visibility_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A comment on an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<CommentVisibility>,
    /// Optional on create and update.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<EntityProperty>,
}

impl Comment {
    /// A new comment with the given body text.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Default::default()
        }
    }

    /// Restrict the comment to members of a project role.
    pub fn visible_to_role(mut self, role: impl Into<String>) -> Self {
        self.visibility = Some(CommentVisibility {
            visibility_type: Some("role".to_string()),
            value: Some(role.into()),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_body() {
        let comment = Comment::new("Looks good").visible_to_role("Developers");
        assert_eq!(
            serde_json::to_value(&comment).unwrap(),
            serde_json::json!({
                "body": "Looks good",
                "visibility": {"type": "role", "value": "Developers"}
            })
        );
    }

    #[test]
    fn test_parse_comment_page() {
        let json = r#"{
            "startAt": 0,
            "maxResults": 50,
            "total": 1,
            "comments": [{
                "id": "10000",
                "author": {"displayName": "Jane"},
                "body": "First!",
                "created": "2024-01-15T10:30:00.000+0000"
            }]
        }"#;

        let page: CommentPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 1);
        let comment = &page.comments[0];
        assert_eq!(comment.body.as_deref(), Some("First!"));
        assert_eq!(comment.author.as_ref().map(|a| a.label()), Some("Jane"));
    }
}
