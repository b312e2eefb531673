use serde::{Deserialize, Serialize};

use super::{Comment, Issue};

/// A link between two issues.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IssueLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "type")]
    pub link_type: IssueLinkType,
    pub outward_issue: Option<Box<Issue>>,
    pub inward_issue: Option<Box<Issue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

/// The kind of an issue link, e.g. "Blocks" with inward text "is blocked by".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueLinkType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    pub name: String,
    pub inward: String,
    pub outward: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issue_link() {
        let json = r#"{
            "id": "10100",
            "type": {"id": "10000", "name": "Blocks", "inward": "is blocked by", "outward": "blocks"},
            "outwardIssue": {"id": "10002", "key": "PROJ-2", "fields": {"summary": "Blocked work"}}
        }"#;

        let link: IssueLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.link_type.outward, "blocks");
        assert_eq!(link.outward_issue.unwrap().summary(), "Blocked work");
        assert!(link.inward_issue.is_none());
    }
}
