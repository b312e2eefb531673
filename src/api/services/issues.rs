use reqwest::Method;
use tracing::{debug, info, instrument};

use super::segment;
use crate::api::types::{
    Comment, CommentPage, CreateIssueOptions, CreateMetadataPage, Field, GetIssueOptions,
    GetProjectIssueTypeOptions, Issue, IssueType, SearchOptions, Transition, TransitionRequest,
    TransitionsResponse, Worklog, WorklogRecord,
};
use crate::api::Client;
use crate::error::Result;

/// Issue endpoints under `/rest/api/2/issue`, plus field and issue type
/// metadata.
#[derive(Debug, Clone, Copy)]
pub struct IssuesService<'a> {
    client: &'a Client,
}

impl<'a> IssuesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create an issue, or a subtask when the fields name a parent.
    ///
    /// Only the created issue's `id`, `key` and `self` are returned.
    #[instrument(skip(self, options), fields(update_history = options.update_history))]
    pub async fn create(&self, options: &CreateIssueOptions) -> Result<Issue> {
        let path = if options.update_history {
            "/rest/api/2/issue?updateHistory=true"
        } else {
            "/rest/api/2/issue"
        };
        let issue: Issue = self.client.invoke(Method::POST, path, Some(options)).await?;
        info!("Created issue {}", issue.key.as_deref().unwrap_or_default());
        Ok(issue)
    }

    /// An issue by ID or key (e.g. `PROJ-123`).
    #[instrument(skip(self, options), fields(issue_key = %key))]
    pub async fn get(&self, key: &str, options: Option<&GetIssueOptions>) -> Result<Issue> {
        debug!("Fetching issue");
        let path = format!("/rest/api/2/issue/{}", segment(key));
        self.client.invoke(Method::GET, &path, options).await
    }

    /// All system and custom field definitions.
    #[instrument(skip(self))]
    pub async fn get_fields(&self) -> Result<Vec<Field>> {
        self.client
            .invoke::<(), _>(Method::GET, "/rest/api/2/field", None)
            .await
    }

    /// Issue types of a project, optionally filtered by hierarchy level.
    #[instrument(skip(self))]
    pub async fn get_project_issue_types(
        &self,
        options: &GetProjectIssueTypeOptions,
    ) -> Result<Vec<IssueType>> {
        self.client
            .invoke(Method::GET, "/rest/api/2/issuetype/project", Some(options))
            .await
    }

    /// The issue types that can be used to create issues in a project.
    #[instrument(skip(self, search), fields(project = %project_id_or_key))]
    pub async fn get_create_metadata_for_project(
        &self,
        project_id_or_key: &str,
        search: Option<&SearchOptions>,
    ) -> Result<CreateMetadataPage> {
        let path = format!(
            "/rest/api/2/issue/createmeta/{}/issuetypes",
            segment(project_id_or_key)
        );
        self.client.invoke(Method::GET, &path, search).await
    }

    /// Transitions available to the user from the issue's current status.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub async fn get_transitions(&self, key: &str) -> Result<Vec<Transition>> {
        let path = format!("/rest/api/2/issue/{}/transitions", segment(key));
        let response: TransitionsResponse =
            self.client.invoke::<(), _>(Method::GET, &path, None).await?;
        debug!("Found {} transitions", response.transitions.len());
        Ok(response.transitions)
    }

    /// Move an issue through a workflow transition.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub async fn do_transition(&self, key: &str, transition_id: &str) -> Result<()> {
        let path = format!("/rest/api/2/issue/{}/transitions", segment(key));
        let request = TransitionRequest::new(transition_id);
        self.client
            .invoke(Method::POST, &path, Some(&request))
            .await
    }

    /// A page of the issue's comments.
    #[instrument(skip(self, search), fields(issue_key = %key))]
    pub async fn get_comments(
        &self,
        key: &str,
        search: Option<&SearchOptions>,
    ) -> Result<CommentPage> {
        let path = format!("/rest/api/2/issue/{}/comment", segment(key));
        self.client.invoke(Method::GET, &path, search).await
    }

    #[instrument(skip(self, comment), fields(issue_key = %key))]
    pub async fn add_comment(&self, key: &str, comment: &Comment) -> Result<Comment> {
        let path = format!("/rest/api/2/issue/{}/comment", segment(key));
        self.client.invoke(Method::POST, &path, Some(comment)).await
    }

    /// A page of the work logged on the issue.
    #[instrument(skip(self, search), fields(issue_key = %key))]
    pub async fn get_worklogs(&self, key: &str, search: Option<&SearchOptions>) -> Result<Worklog> {
        let path = format!("/rest/api/2/issue/{}/worklog", segment(key));
        self.client.invoke(Method::GET, &path, search).await
    }

    #[instrument(skip(self, record), fields(issue_key = %key))]
    pub async fn add_worklog(&self, key: &str, record: &WorklogRecord) -> Result<WorklogRecord> {
        let path = format!("/rest/api/2/issue/{}/worklog", segment(key));
        self.client.invoke(Method::POST, &path, Some(record)).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::test_support::{client_for, PASSWORD, USERNAME};
    use crate::api::types::{
        Comment, CreateIssueOptions, GetIssueOptions, GetProjectIssueTypeOptions, IssueFields,
        IssueType, IssueTypeLevel, Project, SearchOptions, WorklogRecord,
    };

    #[tokio::test]
    async fn test_get_issue() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/TEST-123"))
            .and(basic_auth(USERNAME, PASSWORD))
            .and(query_param("fields", "summary,status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "10000",
                "key": "TEST-123",
                "fields": {
                    "summary": "Test issue",
                    "status": {
                        "id": "10001",
                        "name": "In Progress",
                        "statusCategory": {"id": 4, "key": "indeterminate", "name": "In Progress"}
                    }
                }
            })))
            .mount(&mock_server)
            .await;

        let options = GetIssueOptions {
            fields: Some("summary,status".to_string()),
            ..Default::default()
        };
        let issue = client.issues().get("TEST-123", Some(&options)).await?;
        assert_eq!(issue.key.as_deref(), Some("TEST-123"));
        assert_eq!(issue.summary(), "Test issue");
        assert_eq!(issue.status_name(), Some("In Progress"));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_issue_not_found() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/NONEXISTENT-123"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "errorMessages": ["Issue does not exist or you do not have permission to see it."],
                "errors": {}
            })))
            .mount(&mock_server)
            .await;

        let err = client.issues().get("NONEXISTENT-123", None).await.unwrap_err();
        assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
        assert!(err.to_string().contains("Issue does not exist"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_issue_with_update_history() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue"))
            .and(query_param("updateHistory", "true"))
            .and(body_json(serde_json::json!({
                "fields": {
                    "project": {"key": "PROJ"},
                    "issuetype": {"name": "Bug"},
                    "summary": "Something broke"
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "10002",
                "key": "PROJ-7",
                "self": "https://company.atlassian.net/rest/api/2/issue/10002"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = CreateIssueOptions {
            update_history: true,
            ..CreateIssueOptions::with_fields(IssueFields {
                project: Some(Project::with_key("PROJ")),
                issue_type: Some(IssueType::named("Bug")),
                summary: Some("Something broke".to_string()),
                ..Default::default()
            })
        };
        let issue = client.issues().create(&options).await?;
        assert_eq!(issue.key.as_deref(), Some("PROJ-7"));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_fields() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("GET"))
            .and(path("/rest/api/2/field"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "summary", "name": "Summary", "custom": false, "schema": {"type": "string", "system": "summary"}},
                {"id": "customfield_10016", "name": "Story points", "custom": true}
            ])))
            .mount(&mock_server)
            .await;

        let fields = client.issues().get_fields().await?;
        assert_eq!(fields.len(), 2);
        assert!(fields[1].custom);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_project_issue_types_by_level() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("GET"))
            .and(path("/rest/api/2/issuetype/project"))
            .and(query_param("projectId", "10000"))
            .and(query_param("level", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "10003", "name": "Epic", "hierarchyLevel": 1}
            ])))
            .mount(&mock_server)
            .await;

        let options = GetProjectIssueTypeOptions {
            project_id: Some("10000".to_string()),
            level: Some(IssueTypeLevel::Epic),
        };
        let types = client.issues().get_project_issue_types(&options).await?;
        assert_eq!(types[0].level(), Some(IssueTypeLevel::Epic));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_create_metadata_for_project() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/createmeta/PROJ/issuetypes"))
            .and(query_param("maxResults", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "issueTypes": [{"id": "1", "name": "Bug"}],
                "startAt": 0,
                "total": 4,
                "maxResults": 1
            })))
            .mount(&mock_server)
            .await;

        let search = SearchOptions {
            max_results: Some(1),
            ..Default::default()
        };
        let page = client
            .issues()
            .get_create_metadata_for_project("PROJ", Some(&search))
            .await?;
        assert_eq!(page.total, 4);
        assert_eq!(page.issue_types[0].to_string(), "Bug");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_transitions() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/TEST-123/transitions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "transitions": [
                    {"id": "11", "name": "To Do", "to": {"id": "1", "name": "To Do"}},
                    {"id": "21", "name": "In Progress", "to": {"id": "3", "name": "In Progress"}},
                    {"id": "31", "name": "Done", "to": {"id": "5", "name": "Done"}}
                ]
            })))
            .mount(&mock_server)
            .await;

        let transitions = client.issues().get_transitions("TEST-123").await?;
        assert_eq!(transitions.len(), 3);
        assert_eq!(transitions[2].id, "31");
        assert_eq!(transitions[2].to.name, "Done");

        Ok(())
    }

    #[tokio::test]
    async fn test_do_transition() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue/TEST-123/transitions"))
            .and(body_json(serde_json::json!({"transition": {"id": "21"}})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        client.issues().do_transition("TEST-123", "21").await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_do_transition_invalid() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue/TEST-123/transitions"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "errorMessages": [],
                "errors": {"transition": "Transition id 'invalid' is not valid for this issue."}
            })))
            .mount(&mock_server)
            .await;

        let err = client
            .issues()
            .do_transition("TEST-123", "invalid")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"{"transition":"Transition id 'invalid' is not valid for this issue."}"#
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_add_and_get_comments() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue/TEST-123/comment"))
            .and(body_json(serde_json::json!({"body": "Ship it"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "10000",
                "body": "Ship it"
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/TEST-123/comment"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "startAt": 0,
                "maxResults": 50,
                "total": 1,
                "comments": [{"id": "10000", "body": "Ship it"}]
            })))
            .mount(&mock_server)
            .await;

        let created = client
            .issues()
            .add_comment("TEST-123", &Comment::new("Ship it"))
            .await?;
        assert_eq!(created.id.as_deref(), Some("10000"));

        let page = client.issues().get_comments("TEST-123", None).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.comments[0].body.as_deref(), Some("Ship it"));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_and_get_worklogs() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue/TEST-123/worklog"))
            .and(body_json(serde_json::json!({"timeSpent": "2h", "comment": "Debugging"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "100",
                "issueId": "10000",
                "timeSpent": "2h",
                "timeSpentSeconds": 7200
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/TEST-123/worklog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "startAt": 0,
                "maxResults": 20,
                "total": 1,
                "worklogs": [{"id": "100", "timeSpentSeconds": 7200}]
            })))
            .mount(&mock_server)
            .await;

        let record = client
            .issues()
            .add_worklog("TEST-123", &WorklogRecord::spent("2h").with_comment("Debugging"))
            .await?;
        assert_eq!(record.time_spent_seconds, Some(7200));

        let worklog = client.issues().get_worklogs("TEST-123", None).await?;
        assert_eq!(worklog.time_spent_seconds(), 7200);

        Ok(())
    }

    #[tokio::test]
    async fn test_issue_key_is_path_encoded() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        Mock::given(method("GET"))
            .and(path("/rest/api/2/issue/A%2FB"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"key": "A/B"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let issue = client.issues().get("A/B", None).await?;
        assert_eq!(issue.key.as_deref(), Some("A/B"));

        Ok(())
    }
}
