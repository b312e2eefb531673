use reqwest::Method;
use tracing::{debug, instrument};

use super::segment;
use crate::api::types::{GetProjectOptions, ListProjectOptions, Pagination, Project};
use crate::api::Client;
use crate::error::Result;

/// Project endpoints under `/rest/api/2/project`.
#[derive(Debug, Clone, Copy)]
pub struct ProjectsService<'a> {
    client: &'a Client,
}

impl<'a> ProjectsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A page of projects visible to the user.
    #[instrument(skip(self))]
    pub async fn list_projects(
        &self,
        options: Option<&ListProjectOptions>,
    ) -> Result<Pagination<Project>> {
        let page: Pagination<Project> = self
            .client
            .invoke(Method::GET, "/rest/api/2/project/search", options)
            .await?;
        debug!("Found {} projects (total: {})", page.values.len(), page.total);
        Ok(page)
    }

    /// A project by ID or key.
    #[instrument(skip(self, options), fields(project = %project_id_or_key))]
    pub async fn get(
        &self,
        project_id_or_key: &str,
        options: Option<&GetProjectOptions>,
    ) -> Result<Project> {
        let path = format!("/rest/api/2/project/{}", segment(project_id_or_key));
        self.client.invoke(Method::GET, &path, options).await
    }
}
