//! Look up the current user and the first page of projects.
//!
//! ```text
//! JIRA_URL=https://company.atlassian.net \
//! JIRA_USERNAME=user@example.com \
//! JIRA_PASSWORD=api-token \
//! cargo run --example basic_auth
//! ```
//!
//! Without `JIRA_PASSWORD` the password is read from the OS keyring.

use anyhow::Context;
use jira_client::api::types::{ListProjectOptions, SearchOptions};
use jira_client::{logging, BasicAuth, Client};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;

    let url = std::env::var("JIRA_URL").context("JIRA_URL is not set")?;
    let username = std::env::var("JIRA_USERNAME").context("JIRA_USERNAME is not set")?;
    let credential = match std::env::var("JIRA_PASSWORD") {
        Ok(password) => BasicAuth::new(url, username, password),
        Err(_) => BasicAuth::from_keyring(&url, &username)?,
    };

    let client = Client::with_credential(credential)?;

    let me = client.users().get_current_user().await.map_err(|e| {
        eprintln!("{}", e.user_message());
        if let Some(action) = e.suggested_action() {
            eprintln!("{}", action);
        }
        e
    })?;
    println!("current user: {} ({})", me, me.account_id.as_deref().unwrap_or("-"));

    let options = ListProjectOptions {
        search: SearchOptions::page(0, 10),
        order_by: Some("key".to_string()),
        ..Default::default()
    };
    let projects = client.projects().list_projects(Some(&options)).await?;
    println!("{} of {} projects:", projects.values.len(), projects.total);
    for project in &projects.values {
        println!("  {}", project);
    }

    Ok(())
}
