//! # Client actions: project name check and project creation
//!
//! Thin wrappers the editor calls when a user saves a project. Both POST JSON
//! to the viewer's API and hand back whatever the server answered.
//!
//! | Function | Endpoint | Body | Returns |
//! |----------|----------|------|---------|
//! | [`ProjectClient::check_user`] | `POST /api/project/check` | the raw name as a JSON string, e.g. `"foo"` | the response JSON, untouched |
//! | [`ProjectClient::create_project`] | `POST /api/project/create` | `{ "project": { "markup", "projectName" } }` | the response's `project` field |
//!
//! The name sent to `create` has whitespace and hyphens stripped so the
//! resulting `"<id>-<name>"` page identifier stays unambiguous. `check` sends
//! the name exactly as given. No retries; transport and decode failures come
//! back as [`ClientError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::slug::sanitize_project_name;
use store::{Project, ViewerConfig};
use thiserror::Error;
use tracing::debug;

pub const CHECK_PATH: &str = "/api/project/check";
pub const CREATE_PATH: &str = "/api/project/create";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Payload of a create request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub markup: String,
    pub project_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub project: NewProject,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectResponse {
    pub project: Project,
}

impl CreateProjectRequest {
    pub fn new(markup: &str, project_name: &str) -> Self {
        Self {
            project: NewProject {
                markup: markup.to_string(),
                project_name: sanitize_project_name(project_name),
            },
        }
    }
}

/// HTTP client for the project endpoints.
#[derive(Clone, Debug)]
pub struct ProjectClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProjectClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Ask the server about a project name. The response is returned as-is.
    pub async fn check_user(&self, name: &str) -> Result<Value, ClientError> {
        debug!(name, "checking project name");

        let response = self
            .http
            .post(self.url(CHECK_PATH))
            .json(name)
            .send()
            .await?;

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Create a project and return the record the server stored.
    pub async fn create_project(
        &self,
        markup: &str,
        project_name: &str,
    ) -> Result<Project, ClientError> {
        let request = CreateProjectRequest::new(markup, project_name);
        debug!(project_name = %request.project.project_name, "creating project");

        let response = self
            .http
            .post(self.url(CREATE_PATH))
            .json(&request)
            .send()
            .await?;

        let text = response.text().await?;
        let CreateProjectResponse { project } = serde_json::from_str(&text)?;
        Ok(project)
    }
}
