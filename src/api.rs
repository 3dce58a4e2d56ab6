/// Toggl v8 REST API

use crate::credential::Credential;
use crate::error::TimerError;
use crate::time_entry::{DataEnvelope, Project, StartTimeEntry, TimeEntry, WorkspaceId};
use async_trait::async_trait;
use url::Url;

/// Remote calls the popup makes
#[async_trait(?Send)]
pub trait TimeTrackingApi {
    async fn workspace_projects(
        &self,
        credential: &Credential,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Project>, TimerError>;

    async fn current_time_entry(&self, credential: &Credential) -> Result<Option<TimeEntry>, TimerError>;

    async fn start_time_entry(
        &self,
        credential: &Credential,
        request: &StartTimeEntry,
    ) -> Result<TimeEntry, TimerError>;
}

pub struct TogglClient {
    client: reqwest::Client,
    base_url: String,
}

impl TogglClient {
    pub fn new(base_url: &str) -> Self {
        TogglClient {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Append path segments to the base url, each percent-encoded as one segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TimerError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| TimerError::Http(format!("Invalid API base url {}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| TimerError::Http(format!("API base url {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

#[async_trait(?Send)]
impl TimeTrackingApi for TogglClient {
    async fn workspace_projects(
        &self,
        credential: &Credential,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Project>, TimerError> {
        let workspace = workspace_id.to_string();
        let url = self.endpoint(&["workspaces", &workspace, "projects"])?;

        let resp = self
            .client
            .get(url)
            .header("Authorization", credential.header_value())
            .send()
            .await?
            .error_for_status()?;

        // Toggl answers `null` for a workspace without projects
        let projects: Option<Vec<Project>> = resp.json().await?;
        let projects = projects.unwrap_or_default();
        log::debug!("Workspace {} has {} projects", workspace_id, projects.len());
        Ok(projects)
    }

    async fn current_time_entry(&self, credential: &Credential) -> Result<Option<TimeEntry>, TimerError> {
        let resp = self
            .client
            .get(self.endpoint(&["time_entries", "current"])?)
            .header("Authorization", credential.header_value())
            .send()
            .await?
            .error_for_status()?;

        let envelope: DataEnvelope<TimeEntry> = resp.json().await?;
        Ok(envelope.data)
    }

    async fn start_time_entry(
        &self,
        credential: &Credential,
        request: &StartTimeEntry,
    ) -> Result<TimeEntry, TimerError> {
        let resp = self
            .client
            .post(self.endpoint(&["time_entries", "start"])?)
            .header("Authorization", credential.header_value())
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let envelope: DataEnvelope<TimeEntry> = resp.json().await?;
        envelope
            .data
            .ok_or_else(|| TimerError::Decode("start response missing data".to_string()))
    }
}
