/// Matches a project hint against the workspace's Toggl projects

use crate::api::TimeTrackingApi;
use crate::classifier::ProjectHint;
use crate::credential::Credential;
use crate::time_entry::{Project, ProjectId, WorkspaceId};

/// First project whose name equals `name` ignoring case, in list order
pub fn find_project<'a>(projects: &'a [Project], name: &str) -> Option<&'a Project> {
    let name = name.to_lowercase();
    projects.iter().find(|project| project.name.to_lowercase() == name)
}

/// Look the hinted project up in Toggl.
///
/// `None` covers every non-match: no hint, unknown workspace, failed request,
/// or no project with that name.
pub async fn resolve_project_id<A>(
    api: &A,
    hint: &ProjectHint,
    workspace_id: Option<&WorkspaceId>,
    credential: &Credential,
) -> Option<ProjectId>
where
    A: TimeTrackingApi + ?Sized,
{
    let project_name = hint.project_name.as_deref()?;
    let Some(workspace_id) = workspace_id else {
        log::warn!("No workspace id, cannot look up project {}", project_name);
        return None;
    };

    let projects = match api.workspace_projects(credential, workspace_id).await {
        Ok(projects) => projects,
        Err(e) => {
            log::warn!("Project lookup failed: {}", e);
            return None;
        }
    };

    match find_project(&projects, project_name) {
        Some(project) => {
            log::debug!("Matched project {} ({})", project.name, project.id);
            Some(project.id)
        }
        None => {
            log::info!("No project found in Toggl with name: {}", project_name);
            None
        }
    }
}
