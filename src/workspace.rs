/// Workspace id resolution: storage first, the running time entry second

use crate::api::TimeTrackingApi;
use crate::current_entry::current_time_entry;
use crate::storage::{KeyValueStore, cached_workspace_id, save_workspace_id};
use crate::time_entry::WorkspaceId;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceResolution {
    pub workspace_id: Option<WorkspaceId>,
    /// Set when storage had no id; the UI shows a notice for it
    pub cache_miss: bool,
}

/// Resolve the workspace id.
///
/// A cached id is trusted as-is and no request is made. On a miss the running
/// entry's workspace is used and written back without waiting for the write.
/// With nothing cached and nothing running the id stays unresolved.
pub async fn resolve_workspace_id<S, A>(store: &S, api: &A) -> WorkspaceResolution
where
    S: KeyValueStore + ?Sized,
    A: TimeTrackingApi + ?Sized,
{
    match cached_workspace_id(store).await {
        Ok(Some(workspace_id)) => {
            return WorkspaceResolution {
                workspace_id: Some(workspace_id),
                cache_miss: false,
            };
        }
        Ok(None) => log::info!("Workspace id not found in storage"),
        Err(e) => log::warn!("Failed to read cached workspace id: {}", e),
    }

    let workspace_id = current_time_entry(store, api).await.map(|entry| entry.wid);
    match &workspace_id {
        Some(workspace_id) => save_workspace_id(store, workspace_id),
        None => log::warn!("No running time entry to take the workspace id from"),
    }

    WorkspaceResolution {
        workspace_id,
        cache_miss: true,
    }
}
