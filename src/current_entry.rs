/// Reports the currently running Toggl time entry

use crate::api::TimeTrackingApi;
use crate::credential::Credential;
use crate::storage::KeyValueStore;
use crate::time_entry::TimeEntry;

/// The running entry, or `None` when nothing runs or the lookup failed
pub async fn current_time_entry<S, A>(store: &S, api: &A) -> Option<TimeEntry>
where
    S: KeyValueStore + ?Sized,
    A: TimeTrackingApi + ?Sized,
{
    let credential = match Credential::load(store).await {
        Ok(credential) => credential,
        Err(e) => {
            log::warn!("Cannot look up current time entry: {}", e);
            return None;
        }
    };

    match api.current_time_entry(&credential).await {
        Ok(entry) => {
            log::debug!("Current time entry: {:?}", entry);
            entry
        }
        Err(e) => {
            log::warn!("Current time entry lookup failed: {}", e);
            None
        }
    }
}
