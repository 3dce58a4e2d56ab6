/// Start-timer use case: classify the tab, look up project and description, start the entry

use crate::api::TimeTrackingApi;
use crate::classifier::{ProjectHint, UrlClassifier};
use crate::config::Config;
use crate::credential::Credential;
use crate::current_entry::current_time_entry;
use crate::description::{TaskDescription, build_description};
use crate::error::TimerError;
use crate::extractor::{ActiveTab, extract_summary};
use crate::project::resolve_project_id;
use crate::storage::KeyValueStore;
use crate::time_entry::{ProjectId, StartTimeEntry, TimeEntry};
use crate::workspace::{WorkspaceResolution, resolve_workspace_id};

/// Borrowed collaborators for one popup activation
pub struct TimerOrchestrator<'a, S: ?Sized, A: ?Sized, T: ?Sized> {
    store: &'a S,
    api: &'a A,
    tab: &'a T,
    config: &'a Config,
    classifier: UrlClassifier,
}

impl<'a, S, A, T> TimerOrchestrator<'a, S, A, T>
where
    S: KeyValueStore + ?Sized,
    A: TimeTrackingApi + ?Sized,
    T: ActiveTab + ?Sized,
{
    pub fn new(store: &'a S, api: &'a A, tab: &'a T, config: &'a Config) -> Self {
        TimerOrchestrator {
            store,
            api,
            tab,
            config,
            classifier: UrlClassifier::new(config),
        }
    }

    pub async fn current_time_entry(&self) -> Option<TimeEntry> {
        current_time_entry(self.store, self.api).await
    }

    pub async fn resolve_workspace_id(&self) -> WorkspaceResolution {
        resolve_workspace_id(self.store, self.api).await
    }

    /// Classify the active tab; an unreadable URL counts as unclassified
    pub async fn page_hint(&self) -> ProjectHint {
        match self.tab.url().await {
            Ok(url) => {
                let hint = self.classifier.classify(&url);
                log::debug!("Classified {} as {:?}", url, hint.page);
                hint
            }
            Err(e) => {
                log::warn!("Failed to read active tab url: {}", e);
                ProjectHint::unclassified()
            }
        }
    }

    pub async fn task_description(&self, hint: &ProjectHint) -> TaskDescription {
        let summary = if hint.wants_summary() {
            extract_summary(self.tab, &self.config.summary_element_id).await
        } else {
            None
        };
        build_description(hint, summary.as_deref())
    }

    /// Credential and workspace are resolved here again, independently of the caller
    pub async fn look_up_project(&self, hint: &ProjectHint) -> Option<ProjectId> {
        let (credential, workspace) =
            futures::join!(Credential::load(self.store), self.resolve_workspace_id());

        let credential = match credential {
            Ok(credential) => credential,
            Err(e) => {
                log::warn!("Skipping project lookup: {}", e);
                return None;
            }
        };

        resolve_project_id(self.api, hint, workspace.workspace_id.as_ref(), &credential).await
    }

    /// Start a Toggl entry for the active tab.
    ///
    /// Credential, project and description are requested together; the start
    /// request goes out once all three are in. Only a missing token or a failed
    /// start request is an error. A missing project or description is not.
    pub async fn start_timer(&self) -> Result<TimeEntry, TimerError> {
        let hint = self.page_hint().await;

        let (credential, project_id, description) = futures::join!(
            Credential::load(self.store),
            self.look_up_project(&hint),
            self.task_description(&hint),
        );
        let credential = credential?;

        let request = StartTimeEntry::new(description.text, &self.config.created_with, project_id);
        log::debug!("Starting time entry: {:?}", request);

        match self.api.start_time_entry(&credential, &request).await {
            Ok(entry) => {
                log::info!("Timer started: {} ({})", entry.description, entry.id);
                Ok(entry)
            }
            Err(e) => {
                log::warn!("Start time entry failed: {}", e);
                Err(e)
            }
        }
    }
}
