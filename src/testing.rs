/// In-memory stand-ins for browser storage, the active tab and Toggl

use crate::api::TimeTrackingApi;
use crate::credential::Credential;
use crate::error::TimerError;
use crate::extractor::ActiveTab;
use crate::storage::KeyValueStore;
use crate::time_entry::{Project, StartTimeEntry, TimeEntry, WorkspaceId};
use async_trait::async_trait;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub fn project(id: u64, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
    }
}

pub fn running_entry(wid: u64) -> TimeEntry {
    TimeEntry {
        id: 100,
        description: "Running".to_string(),
        wid: WorkspaceId::Number(wid),
        pid: None,
    }
}

pub struct MemoryStore {
    values: RefCell<HashMap<String, Value>>,
    fail_reads: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            values: RefCell::new(HashMap::new()),
            fail_reads: false,
        }
    }

    pub fn with(entries: &[(&str, Value)]) -> Self {
        let store = MemoryStore::new();
        for (key, value) in entries {
            store.values.borrow_mut().insert(key.to_string(), value.clone());
        }
        store
    }

    pub fn failing() -> Self {
        MemoryStore {
            values: RefCell::new(HashMap::new()),
            fail_reads: true,
        }
    }

    pub fn value(&self, key: &str) -> Option<Value> {
        self.values.borrow().get(key).cloned()
    }
}

#[async_trait(?Send)]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, TimerError> {
        if self.fail_reads {
            return Err(TimerError::Storage("storage unavailable".to_string()));
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: Value) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }

    fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

pub struct FakeTab {
    url: Option<String>,
    script_result: Option<Vec<Value>>,
    scripts_run: Cell<usize>,
}

impl FakeTab {
    /// A tab whose scripts fail until `with_script_result` is set
    pub fn new(url: &str) -> Self {
        FakeTab {
            url: Some(url.to_string()),
            script_result: None,
            scripts_run: Cell::new(0),
        }
    }

    pub fn unavailable() -> Self {
        FakeTab {
            url: None,
            script_result: None,
            scripts_run: Cell::new(0),
        }
    }

    pub fn with_script_result(mut self, result: Vec<Value>) -> Self {
        self.script_result = Some(result);
        self
    }

    pub fn scripts_run(&self) -> usize {
        self.scripts_run.get()
    }
}

#[async_trait(?Send)]
impl ActiveTab for FakeTab {
    async fn url(&self) -> Result<String, TimerError> {
        self.url
            .clone()
            .ok_or_else(|| TimerError::Host("no active tab".to_string()))
    }

    async fn execute_script(&self, _code: &str) -> Result<Vec<Value>, TimerError> {
        self.scripts_run.set(self.scripts_run.get() + 1);
        self.script_result
            .clone()
            .ok_or_else(|| TimerError::Host("cannot access page".to_string()))
    }
}

/// Scripted Toggl API recording the calls it receives
pub struct FakeApi {
    projects: Vec<Project>,
    current: Option<TimeEntry>,
    fail: bool,
    calls: RefCell<Vec<&'static str>>,
    started: RefCell<Vec<StartTimeEntry>>,
}

impl FakeApi {
    pub fn new() -> Self {
        FakeApi {
            projects: Vec::new(),
            current: None,
            fail: false,
            calls: RefCell::new(Vec::new()),
            started: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        FakeApi {
            fail: true,
            ..FakeApi::new()
        }
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_current(mut self, entry: TimeEntry) -> Self {
        self.current = Some(entry);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn started(&self) -> Vec<StartTimeEntry> {
        self.started.borrow().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), TimerError> {
        self.calls.borrow_mut().push(call);
        if self.fail {
            Err(TimerError::Http("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl TimeTrackingApi for FakeApi {
    async fn workspace_projects(
        &self,
        _credential: &Credential,
        _workspace_id: &WorkspaceId,
    ) -> Result<Vec<Project>, TimerError> {
        self.record("workspace_projects")?;
        Ok(self.projects.clone())
    }

    async fn current_time_entry(&self, _credential: &Credential) -> Result<Option<TimeEntry>, TimerError> {
        self.record("current_time_entry")?;
        Ok(self.current.clone())
    }

    async fn start_time_entry(
        &self,
        _credential: &Credential,
        request: &StartTimeEntry,
    ) -> Result<TimeEntry, TimerError> {
        self.record("start_time_entry")?;
        self.started.borrow_mut().push(request.clone());

        Ok(TimeEntry {
            id: 200,
            description: request.time_entry.description.clone(),
            wid: WorkspaceId::Number(42),
            pid: request.time_entry.pid,
        })
    }
}
