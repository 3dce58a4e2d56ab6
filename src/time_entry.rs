/// Data structures exchanged with the Toggl API
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workspace identifier, a number for Toggl but kept opaque
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkspaceId {
    Number(u64),
    Text(String),
}

impl WorkspaceId {
    /// Parse user input from the workspace field; `None` for blank input
    pub fn parse(input: &str) -> Option<WorkspaceId> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        Some(match input.parse::<u64>() {
            Ok(number) => WorkspaceId::Number(number),
            Err(_) => WorkspaceId::Text(input.to_string()),
        })
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceId::Number(number) => write!(f, "{}", number),
            WorkspaceId::Text(text) => f.write_str(text),
        }
    }
}

pub type ProjectId = u64;

/// A project inside one workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

/// A tracked interval as Toggl reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: u64,
    #[serde(default)]
    pub description: String,
    pub wid: WorkspaceId,
    #[serde(default)]
    pub pid: Option<ProjectId>,
}

/// Envelope Toggl wraps single entries in
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Option<T>,
}

/// Body of `POST /time_entries/start`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartTimeEntry {
    pub time_entry: NewTimeEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTimeEntry {
    pub description: String,
    pub created_with: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<ProjectId>,
}

impl StartTimeEntry {
    pub fn new(description: String, created_with: &str, pid: Option<ProjectId>) -> StartTimeEntry {
        StartTimeEntry {
            time_entry: NewTimeEntry {
                description,
                created_with: created_with.to_string(),
                pid,
            },
        }
    }
}
