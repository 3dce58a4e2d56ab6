//! Popup configuration.
//!
//! Defaults cover the Fluidda Confluence/Jira hosts and the public Toggl v8 API.
//! An optional JSON object stored under the `config` key overrides any subset
//! of the fields.

use crate::storage::{CONFIG_KEY, KeyValueStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub created_with: String,
    pub wiki_host: String,
    pub tracker_host: String,
    pub summary_element_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: "https://www.toggl.com/api/v8".to_string(),
            created_with: "chrome ext".to_string(),
            wiki_host: "confluence.fluidda.com".to_string(),
            tracker_host: "jira.fluidda.com".to_string(),
            summary_element_id: "summary-val".to_string(),
        }
    }
}

impl Config {
    /// Load overrides from storage, falling back to defaults on any problem
    pub async fn load<S>(store: &S) -> Config
    where
        S: KeyValueStore + ?Sized,
    {
        match store.get(CONFIG_KEY).await {
            Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed config: {}", e);
                Config::default()
            }),
            Ok(None) => Config::default(),
            Err(e) => {
                log::warn!("Failed to read config, using defaults: {}", e);
                Config::default()
            }
        }
    }
}
