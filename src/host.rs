/// Browser-backed storage and tab access via the popup.js bridge

use crate::error::TimerError;
use crate::extractor::ActiveTab;
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn executeInActiveTab(code: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn clearStorage() -> Result<(), JsValue>;
}

/// chrome.storage.sync
pub struct ChromeStorage;

#[async_trait(?Send)]
impl KeyValueStore for ChromeStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, TimerError> {
        let value_js = getStorage(key).await.map_err(|e| TimerError::Storage(format!("{:?}", e)))?;

        if value_js.is_null() || value_js.is_undefined() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(value_js)
            .map(Some)
            .map_err(|e| TimerError::Storage(format!("Failed to parse {}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: Value) {
        // Plain objects instead of JS Maps, chrome.storage cannot hold Maps
        let value_js = match value.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
            Ok(value_js) => value_js,
            Err(e) => {
                log::warn!("Failed to serialize {}: {:?}", key, e);
                return;
            }
        };

        let key = key.to_string();
        spawn_local(async move {
            match setStorage(&key, value_js).await {
                Ok(()) => log::debug!("Saved {}", key),
                Err(e) => log::warn!("Failed to save {}: {:?}", key, e),
            }
        });
    }

    fn clear(&self) {
        spawn_local(async move {
            if let Err(e) = clearStorage().await {
                log::warn!("Failed to clear storage: {:?}", e);
            }
        });
    }
}

/// The active tab of the current window
pub struct ChromeTab;

#[async_trait(?Send)]
impl ActiveTab for ChromeTab {
    async fn url(&self) -> Result<String, TimerError> {
        getActiveTabUrl()
            .await
            .map_err(TimerError::host)?
            .as_string()
            .ok_or_else(|| TimerError::Host("tab url is not a string".to_string()))
    }

    async fn execute_script(&self, code: &str) -> Result<Vec<Value>, TimerError> {
        let results_js = executeInActiveTab(code).await.map_err(TimerError::host)?;

        if results_js.is_null() || results_js.is_undefined() {
            return Ok(Vec::new());
        }

        serde_wasm_bindgen::from_value(results_js)
            .map_err(|e| TimerError::Host(format!("Failed to parse script results: {:?}", e)))
    }
}
