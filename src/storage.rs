/// Key-value storage the popup keeps its token, workspace id and config in

use crate::error::TimerError;
use crate::time_entry::WorkspaceId;
use async_trait::async_trait;
use serde_json::Value;

pub const TOKEN_KEY: &str = "token";
pub const WORKSPACE_KEY: &str = "wid";
pub const CONFIG_KEY: &str = "config";

/// Flat key-value store with fire-and-forget writes.
///
/// Reads suspend once. Writes and clears return immediately; an implementation
/// reports its own failures through the log instead of to the caller.
#[async_trait(?Send)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, TimerError>;

    fn set(&self, key: &str, value: Value);

    fn clear(&self);
}

/// Read the cached workspace id, `Ok(None)` when nothing usable is stored
pub async fn cached_workspace_id<S>(store: &S) -> Result<Option<WorkspaceId>, TimerError>
where
    S: KeyValueStore + ?Sized,
{
    let value = store.get(WORKSPACE_KEY).await?;
    Ok(value.and_then(|value| serde_json::from_value::<WorkspaceId>(value).ok()))
}

pub fn save_workspace_id<S>(store: &S, workspace_id: &WorkspaceId)
where
    S: KeyValueStore + ?Sized,
{
    match serde_json::to_value(workspace_id) {
        Ok(value) => store.set(WORKSPACE_KEY, value),
        Err(e) => log::warn!("Failed to serialize workspace id: {}", e),
    }
}

pub fn save_token<S>(store: &S, token: &str)
where
    S: KeyValueStore + ?Sized,
{
    store.set(TOKEN_KEY, Value::String(token.trim().to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_cached_workspace_id_missing() {
        let store = MemoryStore::new();
        assert_eq!(block_on(cached_workspace_id(&store)), Ok(None));
    }

    #[test]
    fn test_cached_workspace_id_number() {
        let store = MemoryStore::with(&[(WORKSPACE_KEY, json!(42))]);
        assert_eq!(block_on(cached_workspace_id(&store)), Ok(Some(WorkspaceId::Number(42))));
    }

    #[test]
    fn test_cached_workspace_id_ignores_null() {
        let store = MemoryStore::with(&[(WORKSPACE_KEY, Value::Null)]);
        assert_eq!(block_on(cached_workspace_id(&store)), Ok(None));
    }

    #[test]
    fn test_read_failure_is_reported() {
        let store = MemoryStore::failing();
        assert!(matches!(block_on(cached_workspace_id(&store)), Err(TimerError::Storage(_))));
    }

    #[test]
    fn test_save_workspace_id_and_token() {
        let store = MemoryStore::new();

        save_workspace_id(&store, &WorkspaceId::Number(7));
        save_token(&store, "  abc123 ");

        assert_eq!(store.value(WORKSPACE_KEY), Some(json!(7)));
        assert_eq!(store.value(TOKEN_KEY), Some(json!("abc123")));
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::with(&[(TOKEN_KEY, json!("abc")), (WORKSPACE_KEY, json!(1))]);
        store.clear();
        assert_eq!(store.value(TOKEN_KEY), None);
        assert_eq!(store.value(WORKSPACE_KEY), None);
    }
}
