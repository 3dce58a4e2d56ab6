/// Toggl authorization built from the stored API token

use crate::error::TimerError;
use crate::storage::{KeyValueStore, TOKEN_KEY};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Precomputed `Authorization` header value
#[derive(Clone, PartialEq)]
pub struct Credential {
    header: String,
}

impl Credential {
    /// Toggl takes the API token as the basic-auth user with the literal password `api_token`
    pub fn from_token(token: &str) -> Result<Credential, TimerError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TimerError::MissingCredential);
        }

        let encoded = STANDARD.encode(format!("{}:api_token", token));
        Ok(Credential {
            header: format!("Basic {}", encoded),
        })
    }

    pub async fn load<S>(store: &S) -> Result<Credential, TimerError>
    where
        S: KeyValueStore + ?Sized,
    {
        match store.get(TOKEN_KEY).await? {
            Some(serde_json::Value::String(token)) => Credential::from_token(&token),
            _ => Err(TimerError::MissingCredential),
        }
    }

    pub fn header_value(&self) -> &str {
        &self.header
    }
}

// Keep the token out of logs
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(..)")
    }
}
