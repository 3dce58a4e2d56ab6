/// Error type shared by the timer components
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimerError {
    #[error("No API token saved, add your Toggl API token first")]
    MissingCredential,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Browser error: {0}")]
    Host(String),

    #[error("Request failed: {0}")]
    Http(String),

    #[error("Toggl answered with status {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl TimerError {
    /// Wrap a rejected promise from the JS bridge
    pub fn host(value: JsValue) -> Self {
        TimerError::Host(format!("{:?}", value))
    }
}

impl From<reqwest::Error> for TimerError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TimerError::Status(status.as_u16()),
            None if err.is_decode() => TimerError::Decode(err.to_string()),
            None => TimerError::Http(err.to_string()),
        }
    }
}
