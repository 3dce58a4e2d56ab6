/// Reads the issue summary out of the active tab's DOM

use crate::error::TimerError;
use async_trait::async_trait;
use serde_json::Value;

/// The browser tab the popup was opened over
#[async_trait(?Send)]
pub trait ActiveTab {
    async fn url(&self) -> Result<String, TimerError>;

    /// Run a script in the page; one result per frame
    async fn execute_script(&self, code: &str) -> Result<Vec<Value>, TimerError>;
}

/// Script returning the element's text, or null when the element is absent
pub fn summary_script(element_id: &str) -> String {
    // serde_json gives a correctly escaped JS string literal
    let id = Value::String(element_id.to_string());
    format!(
        "(function () {{ var el = document.getElementById({}); return el ? el.innerText : null; }})();",
        id
    )
}

/// Fetch the summary text. Failures are logged and read as "no summary".
pub async fn extract_summary<T>(tab: &T, element_id: &str) -> Option<String>
where
    T: ActiveTab + ?Sized,
{
    let results = match tab.execute_script(&summary_script(element_id)).await {
        Ok(results) => results,
        Err(e) => {
            log::warn!("Failed to read summary from tab: {}", e);
            return None;
        }
    };

    let summary = results
        .into_iter()
        .next()
        .and_then(|value| value.as_str().map(|s| s.trim().to_string()))
        .filter(|s| !s.is_empty());

    log::debug!("Tab summary: {:?}", summary);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTab;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_summary_script_escapes_id() {
        let script = summary_script("summary-val");
        assert!(script.contains("getElementById(\"summary-val\")"));

        let script = summary_script("a\"b");
        assert!(script.contains(r#"getElementById("a\"b")"#));
    }

    #[test]
    fn test_extract_summary() {
        let tab = FakeTab::new("https://jira.fluidda.com/browse/ABC-123").with_script_result(vec![json!(" Fix bug\n")]);
        assert_eq!(block_on(extract_summary(&tab, "summary-val")), Some("Fix bug".to_string()));
    }

    #[test]
    fn test_missing_element() {
        let tab = FakeTab::new("https://jira.fluidda.com/browse/ABC-123").with_script_result(vec![Value::Null]);
        assert_eq!(block_on(extract_summary(&tab, "summary-val")), None);

        let tab = FakeTab::new("https://jira.fluidda.com/browse/ABC-123").with_script_result(vec![]);
        assert_eq!(block_on(extract_summary(&tab, "summary-val")), None);
    }

    #[test]
    fn test_script_failure_is_absorbed() {
        let tab = FakeTab::new("https://jira.fluidda.com/browse/ABC-123");
        assert_eq!(block_on(extract_summary(&tab, "summary-val")), None);
    }
}
