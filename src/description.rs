/// Builds the Toggl time entry description for a classified page

use crate::classifier::{PageMatch, ProjectHint};

/// Description text; empty when nothing useful was found
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDescription {
    pub text: String,
}

/// Combine the hint with an already fetched summary.
///
/// - wiki page: the page title segment, summary ignored
/// - issue page: `<key>` or `<key>: <summary>`
/// - anything else: empty
pub fn build_description(hint: &ProjectHint, summary: Option<&str>) -> TaskDescription {
    let text = match &hint.page {
        PageMatch::WikiPage { title, .. } => title.clone(),
        PageMatch::TrackerIssue { key } => match summary {
            Some(summary) if !summary.is_empty() => format!("{}: {}", key, summary),
            _ => key.clone(),
        },
        PageMatch::TrackerProject { .. } | PageMatch::Unclassified => String::new(),
    };

    TaskDescription { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn test_issue_with_summary() {
        let hint = classify("https://jira.fluidda.com/browse/ABC-123");
        assert_eq!(build_description(&hint, Some("Fix bug")).text, "ABC: Fix bug");
    }

    #[test]
    fn test_issue_without_summary() {
        let hint = classify("https://jira.fluidda.com/browse/ABC-123");
        assert_eq!(build_description(&hint, None).text, "ABC");
        assert_eq!(build_description(&hint, Some("")).text, "ABC");
    }

    #[test]
    fn test_wiki_page_uses_title() {
        let hint = classify("https://confluence.fluidda.com/display/TEAM/Page+Title/extra");
        assert_eq!(build_description(&hint, Some("ignored")).text, "Page+Title");
    }

    #[test]
    fn test_unclassified_is_empty() {
        let hint = classify("https://example.com/browse/ABC-1");
        assert_eq!(build_description(&hint, None).text, "");
        assert_eq!(build_description(&hint, Some("Fix bug")).text, "");
        assert_eq!(build_description(&ProjectHint::unclassified(), Some("x")), TaskDescription::default());
    }

    #[test]
    fn test_project_page_is_empty() {
        let hint = classify("https://jira.fluidda.com/projects/ABC");
        assert_eq!(build_description(&hint, Some("Fix bug")).text, "");
    }
}
