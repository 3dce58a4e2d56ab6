/// URL classification: which project and page the active tab points at
use crate::config::Config;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static WIKI_PAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/display/(?P<space>[^/]+)(?:/(?P<title>[^/]*))?").expect("valid wiki pattern")
});

static TRACKER_PROJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/projects/(?P<key>[^/]+)").expect("valid project pattern")
});

static TRACKER_ISSUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/browse/(?P<key>[^/-]+)(?:-[^/]*)?(?:/|$)").expect("valid issue pattern")
});

static DEFAULT_CLASSIFIER: LazyLock<UrlClassifier> =
    LazyLock::new(|| UrlClassifier::new(&Config::default()));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageKind {
    WikiPage,
    TrackerProject,
    TrackerIssue,
}

/// What a URL was recognised as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMatch {
    /// `/display/<space>/<title>` on the wiki host
    WikiPage { space: String, title: String },
    /// `/projects/<key>` on the issue tracker
    TrackerProject { key: String },
    /// `/browse/<key>-<number>` on the issue tracker
    TrackerIssue { key: String },
    Unclassified,
}

/// Project name inferred from a URL, not yet confirmed against Toggl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectHint {
    pub project_name: Option<String>,
    pub page: PageMatch,
}

impl ProjectHint {
    pub fn unclassified() -> ProjectHint {
        ProjectHint {
            project_name: None,
            page: PageMatch::Unclassified,
        }
    }

    fn from_page(page: PageMatch) -> ProjectHint {
        let project_name = match &page {
            PageMatch::WikiPage { space, .. } => Some(space.clone()),
            PageMatch::TrackerProject { key } | PageMatch::TrackerIssue { key } => Some(key.clone()),
            PageMatch::Unclassified => None,
        };
        ProjectHint { project_name, page }
    }

    /// Only issue pages carry a summary worth reading from the DOM
    pub fn wants_summary(&self) -> bool {
        matches!(self.page, PageMatch::TrackerIssue { .. })
    }
}

struct PagePattern {
    kind: PageKind,
    host: String,
    path: &'static Regex,
}

/// Ordered pattern table; the first pattern whose host and path match wins.
pub struct UrlClassifier {
    patterns: Vec<PagePattern>,
}

impl UrlClassifier {
    pub fn new(config: &Config) -> UrlClassifier {
        let wiki_host = config.wiki_host.to_lowercase();
        let tracker_host = config.tracker_host.to_lowercase();

        UrlClassifier {
            patterns: vec![
                PagePattern { kind: PageKind::WikiPage, host: wiki_host, path: &WIKI_PAGE },
                PagePattern { kind: PageKind::TrackerProject, host: tracker_host.clone(), path: &TRACKER_PROJECT },
                PagePattern { kind: PageKind::TrackerIssue, host: tracker_host, path: &TRACKER_ISSUE },
            ],
        }
    }

    /// Classify a URL. Never fails: anything unparseable is `Unclassified`.
    ///
    /// Examples:
    /// - https://confluence.fluidda.com/display/TEAM/Page+Title → project "TEAM"
    /// - https://jira.fluidda.com/projects/ABC/summary → project "ABC"
    /// - https://jira.fluidda.com/browse/ABC-123 → project "ABC"
    pub fn classify(&self, url: &str) -> ProjectHint {
        let Ok(parsed) = Url::parse(url.trim()) else {
            return ProjectHint::unclassified();
        };
        if parsed.scheme() != "https" {
            return ProjectHint::unclassified();
        }
        let Some(host) = parsed.host_str() else {
            return ProjectHint::unclassified();
        };

        self.patterns
            .iter()
            .filter(|pattern| pattern.host == host)
            .find_map(|pattern| {
                let captures = pattern.path.captures(parsed.path())?;
                let group = |name: &str| captures.name(name).map_or(String::new(), |m| m.as_str().to_string());

                Some(match pattern.kind {
                    PageKind::WikiPage => PageMatch::WikiPage {
                        space: group("space"),
                        title: group("title"),
                    },
                    PageKind::TrackerProject => PageMatch::TrackerProject { key: group("key") },
                    PageKind::TrackerIssue => PageMatch::TrackerIssue { key: group("key") },
                })
            })
            .map(ProjectHint::from_page)
            .unwrap_or_else(ProjectHint::unclassified)
    }
}

/// Classify against the default hosts
pub fn classify(url: &str) -> ProjectHint {
    DEFAULT_CLASSIFIER.classify(url)
}
