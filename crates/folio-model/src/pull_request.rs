//! Pull Request model
//!
//! Open-source contributions shown on the portfolio.

use serde::{Deserialize, Serialize};

/// An open-source pull request authored by the portfolio owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// Stable identifier, unique within a portfolio
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Display name of the target repository (e.g. "tokio-rs/tokio")
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub pr_url: String,
    pub status: PrStatus,
    /// Free text, shown only when the card is expanded
    #[serde(default)]
    pub description: String,
    /// Display date, never parsed
    #[serde(default)]
    pub date: String,
}

impl PullRequest {
    /// Create a new PR with the given data
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: PrStatus) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            repo: String::new(),
            repo_url: String::new(),
            pr_url: String::new(),
            status,
            description: String::new(),
            date: String::new(),
        }
    }

    /// Set the repository display name and URL
    pub fn with_repo(mut self, repo: impl Into<String>, repo_url: impl Into<String>) -> Self {
        self.repo = repo.into();
        self.repo_url = repo_url.into();
        self
    }

    /// Set the PR URL
    pub fn with_pr_url(mut self, url: impl Into<String>) -> Self {
        self.pr_url = url.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the display date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

/// Lifecycle state of a pull request
///
/// Content files spell these in lowercase. Any other value is rejected when
/// the portfolio is loaded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PrStatus {
    Merged,
    Open,
    Closed,
}

impl PrStatus {
    /// Get the display label for this status
    pub fn label(&self) -> &'static str {
        match self {
            Self::Merged => "Merged",
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "pr-1",
            "title": "Fix panic on empty input",
            "repo": "serde-rs/json",
            "repoUrl": "https://github.com/serde-rs/json",
            "prUrl": "https://github.com/serde-rs/json/pull/1",
            "status": "merged",
            "description": "Guards against an empty slice.",
            "date": "Mar 2024"
        }"#;
        let pr: PullRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            pr,
            PullRequest::new("pr-1", "Fix panic on empty input", PrStatus::Merged)
                .with_repo("serde-rs/json", "https://github.com/serde-rs/json")
                .with_pr_url("https://github.com/serde-rs/json/pull/1")
                .with_description("Guards against an empty slice.")
                .with_date("Mar 2024")
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{ "id": "pr-1", "status": "draft" }"#;
        assert!(serde_json::from_str::<PullRequest>(json).is_err());
    }

    #[test]
    fn test_missing_status_is_rejected() {
        let json = r#"{ "id": "pr-1", "title": "No status" }"#;
        assert!(serde_json::from_str::<PullRequest>(json).is_err());
    }

    #[test]
    fn test_missing_text_fields_default_to_empty() {
        let json = r#"{ "id": "pr-1", "status": "open" }"#;
        let pr: PullRequest = serde_json::from_str(json).unwrap();
        assert_eq!(pr.title, "");
        assert_eq!(pr.description, "");
        assert_eq!(pr.date, "");
    }

    #[test]
    fn test_status_labels() {
        let labels: Vec<_> = PrStatus::iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Merged", "Open", "Closed"]);
        assert_eq!(PrStatus::Closed.to_string(), "closed");
    }
}
