//! Aggregate portfolio content

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    BlogPost, Education, Experience, ModelError, Profile, Project, PullRequest, Skill, Social,
};

/// All content displayed by the portfolio
///
/// Constructed once at startup and handed to the display layer by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioData {
    /// Name of the theme preset the site should start with
    pub theme: String,
    /// GitHub user handle
    pub github: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub illustration: Option<bool>,
    pub profile: Profile,
    pub roles: Vec<String>,
    pub socials: Vec<Social>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub pull_requests: Vec<PullRequest>,
    pub blogs: Vec<BlogPost>,
    pub quotes: Vec<String>,
}

impl PortfolioData {
    /// Parse portfolio content from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a portfolio JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Pull request ids that occur more than once, in order of first repetition
    pub fn duplicate_pull_request_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for pr in &self.pull_requests {
            if !seen.insert(pr.id.as_str()) && !duplicates.contains(&pr.id.as_str()) {
                duplicates.push(pr.id.as_str());
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlogPlatform, PrStatus};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "theme": "violet",
        "github": "octocat",
        "illustration": true,
        "profile": {
            "name": "Mona Lisa Octocat",
            "handle": "octocat",
            "bio": "Builds things.",
            "resumeUrl": "https://example.com/cv.pdf"
        },
        "roles": ["Engineer"],
        "experience": [
            { "company": "Acme", "role": "Dev", "type": "Full-time", "details": ["Shipped"] }
        ],
        "education": [
            { "institution": "Uni", "degree": "BSc", "grade": "1st" }
        ],
        "projects": [
            { "id": "a", "title": "A", "featured": true, "github": null },
            { "id": "b", "title": "B", "featured": false, "demo": "https://b.example" }
        ],
        "pullRequests": [
            { "id": "p1", "title": "One", "status": "merged" },
            { "id": "p2", "title": "Two", "status": "open" }
        ],
        "blogs": [
            { "id": "b1", "title": "Post", "readingTime": "5 min", "platform": "dev" }
        ],
        "quotes": ["Ship it."]
    }"#;

    #[test]
    fn test_parse_sample() {
        let data = PortfolioData::from_json_str(SAMPLE).unwrap();
        assert_eq!(data.theme, "violet");
        assert_eq!(data.illustration, Some(true));
        assert_eq!(data.profile.resume_url, "https://example.com/cv.pdf");
        assert_eq!(data.experience[0].kind, "Full-time");
        assert_eq!(data.education[0].grade.as_deref(), Some("1st"));
        assert_eq!(data.education[0].details, None);
        assert!(data.projects[0].featured);
        assert_eq!(data.projects[1].demo.as_deref(), Some("https://b.example"));
        assert_eq!(data.pull_requests.len(), 2);
        assert_eq!(data.pull_requests[1].status, PrStatus::Open);
        assert_eq!(data.blogs[0].platform, Some(BlogPlatform::Dev));
        assert_eq!(data.blogs[0].reading_time.as_deref(), Some("5 min"));
        assert!(data.socials.is_empty());
    }

    #[test]
    fn test_absent_pull_requests_default_to_empty() {
        let data = PortfolioData::from_json_str(r#"{ "github": "octocat" }"#).unwrap();
        assert!(data.pull_requests.is_empty());
    }

    #[test]
    fn test_invalid_status_fails_to_load() {
        let json = r#"{ "pullRequests": [ { "id": "p1", "status": "abandoned" } ] }"#;
        let err = PortfolioData::from_json_str(json).unwrap_err();
        assert!(matches!(err, ModelError::Parse { .. }));
    }

    #[test]
    fn test_duplicate_pull_request_ids() {
        let data = PortfolioData {
            pull_requests: ["p1", "p2", "p1", "p3", "p1", "p2"]
                .into_iter()
                .map(|id| PullRequest::new(id, "t", PrStatus::Open))
                .collect(),
            ..Default::default()
        };
        assert_eq!(data.duplicate_pull_request_ids(), vec!["p1", "p2"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let data = PortfolioData::load(file.path()).unwrap();
        assert_eq!(data.github, "octocat");
    }

    #[test]
    fn test_load_missing_file() {
        let err = PortfolioData::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }

    #[test]
    fn test_demo_portfolio_loads() {
        let data = PortfolioData::from_json_str(include_str!("../../../demos/portfolio.json")).unwrap();
        assert_eq!(data.pull_requests.len(), 6);
        assert!(data.duplicate_pull_request_ids().is_empty());
    }
}
