use serde::{Deserialize, Serialize};

/// A showcased project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    /// Source repository URL, if public
    pub github: Option<String>,
    /// Live demo URL, if any
    pub demo: Option<String>,
    pub featured: bool,
}
