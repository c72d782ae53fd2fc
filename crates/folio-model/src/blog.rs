//! Blog posts published elsewhere

use serde::{Deserialize, Serialize};

/// Platform a blog post was published on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogPlatform {
    Medium,
    Dev,
    Hashnode,
    Other,
}

/// A blog post linked from the portfolio
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Display date, kept verbatim
    pub date: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<BlogPlatform>,
}
