//! Work experience and education

use serde::{Deserialize, Serialize};

/// A position held at a company
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    /// Employment type, e.g. "Full-time" or "Internship"
    #[serde(rename = "type")]
    pub kind: String,
    pub period: String,
    pub location: String,
    pub details: Vec<String>,
}

/// A degree or course of study
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub period: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}
