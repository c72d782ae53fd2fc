//! Profile, social links and skills

use serde::{Deserialize, Serialize};

/// The person the portfolio is about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub handle: String,
    /// Avatar image URL
    pub avatar: String,
    /// Banner image URL
    pub banner: String,
    pub bio: String,
    pub location: String,
    pub resume_url: String,
    pub email: String,
}

/// A link to a social profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub name: String,
    pub url: String,
    /// Icon identifier, resolved by the renderer
    pub icon: String,
}

/// A skill badge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    /// Brand color as a CSS hex string (e.g. "#DEA584")
    pub color: String,
}
