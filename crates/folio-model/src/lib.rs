//! Portfolio content model
//!
//! Passive value types describing a person's portfolio: profile, skills,
//! experience, education, projects, pull requests, blog posts and quotes.
//! Everything here is a read-only snapshot; display code never mutates it.

mod blog;
mod career;
mod error;
mod portfolio;
mod profile;
mod project;
mod pull_request;

pub use blog::{BlogPlatform, BlogPost};
pub use career::{Education, Experience};
pub use error::ModelError;
pub use portfolio::PortfolioData;
pub use profile::{Profile, Skill, Social};
pub use project::Project;
pub use pull_request::{PrStatus, PullRequest};
