//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod pull_requests;
mod status_bar;

pub use app::AppState;
pub use pull_requests::{FocusTarget, PullRequestsState};
pub use status_bar::StatusBarState;
