//! Actions module
//!
//! Actions are tagged by the part of the application they target:
//! - Global actions: raw input, viewport changes, theme mode, quitting, URL opening
//! - Pull request actions: focus and disclosure changes in the contributions list
//! - Status bar actions: transient messages

pub mod global;
pub mod pull_requests;
pub mod status_bar;

pub use global::GlobalAction;
pub use pull_requests::PullRequestsAction;
pub use status_bar::StatusBarAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Contributions list actions
    PullRequests(PullRequestsAction),
    /// Status bar actions
    StatusBar(StatusBarAction),
}
