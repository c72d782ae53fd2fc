//! Command identifiers
//!
//! Commands are the semantic actions users can trigger. Each command has a
//! unique ID that keybindings refer to.

use crate::actions::{Action, GlobalAction, PullRequestsAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // === Navigation ===
    /// Focus the next item (down)
    NavigateNext,
    /// Focus the previous item (up)
    NavigatePrevious,
    /// Focus the first item
    NavigateToTop,
    /// Focus the last item
    NavigateToBottom,

    // === Contributions ===
    /// Expand/collapse the focused card, or press the focused show-more control
    Activate,
    /// Show all items / show the first few
    ToggleShowAll,
    /// Open "View PR" of the expanded card
    OpenPullRequest,
    /// Open "View Repo" of the expanded card
    OpenRepository,

    // === General ===
    /// Switch light/dark mode
    ToggleMode,
    /// Quit the application
    Quit,
}

impl CommandId {
    /// Short label used in the status bar hints
    pub fn label(&self) -> &'static str {
        match self {
            Self::NavigateNext => "next",
            Self::NavigatePrevious => "prev",
            Self::NavigateToTop => "top",
            Self::NavigateToBottom => "bottom",
            Self::Activate => "expand",
            Self::ToggleShowAll => "more",
            Self::OpenPullRequest => "view PR",
            Self::OpenRepository => "view repo",
            Self::ToggleMode => "mode",
            Self::Quit => "quit",
        }
    }

    /// Convert the command to the action it triggers
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::PullRequests(PullRequestsAction::FocusNext),
            Self::NavigatePrevious => Action::PullRequests(PullRequestsAction::FocusPrevious),
            Self::NavigateToTop => Action::PullRequests(PullRequestsAction::FocusFirst),
            Self::NavigateToBottom => Action::PullRequests(PullRequestsAction::FocusLast),
            Self::Activate => Action::PullRequests(PullRequestsAction::ActivateFocused),
            Self::ToggleShowAll => Action::PullRequests(PullRequestsAction::ToggleShowAll),
            Self::OpenPullRequest => Action::PullRequests(PullRequestsAction::OpenPullRequestLink),
            Self::OpenRepository => Action::PullRequests(PullRequestsAction::OpenRepositoryLink),
            Self::ToggleMode => Action::Global(GlobalAction::ToggleMode),
            Self::Quit => Action::Global(GlobalAction::Quit),
        }
    }
}
