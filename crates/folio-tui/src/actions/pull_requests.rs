//! Contributions list actions

/// Actions for the pull request cards and the show-more control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestsAction {
    // Focus (the terminal's stand-in for hover)
    /// Move focus to the next card or the show-more control
    FocusNext,
    /// Move focus to the previous item
    FocusPrevious,
    /// Move focus to the first card
    FocusFirst,
    /// Move focus to the last focusable item
    FocusLast,
    /// Move focus to a specific item index
    FocusItem(usize),

    // Disclosure
    /// Activate the focused item (card header or show-more control)
    ActivateFocused,
    /// Expand the card with this id, or collapse it if it is expanded
    ToggleExpanded(String),
    /// Flip between the first few items and the full list
    ToggleShowAll,

    // Links (resolved to `GlobalAction::OpenUrl` by middleware)
    /// Open "View PR" of the expanded card
    OpenPullRequestLink,
    /// Open "View Repo" of the expanded card
    OpenRepositoryLink,
}
