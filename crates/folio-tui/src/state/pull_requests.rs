//! Contributions list state
//!
//! The list owns exactly two pieces of disclosure state: whether all items are
//! shown, and which single card (if any) is expanded. The focus cursor is the
//! keyboard counterpart of pointer hover.

use folio_model::PullRequest;

/// Number of cards shown before the "Show N more" control
pub const INITIAL_SHOW_COUNT: usize = 4;

/// Transient UI state of the contributions list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestsState {
    /// Whether every item is shown, not just the first `INITIAL_SHOW_COUNT`
    pub show_all: bool,
    /// Id of the one expanded card, if any
    pub expanded_id: Option<String>,
    /// Index into the focusable items: visible cards, then the toggle control
    pub focus: usize,
}

/// What the focus cursor currently points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// A card, by index into the input order
    Card(usize),
    /// The show-more / show-less control
    Toggle,
}

impl PullRequestsState {
    /// Whether the list is long enough to need the show-more control
    pub fn has_more(total: usize) -> bool {
        total > INITIAL_SHOW_COUNT
    }

    /// Number of cards currently displayed
    pub fn visible_count(&self, total: usize) -> usize {
        if self.show_all {
            total
        } else {
            total.min(INITIAL_SHOW_COUNT)
        }
    }

    /// The cards currently displayed, in input order
    pub fn visible<'a>(&self, prs: &'a [PullRequest]) -> &'a [PullRequest] {
        &prs[..self.visible_count(prs.len())]
    }

    /// Number of items the focus cursor can land on
    pub fn focusable_count(&self, total: usize) -> usize {
        self.visible_count(total) + usize::from(Self::has_more(total))
    }

    /// Label of the show-more control, if it is shown at all
    pub fn toggle_label(&self, total: usize) -> Option<String> {
        if !Self::has_more(total) {
            return None;
        }
        Some(if self.show_all {
            "Show less".to_string()
        } else {
            format!("Show {} more", total - INITIAL_SHOW_COUNT)
        })
    }

    /// Resolve a focusable index to a card or the toggle control
    pub fn target_at(&self, index: usize, total: usize) -> Option<FocusTarget> {
        let visible = self.visible_count(total);
        if index < visible {
            Some(FocusTarget::Card(index))
        } else if index == visible && Self::has_more(total) {
            Some(FocusTarget::Toggle)
        } else {
            None
        }
    }

    /// The item the focus cursor points at
    pub fn focused(&self, total: usize) -> Option<FocusTarget> {
        self.target_at(self.focus, total)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_id.as_deref() == Some(id)
    }

    /// Expand the card with `id`, collapsing any other; collapse it if already expanded
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded_id = None;
        } else {
            self.expanded_id = Some(id.to_string());
        }
    }

    /// The expanded card, if it is among the displayed ones
    pub fn expanded<'a>(&self, prs: &'a [PullRequest]) -> Option<&'a PullRequest> {
        let id = self.expanded_id.as_deref()?;
        self.visible(prs).iter().find(|pr| pr.id == id)
    }

    /// Keep the focus cursor on an existing item
    pub fn clamp_focus(&mut self, total: usize) {
        let count = self.focusable_count(total);
        self.focus = self.focus.min(count.saturating_sub(1));
    }
}
