//! Contributions list reducer
//!
//! Handles focus movement, card disclosure and the show-more control.

use folio_model::PullRequest;

use crate::actions::PullRequestsAction;
use crate::state::{FocusTarget, PullRequestsState};

pub fn reduce(
    mut state: PullRequestsState,
    action: &PullRequestsAction,
    prs: &[PullRequest],
) -> PullRequestsState {
    let total = prs.len();
    let count = state.focusable_count(total);

    match action {
        PullRequestsAction::FocusNext => {
            if count > 0 {
                state.focus = (state.focus + 1) % count;
            }
        }

        PullRequestsAction::FocusPrevious => {
            if count > 0 {
                state.focus = if state.focus == 0 {
                    count - 1
                } else {
                    state.focus - 1
                };
            }
        }

        PullRequestsAction::FocusFirst => {
            state.focus = 0;
        }

        PullRequestsAction::FocusLast => {
            state.focus = count.saturating_sub(1);
        }

        PullRequestsAction::FocusItem(index) => {
            if *index < count {
                state.focus = *index;
            }
        }

        PullRequestsAction::ActivateFocused => match state.focused(total) {
            Some(FocusTarget::Card(index)) => {
                state.toggle_expanded(&prs[index].id);
                log::debug!("Card {} expanded: {:?}", prs[index].id, state.expanded_id);
            }
            Some(FocusTarget::Toggle) => toggle_show_all(&mut state, total),
            None => {}
        },

        PullRequestsAction::ToggleExpanded(id) => {
            state.toggle_expanded(id);
            log::debug!("Card {} expanded: {:?}", id, state.expanded_id);
        }

        PullRequestsAction::ToggleShowAll => toggle_show_all(&mut state, total),

        // Link opening is a side effect, resolved by middleware
        PullRequestsAction::OpenPullRequestLink | PullRequestsAction::OpenRepositoryLink => {}
    }

    state
}

fn toggle_show_all(state: &mut PullRequestsState, total: usize) {
    if !PullRequestsState::has_more(total) {
        return;
    }
    let on_toggle = state.focused(total) == Some(FocusTarget::Toggle);
    state.show_all = !state.show_all;
    if on_toggle {
        state.focus = state.visible_count(total);
    } else {
        state.clamp_focus(total);
    }
    log::debug!("Show all pull requests: {}", state.show_all);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::PrStatus;
    use pretty_assertions::assert_eq;

    fn prs(n: usize) -> Vec<PullRequest> {
        (1..=n)
            .map(|i| PullRequest::new(format!("P{i}"), format!("PR {i}"), PrStatus::Open))
            .collect()
    }

    fn apply(
        state: PullRequestsState,
        actions: &[PullRequestsAction],
        items: &[PullRequest],
    ) -> PullRequestsState {
        actions
            .iter()
            .fold(state, |state, action| reduce(state, action, items))
    }

    #[test]
    fn test_show_all_round_trip() {
        let items = prs(5);
        let state = PullRequestsState::default();
        let ids = |s: &PullRequestsState| -> Vec<String> {
            s.visible(&items).iter().map(|pr| pr.id.clone()).collect()
        };

        assert_eq!(ids(&state), vec!["P1", "P2", "P3", "P4"]);
        assert_eq!(state.toggle_label(5).as_deref(), Some("Show 1 more"));

        let state = reduce(state, &PullRequestsAction::ToggleShowAll, &items);
        assert_eq!(ids(&state), vec!["P1", "P2", "P3", "P4", "P5"]);
        assert_eq!(state.toggle_label(5).as_deref(), Some("Show less"));

        let state = reduce(state, &PullRequestsAction::ToggleShowAll, &items);
        assert_eq!(ids(&state), vec!["P1", "P2", "P3", "P4"]);
        assert_eq!(state.toggle_label(5).as_deref(), Some("Show 1 more"));
    }

    #[test]
    fn test_show_all_is_noop_for_short_lists() {
        let items = prs(4);
        let state = reduce(
            PullRequestsState::default(),
            &PullRequestsAction::ToggleShowAll,
            &items,
        );
        assert!(!state.show_all);
    }

    #[test]
    fn test_header_activation_sequences_keep_one_expanded() {
        let items = prs(6);
        let mut state = PullRequestsState {
            show_all: true,
            ..Default::default()
        };

        // Walk a fixed, irregular click sequence across all cards
        let clicks = [0, 3, 3, 5, 1, 1, 1, 4, 0, 2, 2, 5, 5, 0];
        let mut expected: Option<&str> = None;
        for index in clicks {
            let id = items[index].id.as_str();
            state = reduce(
                state,
                &PullRequestsAction::ToggleExpanded(id.to_string()),
                &items,
            );
            expected = if expected == Some(id) { None } else { Some(id) };

            assert_eq!(state.expanded_id.as_deref(), expected);
            let expanded = items.iter().filter(|pr| state.is_expanded(&pr.id)).count();
            assert!(expanded <= 1);
        }
    }

    #[test]
    fn test_activate_focused_card() {
        let items = prs(3);
        let state = apply(
            PullRequestsState::default(),
            &[
                PullRequestsAction::FocusNext,
                PullRequestsAction::ActivateFocused,
            ],
            &items,
        );
        assert_eq!(state.expanded_id.as_deref(), Some("P2"));

        let state = reduce(state, &PullRequestsAction::ActivateFocused, &items);
        assert_eq!(state.expanded_id, None);
    }

    #[test]
    fn test_activate_focused_toggle_control() {
        let items = prs(6);
        let state = apply(
            PullRequestsState::default(),
            &[
                PullRequestsAction::FocusLast,
                PullRequestsAction::ActivateFocused,
            ],
            &items,
        );
        assert!(state.show_all);
        // Focus follows the control below all six cards
        assert_eq!(state.focus, 6);
        assert_eq!(state.focused(6), Some(FocusTarget::Toggle));

        let state = apply(
            state,
            &[
                PullRequestsAction::FocusLast,
                PullRequestsAction::ActivateFocused,
            ],
            &items,
        );
        assert!(!state.show_all);
        assert_eq!(state.focus, 4);
        assert_eq!(state.focused(6), Some(FocusTarget::Toggle));
    }

    #[test]
    fn test_collapsing_clamps_focus_from_hidden_card() {
        let items = prs(7);
        let state = PullRequestsState {
            show_all: true,
            focus: 6,
            ..Default::default()
        };
        let state = reduce(state, &PullRequestsAction::ToggleShowAll, &items);
        assert_eq!(state.focused(7), Some(FocusTarget::Toggle));
    }

    #[test]
    fn test_focus_wraps() {
        let items = prs(2);
        let state = reduce(
            PullRequestsState::default(),
            &PullRequestsAction::FocusPrevious,
            &items,
        );
        assert_eq!(state.focus, 1);
        let state = reduce(state, &PullRequestsAction::FocusNext, &items);
        assert_eq!(state.focus, 0);
    }

    #[test]
    fn test_focus_item_out_of_range_is_ignored() {
        let items = prs(2);
        let state = reduce(
            PullRequestsState::default(),
            &PullRequestsAction::FocusItem(7),
            &items,
        );
        assert_eq!(state.focus, 0);
    }

    #[test]
    fn test_empty_list_ignores_everything() {
        let state = apply(
            PullRequestsState::default(),
            &[
                PullRequestsAction::FocusNext,
                PullRequestsAction::FocusLast,
                PullRequestsAction::ActivateFocused,
                PullRequestsAction::ToggleShowAll,
            ],
            &[],
        );
        assert_eq!(state, PullRequestsState::default());
    }

    #[test]
    fn test_link_actions_do_not_toggle() {
        let items = prs(3);
        let state = PullRequestsState {
            expanded_id: Some("P1".to_string()),
            ..Default::default()
        };
        let after = apply(
            state.clone(),
            &[
                PullRequestsAction::OpenPullRequestLink,
                PullRequestsAction::OpenRepositoryLink,
            ],
            &items,
        );
        assert_eq!(after, state);
    }
}
