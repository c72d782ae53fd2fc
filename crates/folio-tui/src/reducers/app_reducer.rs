use crate::actions::{Action, GlobalAction};
use crate::reducers::{pull_requests_reducer, status_bar_reducer};
use crate::state::AppState;
use ratatui::layout::Rect;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::Resized { width, height }) => {
            state.viewport = Rect::new(0, 0, *width, *height);
        }
        Action::Global(GlobalAction::ToggleMode) => {
            let mode = state.theme.mode.toggled();
            log::debug!("Switching to {} mode", mode);
            state.theme = state.theme.with_mode(mode);
        }
        Action::PullRequests(pr_action) => {
            let portfolio = state.portfolio.clone();
            state.pull_requests = pull_requests_reducer::reduce(
                state.pull_requests,
                pr_action,
                &portfolio.pull_requests,
            );
        }
        Action::StatusBar(status_action) => {
            state.status_bar = status_bar_reducer::reduce(state.status_bar, status_action);
        }
        Action::Global(_) => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PullRequestsAction;
    use folio_config::AppConfig;
    use folio_model::{PortfolioData, PrStatus, PullRequest};
    use folio_theme::{Mode, Theme};
    use pretty_assertions::assert_eq;

    fn state_with(n: usize) -> AppState {
        let portfolio = PortfolioData {
            pull_requests: (1..=n)
                .map(|i| PullRequest::new(format!("P{i}"), format!("PR {i}"), PrStatus::Merged))
                .collect(),
            ..Default::default()
        };
        AppState::new(portfolio, Theme::default(), AppConfig::default())
    }

    #[test]
    fn test_quit() {
        let state = reduce(state_with(0), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let state = reduce(
            state_with(0),
            &Action::Global(GlobalAction::Resized {
                width: 120,
                height: 40,
            }),
        );
        assert_eq!(state.viewport, Rect::new(0, 0, 120, 40));
    }

    #[test]
    fn test_toggle_mode() {
        let state = reduce(state_with(0), &Action::Global(GlobalAction::ToggleMode));
        assert_eq!(state.theme.mode, Mode::Light);
        let state = reduce(state, &Action::Global(GlobalAction::ToggleMode));
        assert_eq!(state.theme.mode, Mode::Dark);
    }

    #[test]
    fn test_pull_request_actions_are_routed() {
        let state = reduce(
            state_with(5),
            &Action::PullRequests(PullRequestsAction::ToggleShowAll),
        );
        assert!(state.pull_requests.show_all);
    }

    #[test]
    fn test_open_url_leaves_state_untouched() {
        let mut before = state_with(3);
        before.pull_requests.expanded_id = Some("P2".to_string());
        let after = reduce(
            before.clone(),
            &Action::Global(GlobalAction::OpenUrl("https://example.com".to_string())),
        );
        assert_eq!(after.pull_requests, before.pull_requests);
    }
}
