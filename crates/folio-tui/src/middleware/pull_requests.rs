//! Pull Requests Middleware
//!
//! Resolves the link keys to the URLs of the expanded card. Links only exist
//! on an expanded card that is currently displayed.

use crate::actions::{Action, GlobalAction, PullRequestsAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use folio_model::PullRequest;

pub struct PullRequestsMiddleware;

impl PullRequestsMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for PullRequestsMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::PullRequests(pr_action) = action else {
            return true;
        };

        let pick_url: fn(&PullRequest) -> &str = match pr_action {
            PullRequestsAction::OpenPullRequestLink => |pr| pr.pr_url.as_str(),
            PullRequestsAction::OpenRepositoryLink => |pr| pr.repo_url.as_str(),
            _ => return true,
        };

        let message = match state.pull_requests.expanded(state.pull_request_list()) {
            Some(pr) => {
                let url = pick_url(pr);
                if url.is_empty() {
                    Some(format!("No link for \"{}\"", pr.title))
                } else {
                    dispatcher.dispatch(Action::Global(GlobalAction::OpenUrl(url.to_string())));
                    None
                }
            }
            None => Some("Expand a card to open its links".to_string()),
        };

        if let Some(message) = message {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::Message(message)));
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher;
    use crate::state::PullRequestsState;
    use folio_config::AppConfig;
    use folio_model::{PortfolioData, PrStatus};
    use folio_theme::Theme;
    use pretty_assertions::assert_eq;

    fn state(expanded_id: Option<&str>) -> AppState {
        let portfolio = PortfolioData {
            pull_requests: vec![
                PullRequest::new("a", "First", PrStatus::Merged)
                    .with_repo("org/a", "https://github.com/org/a")
                    .with_pr_url("https://github.com/org/a/pull/1"),
                PullRequest::new("b", "Second", PrStatus::Open),
            ],
            ..Default::default()
        };
        let mut state = AppState::new(portfolio, Theme::default(), AppConfig::default());
        state.pull_requests = PullRequestsState {
            expanded_id: expanded_id.map(str::to_string),
            ..Default::default()
        };
        state
    }

    fn run(state: &AppState, action: PullRequestsAction) -> (bool, Vec<Action>) {
        let (dispatcher, rx) = Dispatcher::new();
        let passed = PullRequestsMiddleware::new().handle(&Action::PullRequests(action), state, &dispatcher);
        (passed, dispatcher::drain(&rx))
    }

    #[test]
    fn test_opens_links_of_expanded_card() {
        let state = state(Some("a"));
        assert_eq!(
            run(&state, PullRequestsAction::OpenPullRequestLink),
            (
                false,
                vec![Action::Global(GlobalAction::OpenUrl(
                    "https://github.com/org/a/pull/1".to_string()
                ))]
            )
        );
        assert_eq!(
            run(&state, PullRequestsAction::OpenRepositoryLink).1,
            vec![Action::Global(GlobalAction::OpenUrl(
                "https://github.com/org/a".to_string()
            ))]
        );
    }

    #[test]
    fn test_no_expanded_card_shows_hint() {
        assert_eq!(
            run(&state(None), PullRequestsAction::OpenPullRequestLink).1,
            vec![Action::StatusBar(StatusBarAction::Message(
                "Expand a card to open its links".to_string()
            ))]
        );
    }

    #[test]
    fn test_empty_url_is_reported() {
        assert_eq!(
            run(&state(Some("b")), PullRequestsAction::OpenRepositoryLink).1,
            vec![Action::StatusBar(StatusBarAction::Message(
                "No link for \"Second\"".to_string()
            ))]
        );
    }

    #[test]
    fn test_other_actions_reach_reducer() {
        assert_eq!(
            run(&state(None), PullRequestsAction::ToggleShowAll),
            (true, vec![])
        );
    }
}
