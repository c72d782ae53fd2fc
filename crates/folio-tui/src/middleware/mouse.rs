//! MouseMiddleware - hit tests clicks against the rendered contributions section
//!
//! The view model is rebuilt from the same state and layout the renderer uses,
//! so a click resolves to exactly what is on screen.

use crate::actions::{Action, GlobalAction, PullRequestsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::view_models::{HitTarget, PullRequestsViewModel};
use crate::views::AppLayout;

pub struct MouseMiddleware;

impl MouseMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for MouseMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::MouseClicked { column, row }) = action else {
            return true;
        };

        let layout = AppLayout::new(state.viewport);
        let target = PullRequestsViewModel::from_state(state, layout.content)
            .and_then(|vm| vm.hit_test(*column, *row));

        match target {
            Some(HitTarget::CardHeader { focus, id }) => {
                dispatcher.dispatch(Action::PullRequests(PullRequestsAction::FocusItem(focus)));
                dispatcher.dispatch(Action::PullRequests(PullRequestsAction::ToggleExpanded(id)));
            }
            // Links open their URL and leave focus and expansion alone
            Some(HitTarget::Link { url }) => {
                dispatcher.dispatch(Action::Global(GlobalAction::OpenUrl(url)));
            }
            Some(HitTarget::Toggle { focus }) => {
                dispatcher.dispatch(Action::PullRequests(PullRequestsAction::FocusItem(focus)));
                dispatcher.dispatch(Action::PullRequests(PullRequestsAction::ToggleShowAll));
            }
            None => log::trace!("Click at {},{} hit nothing", column, row),
        }

        false
    }
}
