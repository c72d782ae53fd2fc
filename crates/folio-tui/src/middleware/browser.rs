//! BrowserMiddleware - performs `OpenUrl` side effects

use crate::actions::{Action, GlobalAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::UrlOpener;

pub struct BrowserMiddleware<O> {
    opener: O,
}

impl<O: UrlOpener> BrowserMiddleware<O> {
    pub fn new(opener: O) -> Self {
        Self { opener }
    }
}

impl<O: UrlOpener> Middleware for BrowserMiddleware<O> {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::OpenUrl(url)) = action else {
            return true;
        };

        log::info!("Opening {}", url);
        self.opener.open(url);
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::Message(format!(
            "Opening {}",
            url
        ))));

        false
    }
}
