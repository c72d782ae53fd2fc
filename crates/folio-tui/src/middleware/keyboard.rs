//! KeyboardMiddleware - translates raw key presses into commands
//!
//! Ctrl+C always quits. Every other key is looked up in the keymap, and the
//! bound command is dispatched as its action. Unbound keys are dropped.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        // Emergency quit, independent of the keymap
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        match state.keymap.match_key(key) {
            Some(command) => {
                log::debug!("Key {:?} -> {:?}", key.code, command);
                dispatcher.dispatch(command.to_action());
            }
            None => log::trace!("Unbound key {:?}", key.code),
        }

        false
    }
}
