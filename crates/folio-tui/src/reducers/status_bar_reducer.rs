use crate::actions::StatusBarAction;
use crate::state::StatusBarState;

pub fn reduce(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Message(message) => {
            state.message = Some(message.clone());
            state.timestamp = Some(chrono::Local::now());
        }
    }
    state
}
