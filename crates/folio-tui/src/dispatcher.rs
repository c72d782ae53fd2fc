//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch follow-up actions, it uses the Dispatcher.
//! Dispatched actions are queued and re-enter the middleware chain from the
//! beginning once the current action has been processed.

use crate::actions::Action;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Dispatcher for sending actions through the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher and the receiving end of its queue
    pub fn new() -> (Self, Receiver<Action>) {
        let (action_tx, action_rx) = mpsc::channel();
        (Self { action_tx }, action_rx)
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

/// Drain every queued action without blocking
pub fn drain(action_rx: &Receiver<Action>) -> Vec<Action> {
    let mut actions = Vec::new();
    loop {
        match action_rx.try_recv() {
            Ok(action) => actions.push(action),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }
    actions
}
