//! The handle effects and callers use to send actions to a store.

use crate::core::{Action, Reducer, StateHistory};
use std::fmt;
use tokio::sync::{mpsc, oneshot};

/// Everything a store task can be asked to do.
pub(crate) enum Command<R: Reducer> {
    Dispatch(R::Action),
    /// Reply once every earlier command is applied and the effect queue is empty.
    Flush(oneshot::Sender<()>),
    History(oneshot::Sender<Option<StateHistory<R::State>>>),
}

/// Sends actions into a store.
///
/// Cheap to clone. Effect handlers receive one per invocation and may keep it
/// for as long as their task runs; a store stays alive while any dispatcher
/// exists.
pub struct Dispatcher<R: Reducer> {
    sender: mpsc::UnboundedSender<Command<R>>,
}

impl<R: Reducer> Dispatcher<R> {
    pub(crate) fn new(sender: mpsc::UnboundedSender<Command<R>>) -> Self {
        Self { sender }
    }

    /// Queue `action` behind every action dispatched before it.
    ///
    /// Never fails and never blocks. If the store has stopped the action is
    /// dropped and logged.
    pub fn dispatch(&self, action: R::Action) {
        if let Err(mpsc::error::SendError(Command::Dispatch(action))) =
            self.sender.send(Command::Dispatch(action))
        {
            tracing::debug!(action = action.name(), "store stopped; action dropped");
        }
    }

    /// Returns `false` when the store is gone.
    pub(crate) fn send(&self, command: Command<R>) -> bool {
        self.sender.send(command).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<R: Reducer> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R: Reducer> fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("closed", &self.is_closed())
            .finish()
    }
}
