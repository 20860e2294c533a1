//! The store: single owner of the current state and the pending effect queue.

use crate::builder::StoreConfig;
use crate::core::{Action, Reducer, State, StateHistory, StateTransition};
use crate::effects::dispatcher::{Command, Dispatcher};
use crate::effects::handler::EffectHandler;
use chrono::Utc;
use std::collections::VecDeque;
use std::fmt;
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tracing::Instrument;
use uuid::Uuid;

/// Task that applies actions and drains effects.
///
/// A store is never touched directly. [`Store::spawn`] (or
/// [`StoreBuilder`](crate::builder::StoreBuilder)) moves it onto the tokio
/// runtime and returns a [`Handle`]. Commands from every handle and dispatcher
/// arrive on one channel and are applied strictly in arrival order, so there
/// is exactly one writer of the state.
///
/// After each command the store drains its effect queue front to back. Every
/// effect is invoked with the state current at that moment; actions the handler
/// dispatches synchronously are applied before the next effect is popped. The
/// task the handler returns is spawned and not awaited.
///
/// The store stops once every handle and dispatcher has been dropped.
pub struct Store<R: Reducer, H: EffectHandler<R>> {
    reducer: R,
    handler: H,
    current: R::State,
    pending: VecDeque<R::Effect>,
    history: Option<StateHistory<R::State>>,
    flush_waiters: Vec<oneshot::Sender<()>>,
    commands: mpsc::UnboundedReceiver<Command<R>>,
    dispatch: mpsc::WeakUnboundedSender<Command<R>>,
    snapshot: watch::Sender<R::State>,
    changes: broadcast::Sender<R::State>,
}

impl<R: Reducer, H: EffectHandler<R>> Store<R, H> {
    /// Start a store with the default [`StoreConfig`].
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime. Use
    /// [`StoreBuilder`](crate::builder::StoreBuilder) to get an error instead.
    pub fn spawn(reducer: R, handler: H, initial: R::State) -> Handle<R> {
        Self::launch(reducer, handler, initial, &StoreConfig::default())
    }

    pub(crate) fn launch(
        reducer: R,
        handler: H,
        initial: R::State,
        config: &StoreConfig,
    ) -> Handle<R> {
        let id = Uuid::new_v4();
        let (sender, commands) = mpsc::unbounded_channel();
        let (snapshot, snapshot_rx) = watch::channel(initial.clone());
        let (changes, _) = broadcast::channel(config.notify_capacity);

        let store = Self {
            reducer,
            handler,
            current: initial,
            pending: VecDeque::new(),
            history: config.record_history.then(StateHistory::new),
            flush_waiters: Vec::new(),
            commands,
            dispatch: sender.downgrade(),
            snapshot,
            changes: changes.clone(),
        };
        tokio::spawn(store.run().instrument(tracing::info_span!("store", %id)));

        Handle {
            id,
            dispatcher: Dispatcher::new(sender),
            snapshot: snapshot_rx,
            changes,
        }
    }

    async fn run(mut self) {
        tracing::debug!(state = self.current.name(), "store started");

        while let Some(command) = self.commands.recv().await {
            self.handle(command);
            self.drain();
            for waiter in self.flush_waiters.drain(..) {
                let _ = waiter.send(());
            }
        }

        tracing::debug!(state = self.current.name(), "store stopped");
    }

    fn handle(&mut self, command: Command<R>) {
        match command {
            Command::Dispatch(action) => self.apply(action),
            Command::Flush(waiter) => self.flush_waiters.push(waiter),
            Command::History(reply) => {
                let _ = reply.send(self.history.clone());
            }
        }
    }

    fn apply(&mut self, action: R::Action) {
        let action_name = action.name().to_owned();
        let (next, effects) = self.reducer.reduce(&self.current, action).into_parts();

        if next != self.current {
            tracing::debug!(
                action = %action_name,
                from = self.current.name(),
                to = next.name(),
                "state changed"
            );
            if let Some(history) = self.history.as_mut() {
                history.push(StateTransition {
                    from: self.current.clone(),
                    to: next.clone(),
                    action: action_name,
                    timestamp: Utc::now(),
                });
            }
            self.current = next;
            self.snapshot.send_replace(self.current.clone());
            // Err only means nobody is subscribed.
            let _ = self.changes.send(self.current.clone());
        }

        if !effects.is_empty() {
            tracing::trace!(
                added = effects.len(),
                queued = self.pending.len(),
                "effects queued"
            );
            self.pending.extend(effects);
        }
    }

    fn drain(&mut self) {
        while let Some(effect) = self.pending.pop_front() {
            self.invoke(effect);
            // Dispatches made during invoke land here before the next effect.
            while let Ok(command) = self.commands.try_recv() {
                self.handle(command);
            }
        }
    }

    fn invoke(&mut self, effect: R::Effect) {
        let Some(sender) = self.dispatch.upgrade() else {
            tracing::debug!(?effect, "store shutting down; effect dropped");
            return;
        };

        tracing::debug!(
            ?effect,
            state = self.current.name(),
            remaining = self.pending.len(),
            "invoking effect"
        );
        let task = self
            .handler
            .invoke(effect, &self.current, Dispatcher::new(sender));
        tokio::spawn(task.in_current_span());
    }
}

/// Caller-side view of a running store.
///
/// Clone it freely; every clone talks to the same store.
pub struct Handle<R: Reducer> {
    id: Uuid,
    dispatcher: Dispatcher<R>,
    snapshot: watch::Receiver<R::State>,
    changes: broadcast::Sender<R::State>,
}

impl<R: Reducer> Handle<R> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Queue an action. Never fails.
    pub fn dispatch(&self, action: R::Action) {
        self.dispatcher.dispatch(action);
    }

    pub fn dispatcher(&self) -> Dispatcher<R> {
        self.dispatcher.clone()
    }

    /// Snapshot of the latest state the store has published.
    pub fn current_state(&self) -> R::State {
        self.snapshot.borrow().clone()
    }

    /// Latest-value receiver; intermediate states may be skipped.
    pub fn watch(&self) -> watch::Receiver<R::State> {
        self.snapshot.clone()
    }

    /// Receives every new state after it is applied.
    ///
    /// Rejected or no-op actions produce no notification. A receiver that
    /// falls more than the configured capacity behind gets `Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<R::State> {
        self.changes.subscribe()
    }

    /// Wait until everything dispatched so far has been applied and every
    /// queued effect has been invoked.
    ///
    /// Effect tasks may still be running when this returns.
    pub async fn flush(&self) {
        let (waiter, done) = oneshot::channel();
        if self.dispatcher.send(Command::Flush(waiter)) {
            let _ = done.await;
        }
    }

    /// Transitions applied so far, if history recording is enabled.
    pub async fn history(&self) -> Option<StateHistory<R::State>> {
        let (reply, response) = oneshot::channel();
        if !self.dispatcher.send(Command::History(reply)) {
            return None;
        }
        response.await.ok().flatten()
    }
}

impl<R: Reducer> Clone for Handle<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            dispatcher: self.dispatcher.clone(),
            snapshot: self.snapshot.clone(),
            changes: self.changes.clone(),
        }
    }
}

impl<R: Reducer> fmt::Debug for Handle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("id", &self.id)
            .field("state", &*self.snapshot.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Reduction;
    use crate::effects::handler::{handler_fn, EffectTask, NoEffects};
    use futures::FutureExt;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Tally(i64);

    impl State for Tally {
        fn name(&self) -> &str {
            "Tally"
        }
    }

    #[derive(Debug)]
    enum TallyAction {
        Add(i64),
        AddLater(i64),
        Nothing,
    }

    impl Action for TallyAction {
        fn name(&self) -> &str {
            match self {
                Self::Add(_) => "add",
                Self::AddLater(_) => "add_later",
                Self::Nothing => "nothing",
            }
        }
    }

    #[derive(Debug)]
    struct Deferred(i64);

    struct Tallier;

    impl Reducer for Tallier {
        type State = Tally;
        type Action = TallyAction;
        type Effect = Deferred;

        fn reduce(&self, state: &Tally, action: TallyAction) -> Reduction<Tally, Deferred> {
            match action {
                TallyAction::Add(n) => Reduction::new(Tally(state.0 + n)),
                TallyAction::AddLater(n) => Reduction::new(state.clone()).with_effect(Deferred(n)),
                TallyAction::Nothing => Reduction::new(state.clone()),
            }
        }
    }

    fn deferred_adder() -> impl EffectHandler<Tallier> {
        handler_fn::<Tallier, _>(|Deferred(n), _state, dispatch| -> EffectTask {
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                dispatch.dispatch(TallyAction::Add(n));
            }
            .boxed()
        })
    }

    #[tokio::test]
    async fn flush_waits_for_dispatched_actions() {
        let handle = Store::spawn(Tallier, NoEffects, Tally(0));

        handle.dispatch(TallyAction::Add(2));
        handle.dispatch(TallyAction::Add(3));
        handle.flush().await;

        assert_eq!(handle.current_state(), Tally(5));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn effect_dispatch_reenters_reducer() {
        let handle = Store::spawn(Tallier, deferred_adder(), Tally(1));
        let mut changes = handle.subscribe();

        handle.dispatch(TallyAction::AddLater(4));
        handle.flush().await;
        assert_eq!(handle.current_state(), Tally(1));

        assert_eq!(changes.recv().await.unwrap(), Tally(5));
        assert_eq!(handle.current_state(), Tally(5));
    }

    #[tokio::test]
    async fn unchanged_state_is_not_broadcast() {
        let handle = Store::spawn(Tallier, NoEffects, Tally(0));
        let mut changes = handle.subscribe();

        handle.dispatch(TallyAction::Nothing);
        handle.dispatch(TallyAction::Add(0));
        handle.dispatch(TallyAction::Add(7));

        assert_eq!(changes.recv().await.unwrap(), Tally(7));
    }

    #[tokio::test]
    async fn history_is_off_by_default() {
        let handle = Store::spawn(Tallier, NoEffects, Tally(0));
        handle.dispatch(TallyAction::Add(1));

        assert!(handle.history().await.is_none());
    }

    #[tokio::test]
    async fn history_records_changes_only() {
        let config = StoreConfig {
            record_history: true,
            ..StoreConfig::default()
        };
        let handle = Store::launch(Tallier, NoEffects, Tally(0), &config);

        handle.dispatch(TallyAction::Add(1));
        handle.dispatch(TallyAction::Nothing);
        handle.dispatch(TallyAction::Add(2));

        let history = handle.history().await.unwrap();
        assert_eq!(history.actions(), vec!["add", "add"]);
        assert_eq!(history.get_path(), vec![&Tally(0), &Tally(1), &Tally(3)]);
    }

    #[tokio::test]
    async fn store_stops_when_handles_drop() {
        let handle = Store::spawn(Tallier, NoEffects, Tally(0));
        let mut latest = handle.watch();
        drop(handle);

        assert!(latest.changed().await.is_err());
    }

    #[tokio::test]
    async fn clones_share_one_store() {
        let handle = Store::spawn(Tallier, NoEffects, Tally(0));
        let other = handle.clone();

        other.dispatch(TallyAction::Add(10));
        handle.flush().await;

        assert_eq!(handle.id(), other.id());
        assert_eq!(handle.current_state(), Tally(10));
    }
}
