//! Effect handlers: the code that turns declared effects into running tasks.

use crate::core::{Reducer, State};
use crate::effects::dispatcher::Dispatcher;
use futures::future::{self, BoxFuture, FutureExt};
use std::sync::Arc;

/// The asynchronous remainder of an effect, spawned by the store.
pub type EffectTask = BoxFuture<'static, ()>;

/// Executes the effects a reducer declares.
///
/// `invoke` is called by the store's drain loop, one effect at a time and in
/// queue order, with the state current at that moment. Whatever it does
/// synchronously (including dispatching) happens before the next effect is
/// invoked. The returned task is spawned and not awaited by the store, so
/// long-running work belongs there.
///
/// Failures are the handler's business: report them by dispatching an action.
pub trait EffectHandler<R: Reducer>: Send + Sync + 'static {
    fn invoke(&self, effect: R::Effect, state: &R::State, dispatch: Dispatcher<R>) -> EffectTask;
}

impl<R: Reducer, H: EffectHandler<R>> EffectHandler<R> for Arc<H> {
    fn invoke(&self, effect: R::Effect, state: &R::State, dispatch: Dispatcher<R>) -> EffectTask {
        (**self).invoke(effect, state, dispatch)
    }
}

/// Handler for reducers that never declare effects.
///
/// Any effect that does reach it is logged and dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffects;

impl<R: Reducer> EffectHandler<R> for NoEffects {
    fn invoke(&self, effect: R::Effect, state: &R::State, _dispatch: Dispatcher<R>) -> EffectTask {
        tracing::warn!(?effect, state = state.name(), "no effect handler installed; effect dropped");
        future::ready(()).boxed()
    }
}

/// Closure adapter, see [`handler_fn`].
pub struct FnHandler<F>(F);

/// Build a handler from a closure.
///
/// ```rust
/// use effect_reducer::core::{Action, Reducer, Reduction, State};
/// use effect_reducer::effects::{handler_fn, Dispatcher, EffectTask};
/// use futures::FutureExt;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Seen(u32);
///
/// impl State for Seen {
///     fn name(&self) -> &str {
///         "Seen"
///     }
/// }
///
/// #[derive(Debug)]
/// enum Msg {
///     Poke,
///     Poked,
/// }
///
/// impl Action for Msg {
///     fn name(&self) -> &str {
///         match self {
///             Self::Poke => "poke",
///             Self::Poked => "poked",
///         }
///     }
/// }
///
/// #[derive(Debug)]
/// struct Acknowledge;
///
/// struct Poker;
///
/// impl Reducer for Poker {
///     type State = Seen;
///     type Action = Msg;
///     type Effect = Acknowledge;
///
///     fn reduce(&self, state: &Seen, action: Msg) -> Reduction<Seen, Acknowledge> {
///         match action {
///             Msg::Poke => Reduction::new(state.clone()).with_effect(Acknowledge),
///             Msg::Poked => Reduction::new(Seen(state.0 + 1)),
///         }
///     }
/// }
///
/// let _handler = handler_fn::<Poker, _>(|_effect, _state, dispatch: Dispatcher<Poker>| -> EffectTask {
///     async move { dispatch.dispatch(Msg::Poked) }.boxed()
/// });
/// ```
pub fn handler_fn<R, F>(f: F) -> FnHandler<F>
where
    R: Reducer,
    F: Fn(R::Effect, &R::State, Dispatcher<R>) -> EffectTask + Send + Sync + 'static,
{
    FnHandler(f)
}

impl<R, F> EffectHandler<R> for FnHandler<F>
where
    R: Reducer,
    F: Fn(R::Effect, &R::State, Dispatcher<R>) -> EffectTask + Send + Sync + 'static,
{
    fn invoke(&self, effect: R::Effect, state: &R::State, dispatch: Dispatcher<R>) -> EffectTask {
        (self.0)(effect, state, dispatch)
    }
}
