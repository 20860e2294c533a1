//! The `Reducer` contract and pure helpers built on it.

use super::reduction::Reduction;
use super::state::State;
use std::fmt::Debug;

/// A message a reducer knows how to apply.
///
/// Actions are plain data (usually an enum) so they can cross the store's
/// channel and be compared in tests. `name` feeds rejection messages and the
/// transition history.
pub trait Action: Debug + Send + 'static {
    fn name(&self) -> &str;
}

/// Pure transition logic: `(state, action) -> (state, effects)`.
///
/// Implementations must be referentially transparent. They never perform I/O
/// (logging aside) and never execute the effects they declare; a
/// [`Store`](crate::effects::Store) does that.
///
/// # Example
///
/// ```rust
/// use effect_reducer::core::{Action, Reducer, Reduction, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Total(i64);
///
/// impl State for Total {
///     fn name(&self) -> &str {
///         "Total"
///     }
/// }
///
/// #[derive(Debug)]
/// enum Op {
///     Add(i64),
///     Announce,
/// }
///
/// impl Action for Op {
///     fn name(&self) -> &str {
///         match self {
///             Self::Add(_) => "add",
///             Self::Announce => "announce",
///         }
///     }
/// }
///
/// #[derive(Debug, PartialEq)]
/// struct Print(i64);
///
/// struct Adder;
///
/// impl Reducer for Adder {
///     type State = Total;
///     type Action = Op;
///     type Effect = Print;
///
///     fn reduce(&self, state: &Total, action: Op) -> Reduction<Total, Print> {
///         match action {
///             Op::Add(n) => Reduction::new(Total(state.0 + n)),
///             Op::Announce => Reduction::new(state.clone()).with_effect(Print(state.0)),
///         }
///     }
/// }
///
/// let reduction = Adder.reduce(&Total(2), Op::Announce);
/// assert_eq!(reduction.effects(), &[Print(2)]);
/// ```
pub trait Reducer: Send + Sync + 'static {
    type State: State;
    type Action: Action;
    type Effect: Debug + Send + 'static;

    fn reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
    ) -> Reduction<Self::State, Self::Effect>;
}

/// Apply `actions` in order starting from `initial`, without a store.
///
/// Returns the final state and every declared effect in the order a store
/// would have queued them. Since reducers are pure, replaying the same actions
/// always reproduces the same result.
pub fn replay<R, I>(reducer: &R, initial: R::State, actions: I) -> (R::State, Vec<R::Effect>)
where
    R: Reducer,
    I: IntoIterator<Item = R::Action>,
{
    actions
        .into_iter()
        .fold((initial, Vec::new()), |(state, mut effects), action| {
            let (next, declared) = reducer.reduce(&state, action).into_parts();
            effects.extend(declared);
            (next, effects)
        })
}
