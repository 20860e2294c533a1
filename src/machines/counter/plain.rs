//! Counter without guards: every action always applies.

use super::{is_odd, CounterConfig};
use crate::core::{Action, Reducer, Reduction, State};
use crate::effects::{Dispatcher, EffectHandler, EffectTask};
use futures::FutureExt;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Count(pub i64);

impl State for Count {
    fn name(&self) -> &str {
        "Count"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountAction {
    Increment,
    Decrement,
    /// Increment only when the count is odd.
    IncrementIfOdd,
    Bump(i64),
    /// Ask for a reset; the count is untouched until the delayed effect fires.
    ResetAsync,
    Reset,
}

impl Action for CountAction {
    fn name(&self) -> &str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::IncrementIfOdd => "increment_if_odd",
            Self::Bump(_) => "bump",
            Self::ResetAsync => "reset_async",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountEffect {
    /// Wait out the reset delay, then dispatch [`CountAction::Reset`].
    DelayedReset,
}

/// Arithmetic saturates so that no action can fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCounter;

impl Reducer for PlainCounter {
    type State = Count;
    type Action = CountAction;
    type Effect = CountEffect;

    fn reduce(&self, state: &Count, action: CountAction) -> Reduction<Count, CountEffect> {
        let Count(count) = *state;
        match action {
            CountAction::Increment => Reduction::new(Count(count.saturating_add(1))),
            CountAction::Decrement => Reduction::new(Count(count.saturating_sub(1))),
            CountAction::IncrementIfOdd if is_odd(count) => {
                Reduction::new(Count(count.saturating_add(1)))
            }
            CountAction::IncrementIfOdd => Reduction::new(*state),
            CountAction::Bump(n) => Reduction::new(Count(count.saturating_add(n))),
            CountAction::ResetAsync => Reduction::new(*state).with_effect(CountEffect::DelayedReset),
            CountAction::Reset => Reduction::new(Count(0)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlainCounterEffects {
    config: CounterConfig,
}

impl PlainCounterEffects {
    pub fn new(config: CounterConfig) -> Self {
        Self { config }
    }
}

impl EffectHandler<PlainCounter> for PlainCounterEffects {
    fn invoke(
        &self,
        effect: CountEffect,
        _state: &Count,
        dispatch: Dispatcher<PlainCounter>,
    ) -> EffectTask {
        match effect {
            CountEffect::DelayedReset => {
                let delay = self.config.reset_delay;
                async move {
                    tokio::time::sleep(delay).await;
                    dispatch.dispatch(CountAction::Reset);
                }
                .boxed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::replay;

    #[test]
    fn increment_if_odd_only_moves_odd_counts() {
        let even = PlainCounter.reduce(&Count(4), CountAction::IncrementIfOdd);
        let odd = PlainCounter.reduce(&Count(5), CountAction::IncrementIfOdd);

        assert_eq!(even.state(), &Count(4));
        assert_eq!(odd.state(), &Count(6));
    }

    #[test]
    fn reset_async_declares_effect_without_touching_count() {
        let reduction = PlainCounter.reduce(&Count(7), CountAction::ResetAsync);

        assert_eq!(reduction.state(), &Count(7));
        assert_eq!(reduction.effects(), &[CountEffect::DelayedReset]);
    }

    #[test]
    fn scenario_reaches_seven() {
        let (state, effects) = replay(
            &PlainCounter,
            Count(0),
            [
                CountAction::Increment,
                CountAction::IncrementIfOdd,
                CountAction::Bump(5),
            ],
        );

        assert_eq!(state, Count(7));
        assert!(effects.is_empty());
    }

    #[test]
    fn bump_saturates_instead_of_overflowing() {
        let reduction = PlainCounter.reduce(&Count(i64::MAX - 1), CountAction::Bump(10));
        assert_eq!(reduction.state(), &Count(i64::MAX));
    }

    #[test]
    fn nothing_is_ever_rejected() {
        let actions = [
            CountAction::Increment,
            CountAction::Decrement,
            CountAction::IncrementIfOdd,
            CountAction::Bump(-3),
            CountAction::ResetAsync,
            CountAction::Reset,
        ];
        for action in actions {
            assert!(!PlainCounter.reduce(&Count(1), action).is_rejected());
        }
    }
}
