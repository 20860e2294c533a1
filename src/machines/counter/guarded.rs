//! Counter that goes busy while a reset is in flight.
//!
//! ```text
//! Available --reset_async--> Busy --finish--> Available
//! ```
//!
//! Input that changes the count is refused while `Busy`; `finish` is refused
//! while `Available`. The reset effect zeroes the count and then finishes.

use super::{is_odd, CounterConfig};
use crate::core::{Action, Guard, Reducer, Reduction, State};
use crate::effects::{Dispatcher, EffectHandler, EffectTask};
use crate::state_enum;
use futures::FutureExt;
use serde::{Deserialize, Serialize};

state_enum! {
    pub enum Availability {
        Available,
        Busy,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CounterState {
    pub availability: Availability,
    pub count: i64,
}

impl CounterState {
    /// An available counter at `count`.
    pub fn new(count: i64) -> Self {
        Self {
            availability: Availability::Available,
            count,
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl State for CounterState {
    fn name(&self) -> &str {
        self.availability.name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    IncrementIfOdd,
    Bump(i64),
    /// Go busy and start the slow reset.
    ResetAsync,
    /// Zero the count. Unguarded; dispatched by the reset effect.
    Reset,
    /// Leave the busy state.
    Finish,
}

impl Action for CounterAction {
    fn name(&self) -> &str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::IncrementIfOdd => "increment_if_odd",
            Self::Bump(_) => "bump",
            Self::ResetAsync => "reset_async",
            Self::Reset => "reset",
            Self::Finish => "finish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEffect {
    /// Wait, dispatch [`CounterAction::Reset`], then [`CounterAction::Finish`].
    SlowReset,
}

#[derive(Debug, Clone)]
pub struct GuardedCounter {
    available: Guard<CounterState>,
    busy: Guard<CounterState>,
}

impl GuardedCounter {
    pub fn new() -> Self {
        let available = Guard::new(CounterState::is_available);
        let busy = available.negate();
        Self { available, busy }
    }

    fn when_available(
        &self,
        state: &CounterState,
        action: &CounterAction,
        update: impl FnOnce(i64) -> i64,
    ) -> Reduction<CounterState, CounterEffect> {
        match self.available.require(state, action.name()) {
            Ok(()) => Reduction::new(CounterState {
                count: update(state.count),
                ..*state
            }),
            Err(rejection) => Reduction::reject(*state, rejection),
        }
    }
}

impl Default for GuardedCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for GuardedCounter {
    type State = CounterState;
    type Action = CounterAction;
    type Effect = CounterEffect;

    fn reduce(
        &self,
        state: &CounterState,
        action: CounterAction,
    ) -> Reduction<CounterState, CounterEffect> {
        match action {
            CounterAction::Increment => {
                self.when_available(state, &action, |c| c.saturating_add(1))
            }
            CounterAction::Decrement => {
                self.when_available(state, &action, |c| c.saturating_sub(1))
            }
            CounterAction::IncrementIfOdd if !is_odd(state.count) => Reduction::new(*state),
            CounterAction::IncrementIfOdd => {
                self.when_available(state, &action, |c| c.saturating_add(1))
            }
            CounterAction::Bump(n) => self.when_available(state, &action, |c| c.saturating_add(n)),
            CounterAction::ResetAsync => match self.available.require(state, action.name()) {
                Ok(()) => Reduction::new(CounterState {
                    availability: Availability::Busy,
                    ..*state
                })
                .with_effect(CounterEffect::SlowReset),
                Err(rejection) => Reduction::reject(*state, rejection),
            },
            CounterAction::Reset => Reduction::new(CounterState { count: 0, ..*state }),
            CounterAction::Finish => match self.busy.require(state, action.name()) {
                Ok(()) => Reduction::new(CounterState {
                    availability: Availability::Available,
                    ..*state
                }),
                Err(rejection) => Reduction::reject(*state, rejection),
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GuardedCounterEffects {
    config: CounterConfig,
}

impl GuardedCounterEffects {
    pub fn new(config: CounterConfig) -> Self {
        Self { config }
    }
}

impl EffectHandler<GuardedCounter> for GuardedCounterEffects {
    fn invoke(
        &self,
        effect: CounterEffect,
        _state: &CounterState,
        dispatch: Dispatcher<GuardedCounter>,
    ) -> EffectTask {
        match effect {
            CounterEffect::SlowReset => {
                let delay = self.config.reset_delay;
                async move {
                    tokio::time::sleep(delay).await;
                    dispatch.dispatch(CounterAction::Reset);
                    dispatch.dispatch(CounterAction::Finish);
                }
                .boxed()
            }
        }
    }
}
