//! Traffic light: green, yellow, red, and around again.
//!
//! The reducer is total and declares no effects. Time is supplied from the
//! outside by [`spawn_timer`], which dispatches `Advance` after the current
//! color's duration has elapsed.

use crate::core::{Action, Reducer, Reduction};
use crate::effects::Handle;
use crate::state_enum;
use futures::future::{self, Either};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::pin::pin;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::Instrument;

state_enum! {
    pub enum TrafficLight {
        Green,
        Yellow,
        Red,
    }
}

impl TrafficLight {
    pub fn next(self) -> Self {
        match self {
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Red,
            Self::Red => Self::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficLightAction {
    Advance,
}

impl Action for TrafficLightAction {
    fn name(&self) -> &str {
        "advance"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TrafficLightReducer;

impl Reducer for TrafficLightReducer {
    type State = TrafficLight;
    type Action = TrafficLightAction;
    type Effect = Infallible;

    fn reduce(
        &self,
        state: &TrafficLight,
        action: TrafficLightAction,
    ) -> Reduction<TrafficLight, Infallible> {
        match action {
            TrafficLightAction::Advance => Reduction::new(state.next()),
        }
    }
}

/// How long each color is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficLightTimings {
    pub green: Duration,
    pub yellow: Duration,
    pub red: Duration,
}

impl TrafficLightTimings {
    pub fn duration(&self, color: TrafficLight) -> Duration {
        match color {
            TrafficLight::Green => self.green,
            TrafficLight::Yellow => self.yellow,
            TrafficLight::Red => self.red,
        }
    }

    /// Length of one full green-yellow-red cycle.
    pub fn cycle(&self) -> Duration {
        self.green + self.yellow + self.red
    }
}

impl Default for TrafficLightTimings {
    fn default() -> Self {
        Self {
            green: Duration::from_secs(2),
            yellow: Duration::from_secs(2),
            red: Duration::from_secs(4),
        }
    }
}

/// Drive a traffic light store in real time.
///
/// Each color gets its full duration, measured from the moment it appears.
/// A change made by anyone else cancels the pending countdown and starts the
/// next one.
///
/// The timer holds a dispatcher, so the store stays alive until the returned
/// task is aborted.
pub fn spawn_timer(
    handle: &Handle<TrafficLightReducer>,
    timings: TrafficLightTimings,
) -> JoinHandle<()> {
    let dispatcher = handle.dispatcher();
    let mut colors = handle.watch();

    tokio::spawn(
        async move {
            loop {
                let color = *colors.borrow_and_update();
                let elapsed = {
                    let countdown = pin!(tokio::time::sleep(timings.duration(color)));
                    let changed = pin!(colors.changed());
                    match future::select(countdown, changed).await {
                        Either::Left(_) => true,
                        Either::Right((Ok(()), _)) => false,
                        Either::Right((Err(_), _)) => break,
                    }
                };

                if elapsed {
                    tracing::trace!(%color, "light timer elapsed");
                    dispatcher.dispatch(TrafficLightAction::Advance);
                } else {
                    tracing::trace!(%color, "light changed; countdown restarted");
                }
            }
        }
        .in_current_span(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::replay;

    #[test]
    fn advance_cycles_through_every_color() {
        let reducer = TrafficLightReducer;

        let seen: Vec<TrafficLight> = TrafficLight::ALL
            .iter()
            .map(|color| *reducer.reduce(color, TrafficLightAction::Advance).state())
            .collect();

        assert_eq!(
            seen,
            vec![TrafficLight::Yellow, TrafficLight::Red, TrafficLight::Green]
        );
    }

    #[test]
    fn three_advances_come_back_around() {
        let (state, effects) = replay(
            &TrafficLightReducer,
            TrafficLight::Red,
            [TrafficLightAction::Advance; 3],
        );

        assert_eq!(state, TrafficLight::Red);
        assert!(effects.is_empty());
    }

    #[test]
    fn default_timings() {
        let timings = TrafficLightTimings::default();

        assert_eq!(timings.duration(TrafficLight::Red), Duration::from_secs(4));
        assert_eq!(timings.cycle(), Duration::from_secs(8));
    }
}
