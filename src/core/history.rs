//! Record of the transitions a store has applied.
//!
//! Only state-changing actions are recorded; rejected actions and reductions
//! that return an equal state leave no trace.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One applied action and the states on either side of it.
///
/// # Example
///
/// ```rust
/// use effect_reducer::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Lamp::Off,
///     to: Lamp::On,
///     action: "toggle".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.action, "toggle");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state the action was applied to
    pub from: S,
    /// The state the action produced
    pub to: S,
    /// Name of the applied action
    pub action: String,
    /// When the store applied it
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// `record` is pure and returns a new history; the store itself appends in
/// place.
///
/// # Example
///
/// ```rust
/// use effect_reducer::core::{State, StateHistory, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Step {
///     Start,
///     Middle,
///     End,
/// }
///
/// impl State for Step {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::Middle => "Middle",
///             Self::End => "End",
///         }
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Step::Start,
///         to: Step::Middle,
///         action: "advance".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Step::Middle,
///         to: Step::End,
///         action: "advance".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec![&Step::Start, &Step::Middle, &Step::End]);
/// assert_eq!(history.actions(), vec!["advance", "advance"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history and leaving `self` as is.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// States traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Names of the applied actions, oldest first.
    pub fn actions(&self) -> Vec<&str> {
        self.transitions
            .iter()
            .map(|t| t.action.as_str())
            .collect()
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
