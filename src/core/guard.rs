//! Guard predicates for refusing actions in the wrong state.
//!
//! Guards are pure boolean functions over the current state. Reducers keep
//! them as fields and consult them before transitioning; a failed guard turns
//! into a [`Rejection`] rather than an error.

use super::rejection::Rejection;
use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Pure predicate that decides whether an action may run in a state.
///
/// # Example
///
/// ```rust
/// use effect_reducer::core::{Guard, Rejection, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Mode {
///     Idle,
///     Busy,
/// }
///
/// impl State for Mode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Busy => "Busy",
///         }
///     }
/// }
///
/// let idle = Guard::new(|m: &Mode| matches!(m, Mode::Idle));
///
/// assert!(idle.check(&Mode::Idle));
/// assert!(idle.require(&Mode::Idle, "start").is_ok());
/// assert_eq!(
///     idle.require(&Mode::Busy, "start"),
///     Err(Rejection::invalid_state("start", "Busy")),
/// );
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard admits this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    /// Like [`check`](Self::check), but names the refused action.
    pub fn require(&self, state: &S, action: &str) -> Result<(), Rejection> {
        if self.check(state) {
            Ok(())
        } else {
            Err(Rejection::invalid_state(action, state.name()))
        }
    }

    /// Guard admitting exactly the states the other one refuses.
    pub fn negate(&self) -> Self {
        let predicate = Arc::clone(&self.predicate);
        Guard::new(move |s: &S| !predicate(s))
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Phase {
        Draft,
        Sending,
        Sent,
    }

    impl State for Phase {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "Draft",
                Self::Sending => "Sending",
                Self::Sent => "Sent",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Sent)
        }
    }

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &Phase| matches!(s, Phase::Draft));

        assert!(guard.check(&Phase::Draft));
        assert!(!guard.check(&Phase::Sending));
    }

    #[test]
    fn require_names_action_and_state() {
        let sending = Guard::new(|s: &Phase| matches!(s, Phase::Sending));

        assert_eq!(sending.require(&Phase::Sending, "finish"), Ok(()));
        assert_eq!(
            sending.require(&Phase::Sent, "finish"),
            Err(Rejection::InvalidState {
                action: "finish".to_string(),
                state: "Sent".to_string(),
            })
        );
    }

    #[test]
    fn negated_guard_flips_every_answer() {
        let draft = Guard::new(|s: &Phase| matches!(s, Phase::Draft));
        let not_draft = draft.negate();

        for phase in [Phase::Draft, Phase::Sending, Phase::Sent] {
            assert_ne!(draft.check(&phase), not_draft.check(&phase));
        }
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let open = Guard::new(|s: &Phase| !s.is_final());
        let copy = open.clone();

        assert_eq!(open.check(&Phase::Sent), copy.check(&Phase::Sent));
        assert_eq!(open.check(&Phase::Draft), copy.check(&Phase::Draft));
    }
}
