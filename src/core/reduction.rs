//! The value a reducer returns: the next state plus the effects it declares.

use super::rejection::Rejection;
use super::state::State;

/// Outcome of applying one action to one state.
///
/// A reduction never executes its effects; the store queues them and hands
/// them to an effect handler later. Two reductions of the same `(state,
/// action)` pair compare equal, so reducers can be tested without a runtime.
///
/// # Example
///
/// ```rust
/// use effect_reducer::core::{Reduction, Rejection, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Clicks(u32);
///
/// impl State for Clicks {
///     fn name(&self) -> &str {
///         "Clicks"
///     }
/// }
///
/// let next: Reduction<Clicks, &str> = Reduction::new(Clicks(1)).with_effect("beep");
/// assert_eq!(next.state(), &Clicks(1));
/// assert_eq!(next.effects(), &["beep"]);
///
/// let refused: Reduction<Clicks, &str> =
///     Reduction::reject(Clicks(1), Rejection::invalid_state("click", "Clicks"));
/// assert!(refused.is_rejected());
/// assert!(refused.effects().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Reduction<S, E> {
    state: S,
    effects: Vec<E>,
    rejection: Option<Rejection>,
}

impl<S: State, E> Reduction<S, E> {
    /// A transition to `state` with no effects.
    pub fn new(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
            rejection: None,
        }
    }

    /// Refuse the action: `state` is handed back as-is and no effects run.
    ///
    /// The rejection is reported on the diagnostic channel here, so callers
    /// never have to.
    pub fn reject(state: S, rejection: Rejection) -> Self {
        tracing::warn!(state = state.name(), %rejection, "action rejected");
        Self {
            state,
            effects: Vec::new(),
            rejection: Some(rejection),
        }
    }

    pub fn with_effect(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = E>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// Compose with a follow-up reduction computed from this one's state.
    ///
    /// Effects concatenate in order. A rejection on either side short-circuits:
    /// the result carries the state reached so far, the rejection, and no
    /// effects at all.
    pub fn and_then<F>(self, next: F) -> Self
    where
        F: FnOnce(&S) -> Reduction<S, E>,
    {
        if self.rejection.is_some() {
            return self;
        }

        let follow_up = next(&self.state);
        if follow_up.rejection.is_some() {
            return Self {
                effects: Vec::new(),
                ..follow_up
            };
        }

        let mut effects = self.effects;
        effects.extend(follow_up.effects);
        Self {
            state: follow_up.state,
            effects,
            rejection: None,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn effects(&self) -> &[E] {
        &self.effects
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    pub fn into_parts(self) -> (S, Vec<E>) {
        (self.state, self.effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Level(i32);

    impl State for Level {
        fn name(&self) -> &str {
            "Level"
        }
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Sound {
        Up,
        Down,
    }

    fn refuse(state: &Level) -> Reduction<Level, Sound> {
        Reduction::reject(state.clone(), Rejection::invalid_state("raise", "Level"))
    }

    #[test]
    fn effects_keep_declaration_order() {
        let reduction = Reduction::new(Level(1))
            .with_effect(Sound::Up)
            .with_effects([Sound::Down, Sound::Up]);

        assert_eq!(reduction.effects(), &[Sound::Up, Sound::Down, Sound::Up]);
        assert!(!reduction.is_rejected());
    }

    #[test]
    fn and_then_concatenates_effects() {
        let reduction = Reduction::new(Level(1))
            .with_effect(Sound::Up)
            .and_then(|s| Reduction::new(Level(s.0 + 1)).with_effect(Sound::Down));

        assert_eq!(reduction.state(), &Level(2));
        assert_eq!(reduction.effects(), &[Sound::Up, Sound::Down]);
    }

    #[test]
    fn and_then_drops_effects_when_follow_up_rejects() {
        let reduction = Reduction::new(Level(5))
            .with_effect(Sound::Up)
            .and_then(refuse);

        assert_eq!(reduction.state(), &Level(5));
        assert!(reduction.effects().is_empty());
        assert!(reduction.is_rejected());
    }

    #[test]
    fn and_then_skips_follow_up_after_rejection() {
        let reduction = refuse(&Level(3)).and_then(|_| Reduction::new(Level(100)));

        assert_eq!(reduction.state(), &Level(3));
        assert_eq!(
            reduction.rejection(),
            Some(&Rejection::invalid_state("raise", "Level"))
        );
    }

    #[test]
    fn into_parts_splits_state_and_effects() {
        let (state, effects) = Reduction::new(Level(9)).with_effect(Sound::Down).into_parts();

        assert_eq!(state, Level(9));
        assert_eq!(effects, vec![Sound::Down]);
    }
}
