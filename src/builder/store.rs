//! Builder for spawning stores.

use crate::builder::config::StoreConfig;
use crate::builder::error::BuildError;
use crate::core::Reducer;
use crate::effects::{EffectHandler, Handle, NoEffects, Store};

/// Builder for spawning a store with a fluent API.
///
/// # Example
///
/// ```rust
/// use effect_reducer::builder::StoreBuilder;
/// use effect_reducer::machines::counter::plain::{Count, CountAction, PlainCounter};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), effect_reducer::builder::BuildError> {
/// let handle = StoreBuilder::new(PlainCounter)
///     .initial(Count(0))
///     .record_history(true)
///     .build()?;
///
/// handle.dispatch(CountAction::Increment);
/// handle.flush().await;
/// assert_eq!(handle.current_state(), Count(1));
/// # Ok(())
/// # }
/// ```
pub struct StoreBuilder<R: Reducer, H = NoEffects> {
    reducer: R,
    handler: H,
    initial: Option<R::State>,
    config: StoreConfig,
}

impl<R: Reducer> StoreBuilder<R, NoEffects> {
    /// Start building a store around `reducer`, with no effect handler.
    pub fn new(reducer: R) -> Self {
        Self {
            reducer,
            handler: NoEffects,
            initial: None,
            config: StoreConfig::default(),
        }
    }
}

impl<R: Reducer, H: EffectHandler<R>> StoreBuilder<R, H> {
    /// Set the initial state (required).
    pub fn initial(mut self, state: R::State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Install the handler that runs declared effects.
    pub fn effects<E: EffectHandler<R>>(self, handler: E) -> StoreBuilder<R, E> {
        StoreBuilder {
            reducer: self.reducer,
            handler,
            initial: self.initial,
            config: self.config,
        }
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    pub fn notify_capacity(mut self, capacity: usize) -> Self {
        self.config.notify_capacity = capacity;
        self
    }

    /// Replace the whole configuration at once.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Spawn the store on the current tokio runtime.
    pub fn build(self) -> Result<Handle<R>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.config.notify_capacity == 0 {
            return Err(BuildError::ZeroNotifyCapacity);
        }
        tokio::runtime::Handle::try_current().map_err(|_| BuildError::NoRuntime)?;

        Ok(Store::launch(
            self.reducer,
            self.handler,
            initial,
            &self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Reduction, State};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Switch {
        Off,
        On,
    }

    impl State for Switch {
        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::On => "On",
            }
        }
    }

    #[derive(Debug)]
    struct Flip;

    impl Action for Flip {
        fn name(&self) -> &str {
            "flip"
        }
    }

    struct Flipper;

    impl Reducer for Flipper {
        type State = Switch;
        type Action = Flip;
        type Effect = ();

        fn reduce(&self, state: &Switch, _action: Flip) -> Reduction<Switch, ()> {
            match state {
                Switch::Off => Reduction::new(Switch::On),
                Switch::On => Reduction::new(Switch::Off),
            }
        }
    }

    #[tokio::test]
    async fn builder_validates_initial_state() {
        let result = StoreBuilder::new(Flipper).build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[tokio::test]
    async fn builder_rejects_zero_capacity() {
        let result = StoreBuilder::new(Flipper)
            .initial(Switch::Off)
            .notify_capacity(0)
            .build();

        assert!(matches!(result, Err(BuildError::ZeroNotifyCapacity)));
    }

    #[test]
    fn builder_requires_runtime() {
        let result = StoreBuilder::new(Flipper).initial(Switch::Off).build();

        assert!(matches!(result, Err(BuildError::NoRuntime)));
    }

    #[tokio::test]
    async fn fluent_api_builds_store() {
        let handle = StoreBuilder::new(Flipper)
            .initial(Switch::Off)
            .config(StoreConfig {
                record_history: true,
                notify_capacity: 4,
            })
            .build()
            .unwrap();

        handle.dispatch(Flip);
        handle.dispatch(Flip);
        handle.dispatch(Flip);
        handle.flush().await;

        assert_eq!(handle.current_state(), Switch::On);
        let history = handle.history().await.unwrap();
        assert_eq!(history.len(), 3);
    }
}
