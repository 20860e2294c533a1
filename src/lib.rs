//! Effect Reducer: state machines whose side effects are queued, not run.
//!
//! A reducer is a pure function from `(state, action)` to the next state plus
//! a list of *declared* effects. The store applies actions one at a time,
//! queues the declared effects, and hands them to an effect handler in order.
//! Handlers get a dispatcher so that work they start can feed actions back in.
//!
//! # Core Concepts
//!
//! - **State**: the value a store holds, via the [`State`] trait
//! - **Reducer**: pure transition logic, via the [`Reducer`] trait
//! - **Guards**: predicates that decide whether an action may apply
//! - **Effects**: plain data, executed later by an [`EffectHandler`]
//! - **Store**: the single owner of the state and its effect queue
//!
//! # Example
//!
//! ```rust
//! use effect_reducer::core::{Action, Reducer, Reduction, State};
//! use effect_reducer::effects::{handler_fn, Store};
//! use futures::FutureExt;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! struct Doorbell {
//!     rings: u32,
//! }
//!
//! impl State for Doorbell {
//!     fn name(&self) -> &str {
//!         "Doorbell"
//!     }
//! }
//!
//! #[derive(Debug)]
//! enum Press {
//!     Button,
//!     Answered,
//! }
//!
//! impl Action for Press {
//!     fn name(&self) -> &str {
//!         match self {
//!             Self::Button => "button",
//!             Self::Answered => "answered",
//!         }
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Chime;
//!
//! struct Bell;
//!
//! impl Reducer for Bell {
//!     type State = Doorbell;
//!     type Action = Press;
//!     type Effect = Chime;
//!
//!     fn reduce(&self, state: &Doorbell, action: Press) -> Reduction<Doorbell, Chime> {
//!         match action {
//!             Press::Button => Reduction::new(Doorbell { rings: state.rings + 1 }).with_effect(Chime),
//!             Press::Answered => Reduction::new(Doorbell { rings: 0 }),
//!         }
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let chime = handler_fn::<Bell, _>(|_chime, _state, dispatch| {
//!     async move { dispatch.dispatch(Press::Answered) }.boxed()
//! });
//!
//! let handle = Store::spawn(Bell, chime, Doorbell { rings: 0 });
//! handle.dispatch(Press::Button);
//! handle.flush().await;
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod machines;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder, StoreConfig};
pub use core::{Action, Guard, Reducer, Reduction, Rejection, State, StateHistory};
pub use effects::{Dispatcher, EffectHandler, Handle, Store};
