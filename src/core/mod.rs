//! Pure core: states, actions, reducers and guards.
//!
//! Nothing in this module executes a side effect. Reducers describe the next
//! state and *declare* effects; the [`effects`](crate::effects) module runs
//! them.

mod guard;
mod history;
mod reducer;
mod reduction;
mod rejection;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use reducer::{replay, Action, Reducer};
pub use reduction::Reduction;
pub use rejection::Rejection;
pub use state::State;
