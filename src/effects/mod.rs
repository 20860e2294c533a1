//! Imperative shell: the store that applies actions and runs effects.
//!
//! # Key Concepts
//!
//! - **Store**: a tokio task that owns the current state and a FIFO queue of
//!   pending effects. It is the only writer of the state.
//! - **Dispatcher**: a cloneable sender of actions, handed to callers and to
//!   every effect invocation.
//! - **Effect handler**: turns a declared effect into a spawned task, given the
//!   state current when the effect reaches the front of the queue.
//!
//! # Ordering
//!
//! - Actions are applied in the order they are dispatched.
//! - Effects are invoked strictly in queue order, one at a time, across the
//!   whole life of the store. An effect's task is spawned rather than awaited,
//!   so a slow effect never holds up the ones behind it.
//! - An effect sees the state as of its invocation, not as of its declaration.

mod dispatcher;
mod handler;
mod store;

pub use dispatcher::Dispatcher;
pub use handler::{handler_fn, EffectHandler, EffectTask, FnHandler, NoEffects};
pub use store::{Handle, Store};
