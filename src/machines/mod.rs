//! Ready-made machines built on the store.
//!
//! - [`counter`]: two counters, one with a busy/available guard table and one
//!   without, both with a delayed asynchronous reset.
//! - [`registration`]: a guarded form workflow whose submission is a simulated
//!   network call.
//! - [`traffic_light`]: a pure, total cycle driven by a timer.

pub mod counter;
pub mod registration;
pub mod traffic_light;
