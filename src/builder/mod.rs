//! Builder API for configuring and spawning stores.
//!
//! This module provides the fluent [`StoreBuilder`], the [`StoreConfig`] it
//! fills in, and the [`state_enum!`](crate::state_enum) macro for declaring
//! simple state enums with minimal boilerplate.

pub mod config;
pub mod error;
pub mod macros;
pub mod store;

pub use config::{StoreConfig, DEFAULT_NOTIFY_CAPACITY};
pub use error::BuildError;
pub use store::StoreBuilder;
