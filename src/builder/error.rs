//! Errors raised while building a store.

use thiserror::Error;

/// Errors that can occur when building a store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Notification capacity must be at least 1")]
    ZeroNotifyCapacity,

    #[error("No tokio runtime is running. Build the store from within a runtime")]
    NoRuntime,
}
