//! Counters with an asynchronous reset.
//!
//! [`plain`] applies every action unconditionally. [`guarded`] refuses input
//! while a reset is in flight.

pub mod guarded;
pub mod plain;

use std::time::Duration;

/// How long a reset takes unless configured otherwise.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(3);

/// Timing shared by both counter effect handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    /// Delay between requesting a reset and the count returning to zero.
    pub reset_delay: Duration,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }
}

pub fn is_odd(count: i64) -> bool {
    count % 2 != 0
}
