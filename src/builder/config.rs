//! Store configuration.

use serde::{Deserialize, Serialize};

/// Capacity of the change-notification channel unless configured otherwise.
pub const DEFAULT_NOTIFY_CAPACITY: usize = 64;

/// Knobs for a store, set through [`StoreBuilder`](crate::builder::StoreBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Keep a [`StateHistory`](crate::core::StateHistory) of applied transitions.
    pub record_history: bool,

    /// How many state changes a subscriber may fall behind before it lags.
    pub notify_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            record_history: false,
            notify_capacity: DEFAULT_NOTIFY_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lean() {
        let config = StoreConfig::default();
        assert!(!config.record_history);
        assert_eq!(config.notify_capacity, DEFAULT_NOTIFY_CAPACITY);
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"record_history":true,"notify_capacity":8}"#).unwrap();
        assert_eq!(
            config,
            StoreConfig {
                record_history: true,
                notify_capacity: 8,
            }
        );
    }
}
