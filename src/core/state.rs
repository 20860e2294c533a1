//! The `State` trait implemented by every value a store can own.
//!
//! A store replaces its state wholesale on every transition, so states are
//! plain immutable values: cloneable, comparable and serializable.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for values owned by a store.
///
/// # Required Traits
///
/// - `Clone`: snapshots are handed to subscribers and effect handlers
/// - `PartialEq`: the store only notifies subscribers when the state changed
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `DeserializeOwned`: the UI layer receives states as data
///
/// # Example
///
/// ```rust
/// use effect_reducer::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Welded,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Welded => "Welded",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Welded)
///     }
/// }
///
/// assert_eq!(Door::Closed.name(), "Closed");
/// assert!(Door::Welded.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Name of the state (or of its mode, for structured states) used in
    /// rejection messages and history records.
    fn name(&self) -> &str;

    /// Whether no further transitions are expected from this state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Form {
        submitted: bool,
        name: String,
    }

    impl State for Form {
        fn name(&self) -> &str {
            if self.submitted {
                "Submitted"
            } else {
                "Editing"
            }
        }

        fn is_final(&self) -> bool {
            self.submitted
        }
    }

    #[test]
    fn structured_state_names_its_mode() {
        let editing = Form {
            submitted: false,
            name: "Ada".to_string(),
        };
        let submitted = Form {
            submitted: true,
            ..editing.clone()
        };

        assert_eq!(editing.name(), "Editing");
        assert_eq!(submitted.name(), "Submitted");
        assert!(!editing.is_final());
        assert!(submitted.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = Form {
            submitted: false,
            name: "Grace".to_string(),
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Form = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        let a = Form {
            submitted: false,
            name: "a".to_string(),
        };
        let b = Form {
            name: "b".to_string(),
            ..a.clone()
        };

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
