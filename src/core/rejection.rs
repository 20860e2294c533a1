//! Reasons a reducer refuses an action.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an action left the state untouched.
///
/// Rejections never reach the caller of `dispatch`; they ride along on the
/// [`Reduction`](crate::core::Reduction) and are logged at `warn` level.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("can't {action} in {state} state")]
    InvalidState { action: String, state: String },

    #[error("unrecognized field `{field}`")]
    UnknownField { field: String },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl Rejection {
    pub fn invalid_state(action: impl Into<String>, state: impl Into<String>) -> Self {
        Self::InvalidState {
            action: action.into(),
            state: state.into(),
        }
    }

    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
