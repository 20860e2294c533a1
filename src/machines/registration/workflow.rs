//! The registration form as a reducer.
//!
//! ```text
//! Updating <--> Validated --submit--> Submitting --succeeded--> Submitted
//!     ^                                   |
//!     +------------- failed --------------+
//! ```

use super::form::{field_message, validate, Field, FieldValue, RegistrationData, ValidationErrors};
use crate::core::{Action, Guard, Reducer, Reduction, State};
use crate::state_enum;
use serde::{Deserialize, Serialize};

state_enum! {
    pub enum FormState {
        Updating,
        Validated,
        Submitting,
        Submitted,
    }
    final: [Submitted]
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationState {
    pub form_state: FormState,
    pub registration_data: RegistrationData,
    pub validation_errors: ValidationErrors,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self {
            form_state: FormState::Updating,
            registration_data: RegistrationData::default(),
            validation_errors: ValidationErrors::new(),
        }
    }
}

impl State for RegistrationState {
    fn name(&self) -> &str {
        self.form_state.name()
    }

    fn is_final(&self) -> bool {
        self.form_state.is_final()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationAction {
    /// Set one field, addressed by key. Moves the form back to `Updating`.
    UpdateField { field: String, value: FieldValue },
    /// Recheck one field and refresh its message.
    ValidateField(String),
    Validate,
    Submit,
    SubmissionSucceeded,
    SubmissionFailed,
    /// Free-form note; logged, state untouched.
    Note(String),
}

impl RegistrationAction {
    pub fn update_field(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::UpdateField {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn validate_field(field: impl Into<String>) -> Self {
        Self::ValidateField(field.into())
    }
}

impl Action for RegistrationAction {
    fn name(&self) -> &str {
        match self {
            Self::UpdateField { .. } => "update_field",
            Self::ValidateField(_) => "validate_field",
            Self::Validate => "validate",
            Self::Submit => "submit",
            Self::SubmissionSucceeded => "submission_succeeded",
            Self::SubmissionFailed => "submission_failed",
            Self::Note(_) => "note",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationEffect {
    /// Send the current registration data and report the outcome.
    SubmitRegistration,
}

#[derive(Debug, Clone)]
pub struct RegistrationReducer {
    editable: Guard<RegistrationState>,
    updating: Guard<RegistrationState>,
    submitting: Guard<RegistrationState>,
}

impl RegistrationReducer {
    pub fn new() -> Self {
        Self {
            editable: Guard::new(|s: &RegistrationState| {
                matches!(s.form_state, FormState::Updating | FormState::Validated)
            }),
            updating: Guard::new(|s: &RegistrationState| s.form_state == FormState::Updating),
            submitting: Guard::new(|s: &RegistrationState| s.form_state == FormState::Submitting),
        }
    }

    /// Run every check. Clean data is `Validated` with no messages; anything
    /// else stays `Updating` with one message per failing field.
    fn validated(state: &RegistrationState) -> RegistrationState {
        match validate(&state.registration_data) {
            Ok(()) => RegistrationState {
                form_state: FormState::Validated,
                validation_errors: ValidationErrors::new(),
                ..state.clone()
            },
            Err(errors) => RegistrationState {
                form_state: FormState::Updating,
                validation_errors: errors,
                ..state.clone()
            },
        }
    }

    fn update_field(
        state: &RegistrationState,
        key: &str,
        value: FieldValue,
    ) -> Reduction<RegistrationState, RegistrationEffect> {
        let updated = key
            .parse::<Field>()
            .and_then(|field| state.registration_data.with_field(field, value));

        match updated {
            Ok(registration_data) => Reduction::new(RegistrationState {
                form_state: FormState::Updating,
                registration_data,
                ..state.clone()
            }),
            Err(rejection) => Reduction::reject(state.clone(), rejection),
        }
    }

    fn validate_field(
        state: &RegistrationState,
        key: &str,
    ) -> Reduction<RegistrationState, RegistrationEffect> {
        let field = match key.parse::<Field>() {
            Ok(field) => field,
            Err(rejection) => return Reduction::reject(state.clone(), rejection),
        };

        let message = field_message(&state.registration_data, field);
        if state.validation_errors.get(&field) == message.as_ref() {
            return Reduction::new(state.clone());
        }

        let mut next = state.clone();
        match message {
            Some(message) => next.validation_errors.insert(field, message),
            None => next.validation_errors.remove(&field),
        };
        Reduction::new(next)
    }

    fn submit(state: &RegistrationState) -> Reduction<RegistrationState, RegistrationEffect> {
        Reduction::new(Self::validated(state)).and_then(|checked| {
            if checked.form_state == FormState::Validated {
                Reduction::new(RegistrationState {
                    form_state: FormState::Submitting,
                    ..checked.clone()
                })
                .with_effect(RegistrationEffect::SubmitRegistration)
            } else {
                Reduction::new(checked.clone())
            }
        })
    }
}

impl Default for RegistrationReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for RegistrationReducer {
    type State = RegistrationState;
    type Action = RegistrationAction;
    type Effect = RegistrationEffect;

    fn reduce(
        &self,
        state: &RegistrationState,
        action: RegistrationAction,
    ) -> Reduction<RegistrationState, RegistrationEffect> {
        let guard = match &action {
            RegistrationAction::UpdateField { .. }
            | RegistrationAction::ValidateField(_)
            | RegistrationAction::Submit => Some(&self.editable),
            RegistrationAction::Validate => Some(&self.updating),
            RegistrationAction::SubmissionSucceeded | RegistrationAction::SubmissionFailed => {
                Some(&self.submitting)
            }
            RegistrationAction::Note(_) => None,
        };
        if let Some(guard) = guard {
            if let Err(rejection) = guard.require(state, action.name()) {
                return Reduction::reject(state.clone(), rejection);
            }
        }

        match action {
            RegistrationAction::UpdateField { field, value } => {
                Self::update_field(state, &field, value)
            }
            RegistrationAction::ValidateField(field) => Self::validate_field(state, &field),
            RegistrationAction::Validate => Reduction::new(Self::validated(state)),
            RegistrationAction::Submit => Self::submit(state),
            RegistrationAction::SubmissionSucceeded => Reduction::new(RegistrationState {
                form_state: FormState::Submitted,
                ..state.clone()
            }),
            RegistrationAction::SubmissionFailed => Reduction::new(RegistrationState {
                form_state: FormState::Updating,
                ..state.clone()
            }),
            RegistrationAction::Note(note) => {
                tracing::info!(form_state = %state.form_state, %note, "registration note");
                Reduction::new(state.clone())
            }
        }
    }
}
