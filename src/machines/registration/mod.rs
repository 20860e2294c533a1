//! Registration form: edit fields, validate, submit, await the outcome.
//!
//! The reducer in [`workflow`] never talks to the outside world. Submitting
//! a clean form yields a [`RegistrationEffect::SubmitRegistration`], which
//! [`RegistrationEffects`] turns into a delayed call to a pluggable
//! [`SubmissionStrategy`] followed by a `SubmissionSucceeded` or
//! `SubmissionFailed` action.

pub mod form;
pub mod submission;
pub mod workflow;

pub use form::{
    check_field, field_message, validate, Field, FieldError, FieldValue, Gender,
    RegistrationData, ValidationErrors,
};
pub use submission::{
    Alternating, AlwaysFail, AlwaysSucceed, RegistrationConfig, RegistrationEffects,
    SubmissionError, SubmissionStrategy, DEFAULT_SUBMISSION_DELAY,
};
pub use workflow::{
    FormState, RegistrationAction, RegistrationEffect, RegistrationReducer, RegistrationState,
};
