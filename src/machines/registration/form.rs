//! Registration data, field addressing and field validation.

use crate::core::Rejection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl FromStr for Gender {
    type Err = Rejection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            other => Err(Rejection::invalid_value(
                Field::Gender.key(),
                format!("expected `female` or `male`, got `{other}`"),
            )),
        }
    }
}

/// A registration field, addressed by its camelCase key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Gender,
    FirstName,
    LastName,
    Email,
    Dob,
    Phone,
    State,
    AcceptedAgreement,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Gender,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Dob,
        Field::Phone,
        Field::State,
        Field::AcceptedAgreement,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Dob => "dob",
            Self::Phone => "phone",
            Self::State => "state",
            Self::AcceptedAgreement => "acceptedAgreement",
        }
    }
}

impl FromStr for Field {
    type Err = Rejection;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| Rejection::unknown_field(key))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw input for a field, as a form control would produce it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub gender: Gender,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: String,
    pub phone: String,
    pub state: String,
    pub accepted_agreement: bool,
}

impl RegistrationData {
    /// Copy of the data with one field replaced. Text is trimmed.
    ///
    /// A value of the wrong kind for the field is an
    /// [`InvalidValue`](Rejection::InvalidValue) rejection.
    pub fn with_field(&self, field: Field, value: FieldValue) -> Result<Self, Rejection> {
        let mut data = self.clone();
        match (field, value) {
            (Field::AcceptedAgreement, FieldValue::Flag(accepted)) => {
                data.accepted_agreement = accepted;
            }
            (Field::Gender, FieldValue::Text(text)) => data.gender = text.parse()?,
            (_, FieldValue::Text(text)) => match data.text_mut(field) {
                Some(slot) => *slot = text.trim().to_string(),
                None => return Err(Rejection::invalid_value(field.key(), "expected a flag")),
            },
            (_, FieldValue::Flag(_)) => {
                return Err(Rejection::invalid_value(field.key(), "expected text"));
            }
        }
        Ok(data)
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Dob => Some(&mut self.dob),
            Field::Phone => Some(&mut self.phone),
            Field::State => Some(&mut self.state),
            Field::Gender | Field::AcceptedAgreement => None,
        }
    }
}

/// Per-field messages carried in the form state.
pub type ValidationErrors = BTreeMap<Field, String>;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Check a single field. Fields without rules always pass.
pub fn check_field(
    data: &RegistrationData,
    field: Field,
) -> Validation<(), NonEmptyVec<FieldError>> {
    let message = match field {
        Field::FirstName if data.first_name.is_empty() => Some("First name is required."),
        Field::LastName if data.last_name.is_empty() => Some("Last name is required."),
        Field::AcceptedAgreement if !data.accepted_agreement => {
            Some("You must agree to the terms of use agreement.")
        }
        _ => None,
    };

    match message {
        Some(message) => Validation::fail(FieldError {
            field,
            message: message.to_string(),
        }),
        None => Validation::success(()),
    }
}

/// Message for one field, if it currently fails its check.
pub fn field_message(data: &RegistrationData, field: Field) -> Option<String> {
    match check_field(data, field) {
        Validation::Success(_) => None,
        Validation::Failure(errors) => errors.iter().next().map(|e| e.message.clone()),
    }
}

/// Check every field, collecting all failures rather than stopping at the first.
pub fn validate(data: &RegistrationData) -> Result<(), ValidationErrors> {
    let checks: Vec<Validation<(), NonEmptyVec<FieldError>>> = Field::ALL
        .into_iter()
        .map(|field| check_field(data, field))
        .collect();

    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors
            .iter()
            .map(|e| (e.field, e.message.clone()))
            .collect()),
    }
}
