use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{
    contact::{ContactEmail, ContactFirstName, ContactLastName},
    field::ContactFormField,
};

/// A failed validation rule. The display text is the message shown below the
/// offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("firstName must have at least 5 characters")]
    FirstNameTooShort,
    #[error("lastName is a required field")]
    LastNameRequired,
    #[error("email must be a valid email address")]
    EmailInvalid,
}

impl FieldError {
    pub fn field(self) -> ContactFormField {
        match self {
            Self::FirstNameTooShort => ContactFormField::FirstName,
            Self::LastNameRequired => ContactFormField::LastName,
            Self::EmailInvalid => ContactFormField::Email,
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub type ValidationRule = fn(&str) -> Result<(), FieldError>;

/// Returns the validation rule of the given field.
pub fn rule(field: ContactFormField) -> ValidationRule {
    match field {
        ContactFormField::FirstName => first_name,
        ContactFormField::LastName => last_name,
        ContactFormField::Email => email,
        ContactFormField::Message => message,
    }
}

pub fn validate(field: ContactFormField, value: &str) -> Result<(), FieldError> {
    rule(field)(value)
}

fn first_name(value: &str) -> Result<(), FieldError> {
    ContactFirstName::parse(value).map(drop)
}

fn last_name(value: &str) -> Result<(), FieldError> {
    ContactLastName::parse(value).map(drop)
}

fn email(value: &str) -> Result<(), FieldError> {
    ContactEmail::parse(value).map(drop)
}

fn message(_value: &str) -> Result<(), FieldError> {
    Ok(())
}

/// Current error of each invalid field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<ContactFormField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactFormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Stores the outcome of `field`'s rule, removing a stale entry when the
    /// rule passed.
    pub fn update(&mut self, field: ContactFormField, result: Result<(), FieldError>) {
        match result {
            Ok(()) => self.0.remove(&field),
            Err(err) => self.0.insert(field, err),
        };
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactFormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactFormField, FieldError)> + '_ {
        self.0.iter().map(|(&field, &err)| (field, err))
    }

    pub fn retain(&mut self, mut f: impl FnMut(ContactFormField) -> bool) {
        self.0.retain(|&field, _| f(field));
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        Self(iter.into_iter().map(|err| (err.field(), err)).collect())
    }
}
