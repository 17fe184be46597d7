use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    field::ContactFormField,
    macros::nutype_string,
    validation::{FieldError, FieldErrors},
};

/// Local part, `@`, and a domain made of at least two non-empty labels.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").unwrap());

nutype_string!(ContactFirstName(validate(len_char_min = ContactFirstName::MIN_LENGTH)));
impl ContactFirstName {
    pub const MIN_LENGTH: usize = 5;

    pub fn parse(value: &str) -> Result<Self, FieldError> {
        Self::try_new(value.to_owned()).map_err(|_| FieldError::FirstNameTooShort)
    }
}

nutype_string!(ContactLastName(validate(not_empty)));
impl ContactLastName {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        Self::try_new(value.to_owned()).map_err(|_| FieldError::LastNameRequired)
    }
}

nutype_string!(ContactEmail(validate(regex = CONTACT_EMAIL_REGEX)));
impl ContactEmail {
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        Self::try_new(value.to_owned()).map_err(|_| FieldError::EmailInvalid)
    }
}

#[nutype(
    derive(Debug, Clone, PartialEq, Eq, Hash, Deref, From, Default, Serialize, Deserialize),
    default = String::new()
)]
pub struct ContactMessage(String);

/// The raw strings currently entered into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: ContactFormField) -> &str {
        match field {
            ContactFormField::FirstName => &self.first_name,
            ContactFormField::LastName => &self.last_name,
            ContactFormField::Email => &self.email,
            ContactFormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactFormField, value: String) {
        let slot = match field {
            ContactFormField::FirstName => &mut self.first_name,
            ContactFormField::LastName => &mut self.last_name,
            ContactFormField::Email => &mut self.email,
            ContactFormField::Message => &mut self.message,
        };
        *slot = value;
    }
}

/// Snapshot of the form taken by a successful submit.
///
/// Every field has passed its validation rule, so a record can only be
/// obtained through [`SubmittedRecord::try_from_values`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRecord {
    pub first_name: ContactFirstName,
    pub last_name: ContactLastName,
    pub email: ContactEmail,
    pub message: ContactMessage,
}

impl SubmittedRecord {
    /// Validates all fields at once and returns every violation on failure.
    pub fn try_from_values(values: &FieldValues) -> Result<Self, FieldErrors> {
        match (
            ContactFirstName::parse(&values.first_name),
            ContactLastName::parse(&values.last_name),
            ContactEmail::parse(&values.email),
        ) {
            (Ok(first_name), Ok(last_name), Ok(email)) => Ok(Self {
                first_name,
                last_name,
                email,
                message: ContactMessage::new(values.message.clone()),
            }),
            (first_name, last_name, email) => Err([first_name.err(), last_name.err(), email.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }

    pub fn values(&self) -> FieldValues {
        FieldValues {
            first_name: (*self.first_name).clone(),
            last_name: (*self.last_name).clone(),
            email: (*self.email).clone(),
            message: (*self.message).clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use contact_form_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn values(first_name: &str, last_name: &str, email: &str, message: &str) -> FieldValues {
        FieldValues {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn email_regex() {
        for (input, expected) in [
            ("stephen.king@tourism.maine.gov", true),
            ("a@b.c", true),
            ("first+tag@example.co.uk", true),
            ("stephen.king@", false),
            ("stephen.king@maine", false),
            ("@maine.gov", false),
            ("stephen king@maine.gov", false),
            ("stephen@maine..gov", false),
            ("stephen@@maine.gov", false),
            ("", false),
        ] {
            assert_eq!(CONTACT_EMAIL_REGEX.is_match(input), expected, "{input}");
        }
    }

    #[test]
    fn field_values_get_set() {
        let mut values = FieldValues::default();
        for field in ContactFormField::ALL {
            assert_eq!(values.get(field), "");
            values.set(field, field.to_string());
        }

        assert_eq!(values, values_for_names());
    }

    fn values_for_names() -> FieldValues {
        values("firstName", "lastName", "email", "message")
    }

    #[test]
    fn try_from_values_ok() {
        let input = values(
            "Stephen",
            "King",
            "stephen.king@tourism.maine.gov",
            "Hello",
        );

        let record = SubmittedRecord::try_from_values(&input).unwrap();

        assert_eq!(record.values(), input);
    }

    #[test]
    fn try_from_values_empty() {
        let result = SubmittedRecord::try_from_values(&FieldValues::default());

        assert_matches!(result, Err(errors) if errors.fields().eq([
            ContactFormField::FirstName,
            ContactFormField::LastName,
            ContactFormField::Email,
        ]));
    }

    #[test]
    fn try_from_values_missing_email() {
        let result = SubmittedRecord::try_from_values(&values("Stephen", "King", "", ""));

        assert_matches!(result, Err(errors) if errors.fields().eq([ContactFormField::Email]));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let input = values("     ", " ", "stephen.king@tourism.maine.gov", "  ");

        let record = SubmittedRecord::try_from_values(&input).unwrap();

        assert_eq!(record.first_name.as_str(), "     ");
        assert_eq!(record.last_name.as_str(), " ");
        assert_eq!(record.message.as_str(), "  ");
    }
}
