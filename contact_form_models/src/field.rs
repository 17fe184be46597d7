use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactFormField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl ContactFormField {
    /// All fields in the order they appear on the form.
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Whether a submission is rejected while this field is invalid.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }
}

impl fmt::Display for ContactFormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown contact form field '{0}'.")]
pub struct ParseContactFormFieldError(pub String);

impl FromStr for ContactFormField {
    type Err = ParseContactFormFieldError;

    /// Accepts `firstName`, `first_name` and `first-name`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(ParseContactFormFieldError(s.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use contact_form_utils::assert_matches;

    use super::*;

    #[test]
    fn parse() {
        for (input, expected) in [
            ("firstName", Some(ContactFormField::FirstName)),
            ("first_name", Some(ContactFormField::FirstName)),
            ("FIRST-NAME", Some(ContactFormField::FirstName)),
            ("lastname", Some(ContactFormField::LastName)),
            ("Email", Some(ContactFormField::Email)),
            ("message", Some(ContactFormField::Message)),
            ("subject", None),
            ("", None),
        ] {
            assert_eq!(input.parse::<ContactFormField>().ok(), expected, "{input}");
        }
    }

    #[test]
    fn parse_error_keeps_input() {
        assert_matches!(
            "phone".parse::<ContactFormField>(),
            Err(ParseContactFormFieldError(x)) if x == "phone"
        );
    }

    #[test]
    fn display_uses_wire_name() {
        for field in ContactFormField::ALL {
            assert_eq!(
                serde_json::to_value(field).unwrap(),
                serde_json::Value::String(field.to_string())
            );
        }
    }

    #[test]
    fn only_message_is_optional() {
        let optional = ContactFormField::ALL
            .into_iter()
            .filter(|f| !f.is_required())
            .collect::<Vec<_>>();
        assert_eq!(optional, [ContactFormField::Message]);
    }
}
