use serde::Serialize;

use crate::{contact::FieldValues, validation::FieldErrors};

/// The values shown in the result area after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPayload {
    #[serde(rename = "firstnameDisplay")]
    pub first_name_display: String,
    #[serde(rename = "lastnameDisplay")]
    pub last_name_display: String,
    #[serde(rename = "emailDisplay")]
    pub email_display: String,
    /// Only present if a message has been submitted.
    #[serde(rename = "messageDisplay", skip_serializing_if = "Option::is_none")]
    pub message_display: Option<String>,
}

impl DisplayPayload {
    pub const FIRST_NAME_ID: &'static str = "firstnameDisplay";
    pub const LAST_NAME_ID: &'static str = "lastnameDisplay";
    pub const EMAIL_ID: &'static str = "emailDisplay";
    pub const MESSAGE_ID: &'static str = "messageDisplay";

    /// The populated display regions as `(id, text)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            (Self::FIRST_NAME_ID, Some(self.first_name_display.as_str())),
            (Self::LAST_NAME_ID, Some(self.last_name_display.as_str())),
            (Self::EMAIL_ID, Some(self.email_display.as_str())),
            (Self::MESSAGE_ID, self.message_display.as_deref()),
        ]
        .into_iter()
        .filter_map(|(id, text)| Some((id, text?)))
    }
}

/// Everything the user currently sees on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub values: FieldValues,
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayPayload>,
}
