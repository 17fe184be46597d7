use std::sync::LazyLock;

use contact_form_models::{
    contact::{FieldValues, SubmittedRecord},
    view::DisplayPayload,
};

pub const FIRST_NAME: &str = "Stephen";
pub const LAST_NAME: &str = "King";
pub const EMAIL: &str = "stephen.king@tourism.maine.gov";
pub const INVALID_EMAIL: &str = "stephen.king@";
pub const MESSAGE: &str = "The joke is I'm a horror author, yet I work for the tourism board";

/// A valid form without a message.
pub static STEPHEN: LazyLock<FieldValues> = LazyLock::new(|| FieldValues {
    first_name: FIRST_NAME.into(),
    last_name: LAST_NAME.into(),
    email: EMAIL.into(),
    message: String::new(),
});

/// A valid form including a message.
pub static STEPHEN_WITH_MESSAGE: LazyLock<FieldValues> = LazyLock::new(|| FieldValues {
    message: MESSAGE.into(),
    ..STEPHEN.clone()
});

pub static STEPHEN_RECORD: LazyLock<SubmittedRecord> =
    LazyLock::new(|| SubmittedRecord::try_from_values(&STEPHEN).unwrap());

pub static STEPHEN_WITH_MESSAGE_RECORD: LazyLock<SubmittedRecord> =
    LazyLock::new(|| SubmittedRecord::try_from_values(&STEPHEN_WITH_MESSAGE).unwrap());

pub static STEPHEN_DISPLAY: LazyLock<DisplayPayload> = LazyLock::new(|| DisplayPayload {
    first_name_display: FIRST_NAME.into(),
    last_name_display: LAST_NAME.into(),
    email_display: EMAIL.into(),
    message_display: None,
});

pub static STEPHEN_WITH_MESSAGE_DISPLAY: LazyLock<DisplayPayload> =
    LazyLock::new(|| DisplayPayload {
        message_display: Some(MESSAGE.into()),
        ..STEPHEN_DISPLAY.clone()
    });
