use contact_form_core_result_contracts::ResultView;
use contact_form_models::{contact::SubmittedRecord, view::DisplayPayload};

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultViewImpl;

impl ResultView for ResultViewImpl {
    fn project(&self, record: &SubmittedRecord) -> DisplayPayload {
        DisplayPayload {
            first_name_display: (*record.first_name).clone(),
            last_name_display: (*record.last_name).clone(),
            email_display: (*record.email).clone(),
            message_display: Some((*record.message).clone()).filter(|message| !message.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use contact_form_demo::{
        STEPHEN_DISPLAY, STEPHEN_RECORD, STEPHEN_WITH_MESSAGE_DISPLAY, STEPHEN_WITH_MESSAGE_RECORD,
    };
    use contact_form_models::contact::FieldValues;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn without_message() {
        // Arrange
        let sut = ResultViewImpl;

        // Act
        let result = sut.project(&STEPHEN_RECORD);

        // Assert
        assert_eq!(result, *STEPHEN_DISPLAY);
    }

    #[test]
    fn with_message() {
        // Arrange
        let sut = ResultViewImpl;

        // Act
        let result = sut.project(&STEPHEN_WITH_MESSAGE_RECORD);

        // Assert
        assert_eq!(result, *STEPHEN_WITH_MESSAGE_DISPLAY);
    }

    #[test]
    fn values_are_copied_verbatim() {
        // Arrange
        let values = FieldValues {
            first_name: "  Anne  ".into(),
            last_name: " ".into(),
            email: "a@b.c".into(),
            message: " ".into(),
        };
        let record = SubmittedRecord::try_from_values(&values).unwrap();

        let sut = ResultViewImpl;

        // Act
        let result = sut.project(&record);

        // Assert
        assert_eq!(
            result,
            DisplayPayload {
                first_name_display: "  Anne  ".into(),
                last_name_display: " ".into(),
                email_display: "a@b.c".into(),
                message_display: Some(" ".into()),
            }
        );
    }
}
