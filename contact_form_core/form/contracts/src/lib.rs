use contact_form_models::{
    contact::SubmittedRecord, field::ContactFormField, validation::FieldErrors, view::FormView,
};
use thiserror::Error;

/// Owns the state of a contact form and reacts to user input.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormController: Send + Sync + 'static {
    /// Store a new value for `field` and revalidate only that field.
    fn on_field_change(&mut self, field: ContactFormField, value: String);

    /// Validate all fields and, if every required field is valid, replace the
    /// current submitted record with a snapshot of the form.
    fn on_submit(&mut self) -> Result<SubmittedRecord, FormSubmitError>;

    /// Return to the state right after mounting the form.
    fn reset(&mut self);

    /// The errors that are currently shown to the user.
    fn visible_errors(&self) -> FieldErrors;

    /// The record of the last successful submission.
    fn submitted(&self) -> Option<SubmittedRecord>;

    /// What the user currently sees.
    fn view(&self) -> FormView;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormSubmitError {
    #[error("The form contains {} invalid field(s).", .0.len())]
    Invalid(FieldErrors),
}

#[cfg(feature = "mock")]
impl MockFormController {
    pub fn with_on_field_change(mut self, field: ContactFormField, value: String) -> Self {
        self.expect_on_field_change()
            .once()
            .with(
                mockall::predicate::eq(field),
                mockall::predicate::eq(value),
            )
            .return_const(());
        self
    }

    pub fn with_on_submit(mut self, result: Result<SubmittedRecord, FormSubmitError>) -> Self {
        self.expect_on_submit().once().return_once(|| result);
        self
    }

    pub fn with_reset(mut self) -> Self {
        self.expect_reset().once().return_const(());
        self
    }

    pub fn with_view(mut self, view: FormView) -> Self {
        self.expect_view().once().return_const(view);
        self
    }
}
