use std::collections::BTreeSet;

use contact_form_core_form_contracts::{FormController, FormSubmitError};
use contact_form_core_result_contracts::ResultView;
use contact_form_models::{
    contact::{FieldValues, SubmittedRecord},
    field::ContactFormField,
    validation::{self, FieldErrors},
    view::FormView,
};
use tracing::{debug, info};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default)]
pub struct FormControllerImpl<View> {
    result_view: View,
    state: FormState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FormState {
    values: FieldValues,
    /// Only contains fields whose rule failed on their last evaluation.
    errors: FieldErrors,
    touched: BTreeSet<ContactFormField>,
    submit_attempted: bool,
    submitted: Option<SubmittedRecord>,
}

impl<View> FormControllerImpl<View> {
    pub fn new(result_view: View) -> Self {
        Self {
            result_view,
            state: FormState::default(),
        }
    }

    fn is_error_visible(&self, field: ContactFormField) -> bool {
        self.state.submit_attempted || self.state.touched.contains(&field)
    }
}

impl<View> FormController for FormControllerImpl<View>
where
    View: ResultView,
{
    fn on_field_change(&mut self, field: ContactFormField, value: String) {
        let result = validation::validate(field, &value);
        debug!("{field} changed (valid: {})", result.is_ok());

        self.state.values.set(field, value);
        self.state.touched.insert(field);
        self.state.errors.update(field, result);
    }

    fn on_submit(&mut self) -> Result<SubmittedRecord, FormSubmitError> {
        self.state.submit_attempted = true;

        match SubmittedRecord::try_from_values(&self.state.values) {
            Ok(record) => {
                info!("Contact form submitted");
                self.state.errors = FieldErrors::new();
                self.state.submitted = Some(record.clone());
                Ok(record)
            }
            Err(errors) => {
                debug!(
                    "Contact form rejected, invalid fields: {}",
                    errors
                        .fields()
                        .map(ContactFormField::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                self.state.errors = errors.clone();
                Err(FormSubmitError::Invalid(errors))
            }
        }
    }

    fn reset(&mut self) {
        debug!("Contact form reset");
        self.state = FormState::default();
    }

    fn visible_errors(&self) -> FieldErrors {
        let mut errors = self.state.errors.clone();
        errors.retain(|field| self.is_error_visible(field));
        errors
    }

    fn submitted(&self) -> Option<SubmittedRecord> {
        self.state.submitted.clone()
    }

    fn view(&self) -> FormView {
        FormView {
            values: self.state.values.clone(),
            errors: self.visible_errors(),
            display: self
                .state
                .submitted
                .as_ref()
                .map(|record| self.result_view.project(record)),
        }
    }
}
