use contact_form_core_form_contracts::FormController;
use contact_form_core_result_contracts::MockResultView;
use contact_form_models::{contact::FieldValues, field::ContactFormField};

use crate::FormControllerImpl;


type Sut = FormControllerImpl<MockResultView>;

/// Enters every non-empty value into its input, like a user filling the form.
fn type_values(sut: &mut impl FormController, values: &FieldValues) {
    for field in ContactFormField::ALL {
        let value = values.get(field);
        if !value.is_empty() {
            sut.on_field_change(field, value.into());
        }
    }
}
