use clap::Args;
use contact_form_config::Config;
use contact_form_core_form_contracts::{FormController, FormSubmitError};
use contact_form_models::{contact::SubmittedRecord, field::ContactFormField};

use crate::{environment, render::render};

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Value entered into the first name input
    #[arg(long)]
    first_name: Option<String>,
    /// Value entered into the last name input
    #[arg(long)]
    last_name: Option<String>,
    /// Value entered into the email input
    #[arg(long)]
    email: Option<String>,
    /// Value entered into the message input
    #[arg(long)]
    message: Option<String>,
    /// Print the form view as JSON
    #[arg(long)]
    json: bool,
}

impl SubmitCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let json = self.json;
        let mut controller = environment::controller();

        let result = submit(&mut controller, self.into_entries());
        println!("{}", render(&config.form, &controller.view(), json)?);

        result?;
        Ok(())
    }

    fn into_entries(self) -> impl Iterator<Item = (ContactFormField, String)> {
        [
            (ContactFormField::FirstName, self.first_name),
            (ContactFormField::LastName, self.last_name),
            (ContactFormField::Email, self.email),
            (ContactFormField::Message, self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| Some((field, value?)))
    }
}

/// Enters the given values and submits the form.
pub fn submit(
    controller: &mut impl FormController,
    entries: impl IntoIterator<Item = (ContactFormField, String)>,
) -> Result<SubmittedRecord, FormSubmitError> {
    for (field, value) in entries {
        controller.on_field_change(field, value);
    }
    controller.on_submit()
}
