use std::fmt;

use contact_form_config::FormConfig;
use contact_form_models::{field::ContactFormField, view::FormView};

/// Renders the view as text, or as JSON if `json` is set.
pub fn render(form: &FormConfig, view: &FormView, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(view)?)
    } else {
        Ok(TextView { form, view }.to_string())
    }
}

/// Plain text rendering of the form, its visible errors and the result area.
pub struct TextView<'a> {
    pub form: &'a FormConfig,
    pub view: &'a FormView,
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.form.header)?;

        for field in ContactFormField::ALL {
            let config = self.form.fields.get(field);
            write!(f, "\n{}", config.label)?;
            if let Some(placeholder) = &config.placeholder {
                write!(f, " [{placeholder}]")?;
            }
            writeln!(f, ": {}", self.view.values.get(field))?;

            if let Some(err) = self.view.errors.get(field) {
                writeln!(f, "  Error: {err}")?;
            }
        }

        if let Some(display) = &self.view.display {
            writeln!(f, "\nYou Submitted:")?;
            for (id, text) in display.entries() {
                writeln!(f, "  {id}: {text}")?;
            }
        }

        Ok(())
    }
}
