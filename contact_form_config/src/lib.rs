use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use contact_form_models::field::ContactFormField;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Load the configuration from the given files. Later files override values
/// of earlier ones.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub form: FormConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    pub header: String,
    pub fields: FieldsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldsConfig {
    pub first_name: FieldConfig,
    pub last_name: FieldConfig,
    pub email: FieldConfig,
    pub message: FieldConfig,
}

impl FieldsConfig {
    pub fn get(&self, field: ContactFormField) -> &FieldConfig {
        match field {
            ContactFormField::FirstName => &self.first_name,
            ContactFormField::LastName => &self.last_name,
            ContactFormField::Email => &self.email,
            ContactFormField::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldConfig {
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        assert_eq!(config.form.header, "Contact Form");
        assert_eq!(
            *config.form.fields.get(ContactFormField::FirstName),
            FieldConfig {
                label: "First Name*".into(),
                placeholder: Some("Edd".into()),
            }
        );
        assert_eq!(
            config.form.fields.get(ContactFormField::Email).placeholder.as_deref(),
            Some("bluebill1049@hotmail.com")
        );
        assert_eq!(config.form.fields.get(ContactFormField::Message).placeholder, None);
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let path = override_file("override_header.toml", "[form]\nheader = \"Get in touch\"\n");

        let config = load(&[PathBuf::from(DEFAULT_CONFIG_PATH), path]).unwrap();

        assert_eq!(config.form.header, "Get in touch");
        assert_eq!(config.form.fields.last_name.placeholder.as_deref(), Some("Burke"));
    }

    #[test]
    fn missing_file() {
        let err = load(&[Path::new("/does/not/exist.toml")]).unwrap_err();

        assert!(err.to_string().contains("/does/not/exist.toml"), "{err}");
    }

    fn override_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("contact_form_config_{name}"));
        std::fs::write(&path, content).unwrap();
        path
    }
}
