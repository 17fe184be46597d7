//! Event scripts replay user interaction with the form, one event per line:
//!
//! ```text
//! # comment
//! set firstName Stephen
//! set email
//! submit
//! reset
//! show
//! ```
//!
//! The value of `set` is everything after the field name and a single space,
//! so it may be empty or contain leading and trailing whitespace.

use contact_form_models::field::{ContactFormField, ParseContactFormFieldError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    Set {
        field: ContactFormField,
        value: String,
    },
    Submit,
    Reset,
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptParseError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {source}")]
    UnknownField {
        line: usize,
        source: ParseContactFormFieldError,
    },
    #[error("line {line}: 'set' requires a field name")]
    MissingField { line: usize },
    #[error("line {line}: '{command}' does not take arguments")]
    UnexpectedArguments { line: usize, command: String },
}

pub fn parse_script(input: &str) -> Result<Vec<ScriptEvent>, ScriptParseError> {
    input
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(idx + 1, line).transpose())
        .collect()
}

fn parse_line(line_number: usize, line: &str) -> Result<Option<ScriptEvent>, ScriptParseError> {
    let line = line.trim_start();
    if line.trim_end().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, args) = line.split_once(' ').unwrap_or((line, ""));

    let no_args = |event: ScriptEvent| {
        if args.trim().is_empty() {
            Ok(Some(event))
        } else {
            Err(ScriptParseError::UnexpectedArguments {
                line: line_number,
                command: command.into(),
            })
        }
    };

    match command.trim_end() {
        "set" => {
            let (field, value) = args.split_once(' ').unwrap_or((args, ""));
            if field.is_empty() {
                return Err(ScriptParseError::MissingField { line: line_number });
            }
            let field = field
                .parse()
                .map_err(|source| ScriptParseError::UnknownField {
                    line: line_number,
                    source,
                })?;
            Ok(Some(ScriptEvent::Set {
                field,
                value: value.into(),
            }))
        }
        "submit" => no_args(ScriptEvent::Submit),
        "reset" => no_args(ScriptEvent::Reset),
        "show" => no_args(ScriptEvent::Show),
        command => Err(ScriptParseError::UnknownCommand {
            line: line_number,
            command: command.into(),
        }),
    }
}
