use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Args;
use contact_form_config::Config;
use contact_form_core_form_contracts::FormController;
use contact_form_models::view::FormView;
use tracing::warn;

use crate::{
    environment,
    render::render,
    script::{parse_script, ScriptEvent},
};

#[derive(Debug, Args)]
pub struct RunCommand {
    /// Event script to replay, read from stdin if omitted
    script: Option<PathBuf>,
    /// Print the form view as JSON
    #[arg(long)]
    json: bool,
}

impl RunCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let script = match &self.script {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script at {}", path.display()))?,
            None => io::read_to_string(io::stdin()).context("Failed to read script from stdin")?,
        };
        let events = parse_script(&script)?;

        let mut controller = environment::controller();
        let mut stdout = io::stdout().lock();
        run(&mut controller, events, |view| {
            writeln!(stdout, "{}", render(&config.form, view, self.json)?)?;
            Ok(())
        })
    }
}

/// Replays `events` against the controller and passes the view to `show`
/// after every submit and every `show` event.
pub fn run(
    controller: &mut impl FormController,
    events: impl IntoIterator<Item = ScriptEvent>,
    mut show: impl FnMut(&FormView) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    for event in events {
        match event {
            ScriptEvent::Set { field, value } => controller.on_field_change(field, value),
            ScriptEvent::Submit => {
                if let Err(err) = controller.on_submit() {
                    warn!("{err}");
                }
                show(&controller.view())?;
            }
            ScriptEvent::Reset => controller.reset(),
            ScriptEvent::Show => show(&controller.view())?,
        }
    }

    Ok(())
}
