use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use contact_form::commands::{run::RunCommand, submit::SubmitCommand};
use contact_form_config::DEFAULT_CONFIG_PATH;
use contact_form_utils::contact_form_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = contact_form_config::load(&cli.config).context("Failed to load config")?;

    match cli.command {
        Command::Submit(command) => command.invoke(config)?,
        Command::Run(command) => command.invoke(config)?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = contact_form_version())]
struct Cli {
    /// Configuration files, later files override earlier ones
    #[arg(
        long,
        short,
        global = true,
        env = "CONTACT_FORM_CONFIG",
        value_delimiter = ',',
        default_value = DEFAULT_CONFIG_PATH
    )]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill in the contact form and submit it once
    #[command(aliases(["s"]))]
    Submit(SubmitCommand),
    /// Replay a script of form events
    #[command(aliases(["r"]))]
    Run(RunCommand),
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_paths() {
        let cli = Cli::parse_from(["contact-form", "check-config", "-c", "a.toml,b.toml"]);

        assert_eq!(
            cli.config,
            [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
        );
    }
}
