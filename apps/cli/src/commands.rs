//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use configscout_inference::{ConfigGuesser, LearnedPaths, to_declarative};
use configscout_shared::{init_config, load_config};
use tracing::info;

use crate::provider::LocalFileProvider;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// ConfigScout — workspace-configuration inference for repositories.
#[derive(Parser)]
#[command(
    name = "configscout",
    version,
    about = "Guess how to set up, build, and run a repository from its file tree.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Infer a workspace configuration for a repository checkout.
    Infer {
        /// Path to the repository root.
        path: PathBuf,

        /// Output format (defaults to the config file's `defaults.format`).
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Output format for the inferred configuration.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Declarative line-oriented text.
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Config management subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Create a default config file at ~/.configscout/configscout.toml.
    Init,
    /// Print the resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "configscout=info",
        1 => "configscout=debug",
        _ => "configscout=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Infer { path, format } => infer(path, format).await,
        Command::Config { action } => match action {
            ConfigAction::Init => {
                let path = init_config()?;
                println!("wrote {}", path.display());
                Ok(())
            }
            ConfigAction::Show => {
                let config = load_config()?;
                print!("{}", toml::to_string_pretty(&config)?);
                Ok(())
            }
        },
    }
}

async fn infer(path: PathBuf, format: Option<OutputFormat>) -> Result<()> {
    let app_config = load_config()?;
    let format = format.unwrap_or(match app_config.defaults.format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Yaml,
    });

    let provider = LocalFileProvider::new(&path, app_config.probe.max_file_bytes)?;
    let guesser = ConfigGuesser::new(LearnedPaths::new());

    info!(path = %path.display(), "inferring workspace configuration");

    match guesser.guess(Arc::new(provider)).await {
        Some(config) => {
            match format {
                OutputFormat::Yaml => print!("{}", to_declarative(&config)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
            }
            Ok(())
        }
        None => {
            // An expected outcome for unrecognized layouts, not an error.
            eprintln!(
                "no workspace configuration could be inferred for {}",
                path.display()
            );
            Ok(())
        }
    }
}
