//! ConfigScout CLI — guess how to set up, build, and run a repository.
//!
//! Probes a local checkout with the inference engine and prints the
//! suggested workspace configuration as declarative text or JSON.

mod commands;
mod provider;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
