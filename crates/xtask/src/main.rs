//! Development tasks for the turn core.
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Simulate, Trace};

/// Development tasks for the turn core
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the turn core", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Step an area effect over a map and show each step
    Trace(Trace),

    /// Run the turn loop with chasing monsters and print the narration
    Simulate(Simulate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RUST_LOG and TURN_* tunables)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Trace(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
    }
}
