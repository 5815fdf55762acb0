//! csmanager - stage home directories for a cloud sync client

mod cli;
mod commands;

use std::io::IsTerminal;
use std::process::exit;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use commands::SyncOptions;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = run(&cli) {
        error!("{error:?}");
        exit(1);
    }
}

/// Log to stderr at `info` (`debug` with `--verbose`) unless `RUST_LOG` says otherwise
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry().with(layer).with(filter).init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    commands::Run::execute(&SyncOptions::from_cli(cli)).context("Failed to execute sync")
}
