//! In a Row - configurable-board tic-tac-toe for the terminal.

use anyhow::Result;
use clap::Parser;
use in_a_row::{BoardSize, Cli, Command, run_local, run_online};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the board stays readable on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Local { size: 3 }) {
        Command::Local { size } => {
            let size = BoardSize::clamped(size);
            info!(%size, "starting local match");
            let stdin = io::stdin();
            run_local(stdin.lock(), io::stdout(), size)?;
        }
        Command::Online => run_online(io::stdout())?,
    }
    Ok(())
}
