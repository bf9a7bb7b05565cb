//! Command-line interface for in_a_row.

use clap::{Parser, Subcommand};

/// In a Row - three or four in a row on boards from 3x3 to 7x7.
#[derive(Parser, Debug)]
#[command(name = "in_a_row")]
#[command(about = "Configurable-board tic-tac-toe for two local players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to a local match.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available game modes.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a local two-player match in the terminal
    Local {
        /// Board side length (clamped to 3-7)
        #[arg(short, long, default_value_t = 3)]
        size: usize,
    },
    /// Join an online match (not yet available)
    Online,
}
