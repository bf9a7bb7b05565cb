//! Line-oriented console front-end for a local match.
//!
//! Presentation only: every rule lives in [`Match`]. This module renders
//! snapshots, shows the status line and the score, and routes typed
//! commands to the engine.

use crate::game::{BoardSize, Cell, Match, Outcome, Player};
use serde_json::json;
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use tracing::debug;

const HELP: &str = "Commands:
  <cell>       place your mark at the cell index shown on the board
  size <n>     change the board side (clamped to 3-7); resets the match
  restart      reset the match, keeping the score
  concede      abandon an unfinished match; the opponent scores
  reset-stats  zero both win counters
  json         dump the match state as JSON
  help         show this help
  quit         leave the game";

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place a mark at the cell index.
    Move(usize),
    /// Change the board size (clamped), resetting the match.
    Size(usize),
    /// Restart the match.
    Restart,
    /// Concede an unfinished match.
    Concede,
    /// Zero the win counters.
    ResetStats,
    /// Dump the match state as JSON.
    Json,
    /// Show command help.
    Help,
    /// Leave the game.
    Quit,
}

impl ConsoleCommand {
    /// Parses one input line; `None` for anything unrecognized.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        match words.next()? {
            "restart" => Some(Self::Restart),
            "concede" => Some(Self::Concede),
            "reset-stats" => Some(Self::ResetStats),
            "json" => Some(Self::Json),
            "help" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            "size" => words.next()?.parse().ok().map(Self::Size),
            cell => cell.parse().ok().map(Self::Move),
        }
    }
}

/// Renders the current board.
///
/// Empty cells show their index so it can be typed as a move; cells of a
/// winning run carry a `*` marker.
pub fn render_board(game: &Match) -> String {
    let board = game.board();
    let size = board.size().get();
    let win_line = match game.outcome() {
        Outcome::Won { line, .. } => line,
        _ => Vec::new(),
    };

    let mut out = String::new();
    for row in 0..size {
        for col in 0..size {
            let idx = board.index(row, col);
            let text = match board.get(idx) {
                Some(Cell::Occupied(player)) => player.to_string(),
                _ => idx.to_string(),
            };
            let marker = if win_line.contains(&idx) { "*" } else { " " };
            out.push_str(&format!("{text:>3}{marker}"));
        }
        out.push('\n');
    }
    out
}

/// Renders the session score line.
pub fn render_score(game: &Match) -> String {
    let mut out = String::from("Score ");
    for player in Player::iter() {
        out.push_str(&format!(" {player}: {}", game.score().wins(player)));
    }
    out
}

/// JSON snapshot of the visible match state.
pub fn snapshot_json(game: &Match) -> String {
    json!({
        "size": game.size().get(),
        "ply": game.current_ply(),
        "board": game.board(),
        "outcome": game.outcome(),
        "status": game.status(),
        "score": game.score(),
    })
    .to_string()
}

/// Runs a local two-player match, reading commands from `input` and
/// writing everything to `output`. Returns on `quit` or end of input.
pub fn run_local<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    size: BoardSize,
) -> io::Result<()> {
    let mut game = Match::new(size);
    writeln!(
        output,
        "Local match on a {size}x{size} board. Type 'help' for commands."
    )?;

    loop {
        writeln!(output)?;
        writeln!(output, "{}", game.status())?;
        write!(output, "{}", render_board(&game))?;
        writeln!(output, "{}", render_score(&game))?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let command = ConsoleCommand::parse(&line);
        debug!(?command, "console input");
        match command {
            Some(ConsoleCommand::Move(pos)) => {
                if let Err(err) = game.play_move(pos) {
                    writeln!(output, "{err}")?;
                }
            }
            Some(ConsoleCommand::Size(n)) => game.set_board_size(BoardSize::clamped(n)),
            Some(ConsoleCommand::Restart) => game.restart(),
            Some(ConsoleCommand::Concede) => game.concede(),
            Some(ConsoleCommand::ResetStats) => game.reset_stats(),
            Some(ConsoleCommand::Json) => writeln!(output, "{}", snapshot_json(&game))?,
            Some(ConsoleCommand::Help) => writeln!(output, "{HELP}")?,
            Some(ConsoleCommand::Quit) => return Ok(()),
            None => writeln!(output, "Unrecognized command; type 'help'.")?,
        }
    }
}

/// Placeholder for the online mode; no protocol exists yet.
pub fn run_online<W: Write>(mut output: W) -> io::Result<()> {
    writeln!(output, "Online play is not available yet.")
}
