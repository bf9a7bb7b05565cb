//! Configurable-board tic-tac-toe.
//!
//! Boards run from 3x3 up to 7x7; small boards need three in a row to
//! win, 5x5 and larger need four. The crate separates the match engine -
//! rules, snapshot history, win-streak scoring - from the thin console
//! front-end that drives it, so any other presentation layer can reuse
//! the engine unchanged.
//!
//! # Example
//!
//! ```
//! use in_a_row::{BoardSize, Match, Player};
//!
//! let mut game = Match::new(BoardSize::clamped(3));
//! game.play_move(0)?; // X
//! game.play_move(1)?; // O
//! game.play_move(3)?; // X
//! game.play_move(4)?; // O
//! let outcome = game.play_move(6)?; // X completes the left column
//! assert_eq!(outcome.winner(), Some(Player::X));
//! assert_eq!(game.score().wins(Player::X), 1);
//! # Ok::<(), in_a_row::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod game;

pub use cli::{Cli, Command};
pub use console::{ConsoleCommand, render_board, render_score, run_local, run_online, snapshot_json};
pub use game::{
    Board, BoardSize, Cell, Match, MoveError, Outcome, Player, ScoreBoard, WinLine, check_winner,
};
