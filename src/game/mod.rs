//! Match engine for configurable-board tic-tac-toe.
//!
//! The engine is split into the domain types ([`Board`], [`Player`],
//! [`Cell`], [`BoardSize`]), the pure winner detection
//! ([`check_winner`]), the session score ([`ScoreBoard`]), and the
//! stateful [`Match`] that ties them together. Presentation layers only
//! ever talk to [`Match`].

mod engine;
mod rules;
mod score;
mod types;

pub use engine::{Match, MoveError, Outcome};
pub use rules::{WinLine, check_winner};
pub use score::ScoreBoard;
pub use types::{Board, BoardSize, Cell, Player};
