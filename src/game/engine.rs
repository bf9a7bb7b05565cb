//! Match state and the rules that transition it.

use super::rules::check_winner;
use super::score::ScoreBoard;
use super::types::{Board, BoardSize, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of the current position, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and the board still has room.
    InProgress,
    /// A winning run is on the board.
    Won {
        /// The winner.
        player: Player,
        /// Cell indices of the winning run, for highlighting.
        line: Vec<usize>,
    },
    /// The board is full with no winning run.
    Draw,
}

impl Outcome {
    /// Returns the winner, if the position has one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Checks if the match is over (won or drawn).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Error returned for a rejected move.
///
/// A rejected move never changes match state or score, so a caller that
/// prefers the permissive fire-and-forget contract can simply discard
/// the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The match already has a winner.
    #[display("Match is already over")]
    GameOver,
    /// The index does not address a cell of the current board.
    #[display("Cell {_0} is out of bounds")]
    OutOfBounds(usize),
    /// The cell is already occupied.
    #[display("Cell {_0} is already occupied")]
    Occupied(usize),
}

impl std::error::Error for MoveError {}

/// A single match plus session statistics.
///
/// The engine owns a snapshot history of one match: entry 0 is the blank
/// board, entry `k` the board after the `k`-th ply. Boards are never
/// edited in place; each move clones the current snapshot and appends.
/// Turn and outcome are always derived from the snapshot at the current
/// ply, never stored, so they cannot drift out of sync.
///
/// Score counters live alongside the match and survive restarts and
/// size changes; `scored_ply` remembers the last ply already credited
/// so a terminal position observed twice is never counted twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    size: BoardSize,
    history: Vec<Board>,
    current_ply: usize,
    score: ScoreBoard,
    scored_ply: Option<usize>,
}

impl Match {
    /// Creates a match on a blank board of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            history: vec![Board::new(size)],
            current_ply: 0,
            score: ScoreBoard::default(),
            scored_ply: None,
        }
    }

    /// The current board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// The board at the current ply.
    pub fn board(&self) -> &Board {
        &self.history[self.current_ply]
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the current ply into the history.
    pub fn current_ply(&self) -> usize {
        self.current_ply
    }

    /// Session win counters.
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// The player whose turn it is: X on even plies, O on odd ones.
    pub fn to_move(&self) -> Player {
        if self.current_ply % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Outcome of the current position.
    pub fn outcome(&self) -> Outcome {
        if let Some(win) = check_winner(self.board()) {
            Outcome::Won {
                player: win.player,
                line: win.indices,
            }
        } else if self.board().is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Checks if at least one mark is down and no terminal outcome holds.
    pub fn in_progress(&self) -> bool {
        self.current_ply > 0 && !self.outcome().is_terminal()
    }

    /// One-line status for display: winner, draw, or next player.
    pub fn status(&self) -> String {
        match self.outcome() {
            Outcome::Won { player, .. } => format!("Winner: {player}"),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.to_move()),
        }
    }

    /// Plays the mark of the player to move at `pos`.
    ///
    /// The new snapshot replaces any plies abandoned by a rewind, then
    /// becomes the current position. A move that completes a winning run
    /// credits the winner once; the returned outcome reflects the board
    /// after the move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] when a winner already exists.
    /// - [`MoveError::OutOfBounds`] when `pos` is not on the board.
    /// - [`MoveError::Occupied`] when the cell already holds a mark.
    ///
    /// Rejected moves leave history, ply, and score untouched.
    #[instrument(skip(self), fields(ply = self.current_ply))]
    pub fn play_move(&mut self, pos: usize) -> Result<Outcome, MoveError> {
        if self.outcome().winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if pos >= self.size.cell_count() {
            return Err(MoveError::OutOfBounds(pos));
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        let player = self.to_move();
        let mut next = self.board().clone();
        next.set(pos, Cell::Occupied(player));
        self.history.truncate(self.current_ply + 1);
        self.history.push(next);
        self.current_ply = self.history.len() - 1;
        debug!(%player, pos, ply = self.current_ply, "placed mark");

        let outcome = self.outcome();
        if let Some(winner) = outcome.winner() {
            self.credit_win(winner);
        }
        Ok(outcome)
    }

    /// Moves the current position to `ply`, clamped to the recorded
    /// history. Playing from an earlier ply discards the abandoned
    /// future.
    #[instrument(skip(self))]
    pub fn rewind_to(&mut self, ply: usize) {
        self.current_ply = ply.min(self.history.len() - 1);
    }

    /// Resets the match to a blank board of the current size.
    ///
    /// Win counters are untouched; only an explicit
    /// [`reset_stats`](Self::reset_stats) clears them.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history = vec![Board::new(self.size)];
        self.current_ply = 0;
        self.scored_ply = None;
        debug!(size = %self.size, "match reset");
    }

    /// Changes the board size and fully resets the match.
    ///
    /// Win counters survive a size change.
    #[instrument(skip(self))]
    pub fn set_board_size(&mut self, size: BoardSize) {
        self.size = size;
        self.restart();
    }

    /// Abandons an unfinished match and restarts.
    ///
    /// When the board is non-blank and no winner exists, the opponent of
    /// the player to move is credited one win; whoever is about to move
    /// pays for the abandonment. A blank board or an already-decided
    /// match restarts for free.
    #[instrument(skip(self))]
    pub fn concede(&mut self) {
        if !self.board().is_blank() && self.outcome().winner().is_none() {
            let credited = self.to_move().opponent();
            self.score.record_win(credited);
            info!(%credited, "match conceded");
        }
        self.restart();
    }

    /// Zeroes both win counters. Match state is untouched.
    #[instrument(skip(self))]
    pub fn reset_stats(&mut self) {
        self.score.reset();
    }

    fn credit_win(&mut self, winner: Player) {
        if self.scored_ply != Some(self.current_ply) {
            self.score.record_win(winner);
            self.scored_ply = Some(self.current_ply);
            info!(%winner, ply = self.current_ply, "match won");
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
