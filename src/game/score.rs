//! Win-streak statistics for a play session.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Per-session win counters for both players.
///
/// Counters only grow while the process runs; they survive restarts and
/// board-size changes and are cleared solely by an explicit reset. The
/// engine guarantees at most one increment per terminal ply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
}

impl ScoreBoard {
    /// Wins recorded for the player this session.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Credits one win to the player.
    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    /// Zeroes both counters.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
