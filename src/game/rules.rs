//! Winner detection for any supported board size.

use super::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A winning run found on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    /// The player owning every cell of the run.
    pub player: Player,
    /// Row-major cell indices of the run, in scan order.
    pub indices: Vec<usize>,
}

/// Checks the board for a winning run.
///
/// The required run length comes from the board size: three in a row on
/// 3x3 and 4x4 boards, four in a row from 5x5 up. A window of that
/// length slides over every direction; a window qualifies when its first
/// cell is occupied and all cells hold the same player.
///
/// Directions are scanned in a fixed order - horizontal, vertical,
/// down-right diagonal, up-right diagonal - and the first qualifying
/// window is returned, so boards with several simultaneous winning lines
/// always report the same one.
///
/// Pure and idempotent: the board is never mutated.
#[instrument(skip(board), fields(size = board.size().get()))]
pub fn check_winner(board: &Board) -> Option<WinLine> {
    let size = board.size().get();
    let needed = board.size().win_length();

    let mut windows: Vec<Vec<usize>> = Vec::new();

    // Horizontal runs, row by row.
    for r in 0..size {
        for c in 0..=size - needed {
            windows.push((0..needed).map(|k| r * size + c + k).collect());
        }
    }

    // Vertical runs, column by column.
    for c in 0..size {
        for r in 0..=size - needed {
            windows.push((0..needed).map(|k| (r + k) * size + c).collect());
        }
    }

    // Down-right diagonals.
    for r in 0..=size - needed {
        for c in 0..=size - needed {
            windows.push((0..needed).map(|k| (r + k) * size + c + k).collect());
        }
    }

    // Up-right diagonals (down-left from the starting cell).
    for r in 0..=size - needed {
        for c in needed - 1..size {
            windows.push((0..needed).map(|k| (r + k) * size + c - k).collect());
        }
    }

    for indices in windows {
        if let Some(Cell::Occupied(player)) = board.get(indices[0])
            && indices
                .iter()
                .all(|&i| board.get(i) == Some(Cell::Occupied(player)))
        {
            return Some(WinLine { player, indices });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::BoardSize;

    fn board(size: usize) -> Board {
        Board::new(BoardSize::clamped(size))
    }

    fn place(board: &mut Board, player: Player, positions: &[usize]) {
        for &pos in positions {
            board.set(pos, Cell::Occupied(player));
        }
    }

    #[test]
    fn blank_boards_have_no_winner() {
        for size in 3..=7 {
            assert_eq!(check_winner(&board(size)), None, "size {size}");
        }
    }

    #[test]
    fn top_row_wins_a_small_board() {
        let mut b = board(3);
        place(&mut b, Player::X, &[0, 1, 2]);
        let win = check_winner(&b).expect("row should win");
        assert_eq!(win.player, Player::X);
        assert_eq!(win.indices, vec![0, 1, 2]);
    }

    #[test]
    fn up_right_diagonal_wins() {
        let mut b = board(3);
        place(&mut b, Player::O, &[2, 4, 6]);
        let win = check_winner(&b).expect("diagonal should win");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.indices, vec![2, 4, 6]);
    }

    #[test]
    fn three_in_a_row_is_not_enough_on_a_big_board() {
        let mut b = board(5);
        place(&mut b, Player::X, &[0, 1, 2]);
        assert_eq!(check_winner(&b), None);
    }

    #[test]
    fn four_in_a_row_wins_a_big_board() {
        let mut b = board(6);
        place(&mut b, Player::O, &[12, 13, 14, 15]);
        let win = check_winner(&b).expect("row of four should win");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.indices, vec![12, 13, 14, 15]);
    }

    #[test]
    fn down_right_diagonal_wins_mid_board() {
        // Starts at (1, 1) on a 6x6 board: 7, 14, 21, 28.
        let mut b = board(6);
        place(&mut b, Player::X, &[7, 14, 21, 28]);
        let win = check_winner(&b).expect("diagonal should win");
        assert_eq!(win.indices, vec![7, 14, 21, 28]);
    }

    #[test]
    fn rows_win_the_tie_break_over_columns() {
        // X holds both the top row and the left column.
        let mut b = board(3);
        place(&mut b, Player::X, &[0, 1, 2, 3, 6]);
        let win = check_winner(&b).expect("two lines, one answer");
        assert_eq!(win.indices, vec![0, 1, 2]);
    }

    #[test]
    fn detection_is_idempotent() {
        let mut b = board(4);
        place(&mut b, Player::O, &[5, 6, 7]);
        assert_eq!(check_winner(&b), check_winner(&b));
    }

    #[test]
    fn every_direction_wins_at_every_size() {
        for size in 3..=7 {
            let len = BoardSize::clamped(size).win_length();
            let idx = |r: usize, c: usize| r * size + c;
            let directions: [Vec<usize>; 4] = [
                (0..len).map(|k| idx(1, k)).collect(),
                (0..len).map(|k| idx(k, 1)).collect(),
                (0..len).map(|k| idx(k, k)).collect(),
                (0..len).map(|k| idx(k, len - 1 - k)).collect(),
            ];
            for expected in directions {
                let mut b = board(size);
                place(&mut b, Player::X, &expected);
                let win = check_winner(&b).expect("run should win");
                assert_eq!(win.player, Player::X, "size {size}");
                let mut found = win.indices.clone();
                let mut wanted = expected.clone();
                found.sort_unstable();
                wanted.sort_unstable();
                assert_eq!(found, wanted, "size {size}");
            }
        }
    }
}
