//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 lines that can produce a win, in scan order:
/// rows top to bottom, columns left to right, then the `↘` and `↙` diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// The three coordinates of a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WinningLine([Coord; 3]);

impl WinningLine {
    /// Returns the coordinates in line order.
    pub fn coords(&self) -> &[Coord; 3] {
        &self.0
    }

    /// Checks whether `coord` is part of this line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }
}

/// Returns the owner of `line` if all three cells hold the same mark.
fn line_owner(board: &Board, [a, b, c]: [Coord; 3]) -> Option<Player> {
    match board.get(a) {
        Cell::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    }
}

/// Returns every player that owns at least one complete line, with the line.
///
/// Reachable games have at most one owner; this is exposed for invariant
/// checks over arbitrary boards.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = (Player, WinningLine)> + '_ {
    LINES
        .into_iter()
        .filter_map(|line| line_owner(board, line).map(|p| (p, WinningLine(line))))
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn find_winner(board: &Board) -> Option<Player> {
    completed_lines(board).next().map(|(player, _)| player)
}

/// Returns the first complete line in [`LINES`] order.
///
/// Present exactly when [`find_winner`] is, and every cell on it holds the
/// winner.
#[instrument(level = "trace")]
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    completed_lines(board).next().map(|(_, line)| line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: [(usize, usize); 3]) -> WinningLine {
        WinningLine(pairs.map(|(r, c)| Coord::new(r, c).unwrap()))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(find_winner(&board), None);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(find_winner(&board), Some(Player::X));
        assert_eq!(
            find_winning_line(&board),
            Some(coords([(0, 0), (0, 1), (0, 2)]))
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "OX./XO./X.O".parse().unwrap();
        assert_eq!(find_winner(&board), Some(Player::O));
        assert_eq!(
            find_winning_line(&board),
            Some(coords([(0, 0), (1, 1), (2, 2)]))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO/XO./O..".parse().unwrap();
        assert_eq!(
            find_winning_line(&board),
            Some(coords([(0, 2), (1, 1), (2, 0)]))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.../...".parse().unwrap();
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_scan_order_prefers_rows_over_columns() {
        // Row 0 and column 0 are both complete; row 0 is scanned first.
        let board: Board = "XXX/XOO/XOO".parse().unwrap();
        assert_eq!(
            find_winning_line(&board),
            Some(coords([(0, 0), (0, 1), (0, 2)]))
        );
    }

    #[test]
    fn test_scan_order_picks_first_owner() {
        // Unreachable position with two owners: row 0 (O) beats row 2 (X).
        let board: Board = "OOO/.../XXX".parse().unwrap();
        assert_eq!(find_winner(&board), Some(Player::O));
        assert_eq!(completed_lines(&board).count(), 2);
    }
}
