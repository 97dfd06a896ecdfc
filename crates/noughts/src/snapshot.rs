//! Read-only view of a session at one point in time.

use derive_getters::Getters;
use noughts_rules::{Board, Coord, GameStatus, Player, WinningLine};
use serde::{Deserialize, Serialize};

/// Everything a view needs to render one frame.
///
/// Built by [`GameCoordinator::snapshot`](crate::GameCoordinator::snapshot);
/// `status` and `winning_line` are derived from `board` at that moment.
/// Holding a snapshot never observes later moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// Player entitled to move next; meaningless once the game has ended.
    current_player: Player,
    /// Derived game status.
    status: GameStatus,
    /// First winning line, if any.
    winning_line: Option<WinningLine>,
}

impl Snapshot {
    /// True if a click on `coord` would place a mark.
    pub fn is_cell_playable(&self, coord: Coord) -> bool {
        self.status.is_ongoing() && self.board.is_empty_at(coord)
    }

    /// True if `coord` lies on the winning line.
    pub fn is_winning_cell(&self, coord: Coord) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(coord))
    }

    /// Accessible label for a cell, numbered from 1: `Cell 1-3: X`.
    pub fn cell_label(&self, coord: Coord) -> String {
        let mark = self
            .board
            .get(coord)
            .player()
            .map_or_else(|| "empty".to_string(), |player| player.to_string());
        format!("Cell {}-{}: {}", coord.row() + 1, coord.col() + 1, mark)
    }

    /// Caption for the reset control.
    pub fn reset_label(&self) -> &'static str {
        if self.status.is_ongoing() {
            "Reset"
        } else {
            "Play again"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameCoordinator;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_labels_for_fresh_game() {
        let snapshot = GameCoordinator::new().snapshot();
        assert_eq!(snapshot.cell_label(at(0, 2)), "Cell 1-3: empty");
        assert_eq!(snapshot.reset_label(), "Reset");
        assert!(snapshot.is_cell_playable(at(1, 1)));
    }

    #[test]
    fn test_won_game_disables_cells() {
        let mut game = GameCoordinator::new();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.make_move(r, c);
        }
        let snapshot = game.snapshot();

        assert_eq!(snapshot.cell_label(at(1, 0)), "Cell 2-1: O");
        assert_eq!(snapshot.reset_label(), "Play again");
        assert!(!snapshot.is_cell_playable(at(2, 2)));
        assert!(snapshot.is_winning_cell(at(0, 1)));
        assert!(!snapshot.is_winning_cell(at(1, 1)));
    }

    #[test]
    fn test_json_uses_view_field_names() {
        let mut game = GameCoordinator::new();
        game.make_move(0, 0);
        let json = serde_json::to_value(game.snapshot()).unwrap();

        assert_eq!(json["currentPlayer"], "O");
        assert_eq!(json["status"]["type"], "ongoing");
        assert_eq!(json["status"]["nextPlayer"], "O");
        assert_eq!(json["board"][0][0], "X");
        assert!(json["winningLine"].is_null());
    }
}
