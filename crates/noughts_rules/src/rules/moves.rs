//! Move application for tic-tac-toe.

use crate::{Board, Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Result of applying a move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The board after the move, or the input board if it was rejected.
    pub board: Board,
    /// Whether the target cell was empty and the mark was placed.
    pub valid: bool,
}

/// Creates a board with all nine cells empty.
pub fn create_empty_board() -> Board {
    Board::new()
}

/// Places `player`'s mark at `coord`.
///
/// An occupied target yields `valid = false` and the input board unchanged.
/// Otherwise a new board is returned that differs from the input only at
/// `coord`. The input is never modified.
#[instrument(level = "trace", skip(board))]
pub fn apply_move(board: &Board, coord: Coord, player: Player) -> MoveOutcome {
    if !board.is_empty_at(coord) {
        trace!(%coord, "Target cell occupied");
        return MoveOutcome {
            board: *board,
            valid: false,
        };
    }

    MoveOutcome {
        board: board.with(coord, Cell::Occupied(player)),
        valid: true,
    }
}

/// Returns the other player.
pub fn other_player(player: Player) -> Player {
    player.opponent()
}
