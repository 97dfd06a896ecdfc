//! Winner and winning line agree.

use super::Invariant;
use crate::{Board, Cell, find_winner, find_winning_line};

/// Invariant: [`find_winner`] and [`find_winning_line`] are both present or
/// both absent, and every cell on the line holds the winner.
pub struct WinningLineAgrees;

impl Invariant<Board> for WinningLineAgrees {
    fn holds(board: &Board) -> bool {
        match (find_winner(board), find_winning_line(board)) {
            (None, None) => true,
            (Some(winner), Some(line)) => line
                .coords()
                .iter()
                .all(|&coord| board.get(coord) == Cell::Occupied(winner)),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Winner and winning line agree"
    }
}
