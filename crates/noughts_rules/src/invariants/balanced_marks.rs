//! Balanced marks invariant: players alternate, X first.

use super::Invariant;
use crate::{Board, Player};

/// Invariant: X has as many marks as O, or exactly one more.
///
/// Holds for every board produced by alternating moves starting with
/// [`Player::STARTING`].
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let opener = board.count(Player::STARTING);
        let second = board.count(Player::STARTING.opponent());
        opener == second || opener == second + 1
    }

    fn description() -> &'static str {
        "Marks are balanced (X equals O or leads by one)"
    }
}
