//! Single winner invariant: at most one player owns a complete line.

use super::Invariant;
use crate::{Board, rules::completed_lines};

/// Invariant: no two distinct players both have three in a row.
///
/// Play stops at the first win, so a second owner means the board was
/// edited outside the rules.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let mut owners = completed_lines(board).map(|(player, _)| player);
        match owners.next() {
            Some(first) => owners.all(|player| player == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one player owns a complete line"
    }
}
