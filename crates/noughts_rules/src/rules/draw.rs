//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if every cell on the board is occupied.
///
/// This does not look for a winner: a full board can still contain a
/// winning line. [`derive_status`](super::derive_status) decides which
/// outcome takes precedence.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
