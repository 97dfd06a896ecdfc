//! Status derivation for tic-tac-toe.

use super::{find_winner, is_draw};
use crate::{Board, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Derived outcome of a board plus whose turn is next.
///
/// Serializes as `{"type":"ongoing","nextPlayer":"X"}`,
/// `{"type":"win","winner":"O"}` or `{"type":"draw"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum GameStatus {
    /// Game not yet decided.
    #[display("Your turn: {next_player}")]
    Ongoing {
        /// Who may move next.
        next_player: Player,
    },
    /// A line of three matching marks exists.
    #[display("Winner: {winner}")]
    Win {
        /// Owner of the first winning line.
        winner: Player,
    },
    /// No winner and no empty cells remain.
    #[display("It's a draw")]
    Draw,
}

impl GameStatus {
    /// True while moves are still accepted.
    pub fn is_ongoing(&self) -> bool {
        matches!(self, GameStatus::Ongoing { .. })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Win { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the player to move if the game is ongoing.
    pub fn next_player(&self) -> Option<Player> {
        match self {
            GameStatus::Ongoing { next_player } => Some(*next_player),
            _ => None,
        }
    }
}

/// Derives the status of `board` with `next_player` to move.
///
/// A win takes precedence over a draw, even when the winning move also
/// fills the board.
#[instrument(level = "trace")]
pub fn derive_status(board: &Board, next_player: Player) -> GameStatus {
    if let Some(winner) = find_winner(board) {
        GameStatus::Win { winner }
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing { next_player }
    }
}
