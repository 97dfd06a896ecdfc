//! Session coordinator: the single owner of a game's mutable state.

use crate::snapshot::Snapshot;
use noughts_rules::{
    Board, Coord, Player, apply_move, create_empty_board, derive_status, find_winning_line,
    other_player,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a move intent changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    /// The game has already been won or drawn.
    #[strum(to_string = "game is over")]
    GameOver,
    /// Row or column outside `0..3`.
    #[strum(to_string = "coordinate is off the board")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[strum(to_string = "cell is occupied")]
    Occupied,
}

/// What a move intent did.
///
/// This is informational: an ignored move is a silent no-op for the view,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum MoveEffect {
    /// The mark was placed and the turn passed to the other player.
    Applied {
        /// Where the mark was placed.
        coord: Coord,
        /// Who placed it.
        player: Player,
    },
    /// Nothing changed.
    Ignored {
        /// Why the intent was dropped.
        reason: IgnoredReason,
    },
}

impl MoveEffect {
    /// True if the move changed the session.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveEffect::Applied { .. })
    }
}

/// Owns one session's board and current player, and exposes the two
/// intents a view may send: [`make_move`](Self::make_move) and
/// [`reset`](Self::reset).
///
/// Status and winning line are never stored; [`snapshot`](Self::snapshot)
/// derives them from the board on every call. Intents take `&mut self`, so
/// a coordinator has exactly one mutating owner. Run independent sessions by
/// constructing one coordinator each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCoordinator {
    board: Board,
    current_player: Player,
}

impl GameCoordinator {
    /// Starts a session with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: create_empty_board(),
            current_player: Player::STARTING,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who moves next while the game is ongoing.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the current state with status and winning line derived fresh.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.board,
            self.current_player,
            derive_status(&self.board, self.current_player),
            find_winning_line(&self.board),
        )
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Ignored when the game is over, the coordinate is off the board, or the
    /// cell is taken. On success the board is replaced and the turn passes.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, row: usize, col: usize) -> MoveEffect {
        let status = derive_status(&self.board, self.current_player);
        if !status.is_ongoing() {
            debug!(%status, "Move ignored, game is over");
            return MoveEffect::Ignored {
                reason: IgnoredReason::GameOver,
            };
        }

        let Some(coord) = Coord::new(row, col) else {
            debug!("Move ignored, coordinate off the board");
            return MoveEffect::Ignored {
                reason: IgnoredReason::OutOfBounds,
            };
        };

        let outcome = apply_move(&self.board, coord, self.current_player);
        if !outcome.valid {
            debug!(%coord, "Move ignored, cell occupied");
            return MoveEffect::Ignored {
                reason: IgnoredReason::Occupied,
            };
        }

        let player = self.current_player;
        self.board = outcome.board;
        self.current_player = other_player(player);
        debug!(%coord, next = %self.current_player, "Move applied");

        #[cfg(debug_assertions)]
        assert_board_invariants(&self.board);

        MoveEffect::Applied { coord, player }
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = create_empty_board();
        self.current_player = Player::STARTING;
        info!("Game reset");
    }
}

/// Checks every board invariant after a committed move (debug builds only).
#[cfg(debug_assertions)]
fn assert_board_invariants(board: &Board) {
    use noughts_rules::invariants::{BoardInvariants, InvariantSet};

    let result = BoardInvariants::check_all(board);
    if let Err(violations) = &result {
        for violation in violations {
            tracing::warn!(%violation, "Board invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "Board invariants violated: {:?}", result);
}

impl Default for GameCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
