//! Pure rules for two-player tic-tac-toe on a 3×3 grid.
//!
//! Every function here takes a [`Board`] by reference and returns a fresh
//! value; nothing is mutated in place and there is no shared state, so the
//! rules can be called from any thread without synchronization.
//!
//! # Example
//!
//! ```
//! use noughts_rules::{Coord, GameStatus, Player, apply_move, create_empty_board, derive_status};
//!
//! let board = create_empty_board();
//! let outcome = apply_move(&board, Coord::new(1, 1).unwrap(), Player::X);
//! assert!(outcome.valid);
//! assert_eq!(
//!     derive_status(&outcome.board, Player::O),
//!     GameStatus::Ongoing { next_player: Player::O },
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod invariants;
pub mod rules;
mod types;

pub use rules::{
    GameStatus, LINES, MoveOutcome, WinningLine, apply_move, completed_lines, create_empty_board,
    derive_status, find_winner, find_winning_line, is_draw, other_player,
};
pub use types::{Board, BoardParseError, Cell, Coord, CoordOutOfRange, Player};
