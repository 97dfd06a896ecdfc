//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules operate on `Board` values and
//! never mutate their inputs, so they can be called from any thread.

pub mod draw;
pub mod moves;
pub mod status;
pub mod win;

pub use draw::is_draw;
pub use moves::{MoveOutcome, apply_move, create_empty_board, other_player};
pub use status::{GameStatus, derive_status};
pub use win::{LINES, WinningLine, completed_lines, find_winner, find_winning_line};
