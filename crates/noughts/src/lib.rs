//! Noughts - tic-tac-toe session coordination
//!
//! This library sequences moves for a single game of tic-tac-toe and derives
//! what a view needs to show after each one.
//!
//! # Architecture
//!
//! - **Rules**: pure board functions, re-exported from `noughts_rules`
//! - **Coordinator**: owns the mutable session (board + current player)
//! - **Snapshot**: board, player, status and winning line at one moment
//! - **Terminal**: a line-oriented front end over the coordinator
//!
//! # Example
//!
//! ```
//! use noughts::{GameCoordinator, GameStatus, Player};
//!
//! let mut game = GameCoordinator::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.make_move(row, col);
//! }
//! assert_eq!(*game.snapshot().status(), GameStatus::Win { winner: Player::X });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod coordinator;
mod snapshot;
mod terminal;

// Crate-level exports - Configuration
pub use config::{AppConfig, CONFIG_ENV, ConfigError, ConfigSource, OutputFormat};

// Crate-level exports - Session coordination
pub use coordinator::{GameCoordinator, IgnoredReason, MoveEffect};
pub use snapshot::Snapshot;

// Crate-level exports - Terminal front end
pub use terminal::{Command, CommandError, Terminal, render_frame};

// Crate-level exports - Game types
pub use noughts_rules::{Board, Cell, Coord, GameStatus, Player, WinningLine};
