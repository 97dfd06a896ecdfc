//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe on a 3x3 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (overrides NOUGHTS_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play,

    /// Apply moves to a fresh game and print the final state
    Replay {
        /// Print the snapshot as JSON regardless of config
        #[arg(long)]
        json: bool,

        /// Moves as `row,col` pairs, X first
        #[arg(value_parser = parse_move)]
        moves: Vec<(usize, usize)>,
    },
}

/// Parses a `row,col` pair.
fn parse_move(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got {:?}", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row {:?}: {}", row, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column {:?}: {}", col, e))?;
    Ok((row, col))
}
