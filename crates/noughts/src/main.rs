//! Noughts - terminal tic-tac-toe
//!
//! Interactive play and scripted replay over the session coordinator.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{AppConfig, GameCoordinator, OutputFormat, Terminal, render_frame};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (config, source) = AppConfig::resolve(cli.config.as_deref())?;
    init_tracing(&config);
    source.log();

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { json, moves } => {
            let config = if json {
                config.with_output(OutputFormat::Json)
            } else {
                config
            };
            run_replay(config, &moves)
        }
    }
}

/// Installs the fmt subscriber on stderr so stdout carries only frames.
fn init_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: AppConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Terminal::new(stdin, stdout, config).run()
}

/// Apply moves to a fresh game and print the final frame
#[instrument(skip(config))]
fn run_replay(config: AppConfig, moves: &[(usize, usize)]) -> Result<()> {
    let mut game = GameCoordinator::new();
    for &(row, col) in moves {
        let effect = game.make_move(row, col);
        debug!(row, col, ?effect, "Replayed move");
    }

    println!("{}", render_frame(&game.snapshot(), &config)?);
    Ok(())
}
