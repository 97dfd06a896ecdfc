//! Line-oriented terminal front end.
//!
//! Reads one command per line, forwards it to a [`GameCoordinator`] as a
//! move or reset intent, and re-renders the current snapshot.

use crate::config::{AppConfig, OutputFormat};
use crate::coordinator::GameCoordinator;
use crate::snapshot::Snapshot;
use derive_more::{Display, Error};
use noughts_rules::Coord;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  <row> <col>   place a mark (0-based, e.g. `1 1` or `0,2`)
  reset         start a new game
  show          print the board again
  help          show this message
  quit          leave";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Move {
        /// Row index as typed.
        row: usize,
        /// Column index as typed.
        col: usize,
    },
    /// Start over.
    Reset,
    /// Re-render without changing anything.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// Word that is not a known command.
    #[display("Unknown command {:?}, type `help`", _0)]
    Unknown(#[error(not(source))] String),
    /// Move whose indices are not non-negative integers.
    #[display("Expected two numbers like `1 2`, got {:?}", _0)]
    InvalidMove(#[error(not(source))] String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "reset" | "r" => return Ok(Command::Reset),
            "show" | "s" => return Ok(Command::Show),
            "help" | "h" | "?" => return Ok(Command::Help),
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        let parts: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] if row.starts_with(|c: char| c.is_ascii_digit()) => {
                let invalid = || CommandError::InvalidMove(line.to_string());
                let row = row.parse().map_err(|_| invalid())?;
                let col = col.parse().map_err(|_| invalid())?;
                Ok(Command::Move { row, col })
            }
            [first, ..] if first.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
                Err(CommandError::InvalidMove(line.to_string()))
            }
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}

/// Renders one frame of `snapshot` in the configured format.
pub fn render_frame(snapshot: &Snapshot, config: &AppConfig) -> anyhow::Result<String> {
    match config.output() {
        OutputFormat::Json => Ok(serde_json::to_string(snapshot)?),
        OutputFormat::Text => {
            let mut frame = snapshot.board().render(*config.empty_glyph());
            frame.push('\n');
            frame.push_str(&snapshot.status().to_string());
            let winning: Vec<String> = Coord::ALL
                .into_iter()
                .filter(|&coord| snapshot.is_winning_cell(coord))
                .map(|coord| coord.to_string())
                .collect();
            if !winning.is_empty() {
                frame.push_str(&format!("\nWinning line: {}", winning.join(" ")));
            }
            if !snapshot.status().is_ongoing() {
                frame.push_str(&format!("\n{}? Type `reset`", snapshot.reset_label()));
            }
            Ok(frame)
        }
    }
}

/// Interactive session over arbitrary line input and text output.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
    config: AppConfig,
    game: GameCoordinator,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal around a fresh game.
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        Self {
            input,
            output,
            config,
            game: GameCoordinator::new(),
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameCoordinator {
        &self.game
    }

    /// Consumes the terminal and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!(output = %self.config.output(), "Terminal session started");
        self.render()?;

        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command)?,
                Err(CommandError::Empty) => {}
                Err(err) => {
                    debug!(%err, "Unparseable input");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }

        info!("Terminal session ended");
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Move { row, col } => {
                self.game.make_move(row, col);
                self.render()
            }
            Command::Reset => {
                self.game.reset();
                self.render()
            }
            Command::Show => self.render(),
            Command::Help => Ok(writeln!(self.output, "{}", HELP)?),
            Command::Quit => Ok(()),
        }
    }

    fn prompt(&mut self) -> anyhow::Result<()> {
        if *self.config.output() == OutputFormat::Text {
            write!(self.output, "> ")?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let frame = render_frame(&self.game.snapshot(), &self.config)?;
        writeln!(self.output, "{}", frame)?;
        Ok(())
    }
}
