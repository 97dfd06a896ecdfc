//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// The player who opens every game.
    pub const STARTING: Player = Player::X;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    fn glyph(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A single grid position, empty or holding one player's mark.
///
/// Serializes as `null` or the player symbol, which is the shape a view layer
/// expects for a grid of optional marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Player>", into = "Option<Player>")]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// True when no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Player>> for Cell {
    fn from(value: Option<Player>) -> Self {
        value.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl From<Cell> for Option<Player> {
    fn from(value: Cell) -> Self {
        value.player()
    }
}

/// Coordinate outside the 3×3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Coordinate ({}, {}) is outside the 3x3 board", row, col)]
pub struct CoordOutOfRange {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

/// A `(row, col)` pair guaranteed to lie on the board.
///
/// The only public constructor is checked, so code holding a `Coord`
/// never has to re-validate bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "[usize; 2]", try_from = "[usize; 2]")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Number of rows and columns on the board.
    pub const SIZE: usize = 3;

    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Creates a coordinate, or `None` if either index is outside `0..3`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < Self::SIZE && col < Self::SIZE).then_some(Self { row, col })
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<Coord> for [usize; 2] {
    fn from(value: Coord) -> Self {
        [value.row, value.col]
    }
}

impl TryFrom<[usize; 2]> for Coord {
    type Error = CoordOutOfRange;

    fn try_from([row, col]: [usize; 2]) -> Result<Self, Self::Error> {
        Coord::new(row, col).ok_or(CoordOutOfRange { row, col })
    }
}

/// 3×3 tic-tac-toe board.
///
/// `Board` is a plain `Copy` value: placing a mark produces a new board and
/// leaves every earlier copy untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    ///
    /// No rule checks are applied, so this can describe positions that are
    /// unreachable in play.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Checks if a cell is empty.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Returns a copy of this board with `coord` set to `cell`.
    pub(crate) fn with(mut self, coord: Coord, cell: Cell) -> Self {
        self.cells[coord.row][coord.col] = cell;
        self
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::ALL.into_iter().map(|coord| (coord, self.get(coord)))
    }

    /// Number of marks the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Coordinates of all empty cells, row-major.
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// True when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, cell)| !cell.is_empty())
    }

    /// Formats the board with a custom glyph for empty cells.
    pub fn render(&self, empty: char) -> String {
        let mut result = String::new();
        for (row_idx, row) in self.cells.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                result.push(cell.player().map_or(empty, Player::glyph));
                if col_idx < 2 {
                    result.push('|');
                }
            }
            if row_idx < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render('.'))
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character other than `X`, `O`, `.` or a separator was found.
    #[display("Unexpected character {:?} in board text", _0)]
    UnexpectedChar(#[error(not(source))] char),
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order from `X`, `O` and `.`/`_`.
    ///
    /// Whitespace, `/`, `|`, `-` and `+` are ignored, so both `"XO./.../..."`
    /// and the output of `Display` parse back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            match ch {
                'X' | 'x' => cells.push(Cell::Occupied(Player::X)),
                'O' | 'o' => cells.push(Cell::Occupied(Player::O)),
                '.' | '_' => cells.push(Cell::Empty),
                c if c.is_whitespace() || matches!(c, '/' | '|' | '-' | '+') => {}
                c => return Err(BoardParseError::UnexpectedChar(c)),
            }
        }
        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let board = Coord::ALL
            .into_iter()
            .zip(cells)
            .fold(Board::new(), |board, (coord, cell)| board.with(coord, cell));
        Ok(board)
    }
}
