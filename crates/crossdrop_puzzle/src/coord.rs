//! Grid coordinates and the value-type keys built from them.
//!
//! Cells and word starts are keyed by structured values rather than
//! concatenated strings, so `(1, 12)` and `(11, 2)` can never collide.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// A cell position, zero-based, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index in `[0, rows)`.
    pub row: usize,
    /// Column index in `[0, cols)`.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the cell `offset` steps away in the given orientation.
    pub fn step(self, orientation: Orientation, offset: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col + offset),
            Orientation::Vertical => Self::new(self.row + offset, self.col),
        }
    }

    /// Returns true if the coordinate lies inside a `rows` x `cols` grid.
    pub fn in_bounds(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Placement direction of a word or tile.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    /// Left to right (an "across" entry).
    Horizontal,
    /// Top to bottom (a "down" entry).
    Vertical,
}

impl Orientation {
    /// Returns the other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Suffix used in clue-derived word ids (`"A"` or `"D"`).
    pub fn id_suffix(self) -> &'static str {
        match self {
            Orientation::Horizontal => "A",
            Orientation::Vertical => "D",
        }
    }

    /// Single-letter badge shown on tiles.
    pub fn badge(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }
}

/// Identity of a word's authored start: its first cell plus orientation.
///
/// No two words in a puzzle share a start key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StartKey {
    /// First cell of the word.
    pub cell: Coord,
    /// Authored orientation.
    pub orientation: Orientation,
}

impl StartKey {
    /// Creates a start key.
    pub const fn new(cell: Coord, orientation: Orientation) -> Self {
        Self { cell, orientation }
    }
}

impl std::fmt::Display for StartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.cell, self.orientation)
    }
}

/// Stable identity of a word for the lifetime of a puzzle, e.g. `"14-D"`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct WordId(String);

impl WordId {
    /// Creates a word id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id derived from a clue number, e.g. `7-A`.
    pub fn numbered(number: u32, orientation: Orientation) -> Self {
        Self(format!("{}-{}", number, orientation.id_suffix()))
    }

    /// Position-based id for starts that carry no clue number, e.g. `3,4-D`.
    pub fn positional(cell: Coord, orientation: Orientation) -> Self {
        Self(format!("{},{}-{}", cell.row, cell.col, orientation.id_suffix()))
    }

    /// Borrows the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for WordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
