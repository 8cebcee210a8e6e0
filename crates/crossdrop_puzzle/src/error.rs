//! Error types for puzzle loading and the placement engine.
//!
//! Rejected drops are not errors; see [`crate::RejectReason`].

use crate::coord::{Coord, StartKey, WordId};

/// A fatal problem with an authored puzzle. No `Puzzle` is produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PuzzleError {
    /// Width or height is zero.
    #[display("Invalid dimensions {}x{}", width, height)]
    InvalidDimensions {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },

    /// A grid does not have `height` rows of `width` entries.
    #[display("{} grid row {} has {} entries, expected {}", grid, row, actual, expected)]
    ShapeMismatch {
        /// Which grid (`puzzle` or `solution`).
        grid: &'static str,
        /// Offending row, or the row count when rows are missing.
        row: usize,
        /// Entries found.
        actual: usize,
        /// Entries expected.
        expected: usize,
    },

    /// A cell used by a word has no solution letter.
    #[display("Missing solution letter at {}", _0)]
    MissingLetter(Coord),

    /// A solution entry is not a single letter.
    #[display("Invalid solution letter {:?} at {}", value, cell)]
    InvalidLetter {
        /// Cell of the bad entry.
        cell: Coord,
        /// Raw value found.
        value: String,
    },

    /// A word spans fewer than two cells.
    #[display("Word {} has length {} (1-letter words are not allowed)", id, len)]
    WordTooShort {
        /// Word identity.
        id: WordId,
        /// Number of cells.
        len: usize,
    },

    /// A word's cells leave the grid.
    #[display("Word {} runs out of the grid at {}", id, cell)]
    OutOfBounds {
        /// Word identity.
        id: WordId,
        /// First cell outside the grid.
        cell: Coord,
    },

    /// A word's cells are not a contiguous run in its orientation.
    #[display("Word {} is not contiguous", _0)]
    NotContiguous(WordId),

    /// A word's text length differs from its cell count.
    #[display("Word {} has {} letters for {} cells", id, letters, cells)]
    LengthMismatch {
        /// Word identity.
        id: WordId,
        /// Letters in the text.
        letters: usize,
        /// Cells in the word.
        cells: usize,
    },

    /// Two words share an identity.
    #[display("Duplicate word id {}", _0)]
    DuplicateWordId(WordId),

    /// Two words share a start cell and orientation.
    #[display("Duplicate start for {} ({} and {})", key, first, second)]
    DuplicateStart {
        /// The shared start.
        key: StartKey,
        /// Word already holding the start.
        first: WordId,
        /// Word that collided with it.
        second: WordId,
    },

    /// Crossing words disagree on the letter of a shared cell.
    #[display("Letter conflict at {}: {} vs {}", cell, first, second)]
    LetterConflict {
        /// The shared cell.
        cell: Coord,
        /// Letter already recorded.
        first: char,
        /// Conflicting letter.
        second: char,
    },

    /// The document is not valid JSON for the expected schema.
    #[display("Malformed puzzle document: {}", _0)]
    Malformed(String),
}

impl std::error::Error for PuzzleError {}

impl From<serde_json::Error> for PuzzleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Error raised by the placement engine.
///
/// Both variants mean the caller or the engine broke a contract; they are
/// never the result of ordinary player experimentation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The word identity is not part of the loaded puzzle.
    #[display("Unknown word {}", _0)]
    UnknownWord(WordId),

    /// An internal invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
