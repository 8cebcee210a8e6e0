//! Lookup indexes derived once per puzzle load.

use crate::coord::{Coord, Orientation, StartKey, WordId};
use crate::error::PuzzleError;
use crate::puzzle::Puzzle;
use std::collections::HashMap;
use tracing::instrument;

/// Start-key and word-cell lookups for O(1) drop validation and reveal.
///
/// Pure function of a [`Puzzle`]; rebuilt, never mutated, when the puzzle
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleIndexes {
    start_index: HashMap<StartKey, WordId>,
    word_cells: HashMap<WordId, Vec<Coord>>,
}

impl PuzzleIndexes {
    /// Builds both indexes.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::DuplicateStart`] if two words share a start
    /// cell and orientation, and [`PuzzleError::WordTooShort`] for words of
    /// fewer than two cells.
    #[instrument(skip(puzzle), fields(words = puzzle.words().len()))]
    pub fn build(puzzle: &Puzzle) -> Result<Self, PuzzleError> {
        let mut start_index = HashMap::with_capacity(puzzle.words().len());
        let mut word_cells = HashMap::with_capacity(puzzle.words().len());

        for word in puzzle.words() {
            if word.cells.len() < 2 {
                return Err(PuzzleError::WordTooShort {
                    id: word.id.clone(),
                    len: word.cells.len(),
                });
            }
            let key = word.start_key();
            if let Some(first) = start_index.insert(key, word.id.clone()) {
                return Err(PuzzleError::DuplicateStart {
                    key,
                    first,
                    second: word.id.clone(),
                });
            }
            word_cells.insert(word.id.clone(), word.cells.clone());
        }

        Ok(Self {
            start_index,
            word_cells,
        })
    }

    /// The word whose authored start is this cell in this orientation.
    pub fn word_at_start(&self, cell: Coord, orientation: Orientation) -> Option<&WordId> {
        self.start_index.get(&StartKey::new(cell, orientation))
    }

    /// Ordered cells of a word.
    pub fn cells_of(&self, word_id: &str) -> Option<&[Coord]> {
        self.word_cells.get(word_id).map(Vec::as_slice)
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.word_cells.len()
    }

    /// Returns true if no words are indexed.
    pub fn is_empty(&self) -> bool {
        self.word_cells.is_empty()
    }
}
