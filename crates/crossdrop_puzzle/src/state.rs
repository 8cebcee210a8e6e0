//! Mutable placement state of one puzzle session.

use crate::coord::{Coord, WordId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Revealed cells and placed words. Both sets only grow during a session.
///
/// Owned and mutated exclusively by [`crate::PlacementEngine`]; everyone
/// else gets `&PlacementState`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementState {
    revealed: BTreeSet<Coord>,
    placed: BTreeSet<WordId>,
    auto_solved: BTreeSet<WordId>,
}

impl PlacementState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells whose letters are visible.
    pub fn revealed(&self) -> &BTreeSet<Coord> {
        &self.revealed
    }

    /// Words that are placed, directly or by auto-solve.
    pub fn placed(&self) -> &BTreeSet<WordId> {
        &self.placed
    }

    /// The subset of placed words that were auto-solved.
    pub fn auto_solved(&self) -> &BTreeSet<WordId> {
        &self.auto_solved
    }

    /// Returns true if the cell is revealed.
    pub fn is_revealed(&self, cell: Coord) -> bool {
        self.revealed.contains(&cell)
    }

    /// Returns true if the word is placed.
    pub fn is_placed(&self, word_id: &str) -> bool {
        self.placed.contains(word_id)
    }

    /// Returns true if every state set of `before` is contained in `self`.
    pub fn extends(&self, before: &PlacementState) -> bool {
        self.revealed.is_superset(&before.revealed)
            && self.placed.is_superset(&before.placed)
            && self.auto_solved.is_superset(&before.auto_solved)
    }

    /// Reveals a cell; returns true if it was hidden.
    pub(crate) fn reveal(&mut self, cell: Coord) -> bool {
        self.revealed.insert(cell)
    }

    /// Marks a word placed by a direct drop.
    pub(crate) fn place(&mut self, word_id: WordId) -> bool {
        self.placed.insert(word_id)
    }

    /// Marks a word placed by auto-solve.
    pub(crate) fn auto_solve(&mut self, word_id: WordId) -> bool {
        self.auto_solved.insert(word_id.clone());
        self.placed.insert(word_id)
    }

    #[cfg(test)]
    pub(crate) fn revealed_mut(&mut self) -> &mut BTreeSet<Coord> {
        &mut self.revealed
    }

    #[cfg(test)]
    pub(crate) fn placed_mut(&mut self) -> &mut BTreeSet<WordId> {
        &mut self.placed
    }
}
