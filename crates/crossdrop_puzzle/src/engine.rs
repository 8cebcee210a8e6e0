//! Placement engine: drop validation, reveal and auto-solve.
//!
//! The engine is the only owner of [`PlacementState`]. Every mutating call
//! runs the auto-solve sweep to completion before returning, so callers
//! always observe a saturated state.

use crate::action::{PlacementOutcome, RejectReason, RevealOutcome, TileDrop};
use crate::contracts::{Contract, DropContract};
use crate::coord::{Coord, Orientation, WordId};
use crate::error::{EngineError, PuzzleError};
use crate::index::PuzzleIndexes;
use crate::puzzle::Puzzle;
use crate::state::PlacementState;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Validates drops against the authored solution and tracks what is revealed.
///
/// Cloning is cheap: the puzzle and its indexes are shared.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    puzzle: Arc<Puzzle>,
    indexes: Arc<PuzzleIndexes>,
    state: PlacementState,
}

impl PlacementEngine {
    /// Creates an engine with nothing revealed.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the indexes cannot be built.
    pub fn new(puzzle: Puzzle) -> Result<Self, PuzzleError> {
        Self::from_arc(Arc::new(puzzle))
    }

    /// Creates an engine over a shared puzzle.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the indexes cannot be built.
    #[instrument(skip(puzzle), fields(rows = puzzle.rows(), cols = puzzle.cols()))]
    pub fn from_arc(puzzle: Arc<Puzzle>) -> Result<Self, PuzzleError> {
        let indexes = Arc::new(PuzzleIndexes::build(&puzzle)?);
        info!(words = indexes.len(), "Placement engine ready");
        Ok(Self {
            puzzle,
            indexes,
            state: PlacementState::new(),
        })
    }

    /// The puzzle being solved.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Lookup indexes of the puzzle.
    pub fn indexes(&self) -> &PuzzleIndexes {
        &self.indexes
    }

    /// Read-only view of the placement state.
    pub fn state(&self) -> &PlacementState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut PlacementState {
        &mut self.state
    }

    /// Returns true once every word is placed.
    pub fn is_solved(&self) -> bool {
        self.state.placed().len() == self.indexes.len()
    }

    /// Clears all placement state; the puzzle stays loaded.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(placed = self.state.placed().len(), "Resetting placement state");
        self.state = PlacementState::new();
    }

    /// Evaluates a drop of `word_id` at `target` in `orientation`.
    ///
    /// A drop is accepted exactly when `(target, orientation)` is the word's
    /// authored start. Rejections and repeats leave the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownWord`] if the word is not in the puzzle,
    /// and [`EngineError::InvariantViolation`] if a debug postcondition fails.
    pub fn attempt_placement(
        &mut self,
        word_id: impl Into<WordId>,
        target: Option<Coord>,
        orientation: Orientation,
    ) -> Result<PlacementOutcome, EngineError> {
        self.apply(TileDrop::new(word_id, target, orientation))
    }

    /// Evaluates a [`TileDrop`]. See [`PlacementEngine::attempt_placement`].
    ///
    /// # Errors
    ///
    /// Same as [`PlacementEngine::attempt_placement`].
    #[instrument(skip(self), fields(drop = %drop))]
    pub fn apply(&mut self, drop: TileDrop) -> Result<PlacementOutcome, EngineError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        DropContract::pre(self, &drop)?;

        if self.state.is_placed(drop.word_id.as_str()) {
            debug!("Word already placed");
            return Ok(PlacementOutcome::AlreadyPlaced(drop.word_id));
        }

        if let Some(reason) = self.reject_reason(&drop) {
            debug!(%reason, "Drop rejected");
            return Ok(PlacementOutcome::Rejected {
                word_id: drop.word_id,
                reason,
            });
        }

        let cells = self
            .indexes
            .cells_of(drop.word_id.as_str())
            .ok_or_else(|| EngineError::UnknownWord(drop.word_id.clone()))?
            .to_vec();
        let newly_revealed = self.reveal_all(&cells);
        self.state.place(drop.word_id.clone());
        let auto_solved = self.sweep();

        info!(
            word_id = %drop.word_id,
            revealed = newly_revealed.len(),
            auto_solved = auto_solved.len(),
            "Word placed"
        );

        #[cfg(debug_assertions)]
        DropContract::post(&before, self)?;

        Ok(PlacementOutcome::Placed {
            word_id: drop.word_id,
            newly_revealed,
            auto_solved,
        })
    }

    /// Reveals cells outside of a drop, e.g. a hint for a single cell.
    ///
    /// Cells that belong to no word are ignored. The auto-solve sweep runs
    /// afterwards.
    #[instrument(skip(self, cells))]
    pub fn reveal_cells(&mut self, cells: impl IntoIterator<Item = Coord>) -> RevealOutcome {
        let word_cells: Vec<Coord> = cells
            .into_iter()
            .filter(|cell| self.puzzle.letter_at(*cell).is_some())
            .collect();
        let newly_revealed = self.reveal_all(&word_cells);
        let auto_solved = self.sweep();
        if !newly_revealed.is_empty() {
            info!(
                revealed = newly_revealed.len(),
                auto_solved = auto_solved.len(),
                "Cells revealed"
            );
        }
        RevealOutcome {
            newly_revealed,
            auto_solved,
        }
    }

    /// Marks every unplaced, fully revealed word as auto-solved.
    ///
    /// One pass in authored order catches every word satisfied by the same
    /// reveal batch. Auto-solving reveals nothing new, so the pass is the
    /// fixed point. Returns the newly auto-solved words; calling it again
    /// without new reveals returns nothing.
    #[instrument(skip(self))]
    pub fn sweep(&mut self) -> Vec<WordId> {
        let satisfied: Vec<WordId> = self
            .puzzle
            .words()
            .iter()
            .filter(|word| !self.state.is_placed(word.id.as_str()))
            .filter(|word| word.cells.iter().all(|cell| self.state.is_revealed(*cell)))
            .map(|word| word.id.clone())
            .collect();

        for word_id in &satisfied {
            info!(word_id = %word_id, "Word auto-solved");
            self.state.auto_solve(word_id.clone());
        }
        satisfied
    }

    fn reveal_all(&mut self, cells: &[Coord]) -> Vec<Coord> {
        cells
            .iter()
            .copied()
            .filter(|cell| self.state.reveal(*cell))
            .collect()
    }

    /// Feedback for a drop that does not hit the authored start.
    fn reject_reason(&self, drop: &TileDrop) -> Option<RejectReason> {
        let Some(cell) = drop.target else {
            return Some(RejectReason::OutsideGrid);
        };
        if !self.puzzle.contains(cell) {
            return Some(RejectReason::OutOfBounds(cell));
        }
        if self.puzzle.is_blocked(cell) {
            return Some(RejectReason::BlockedCell(cell));
        }
        match self.indexes.word_at_start(cell, drop.orientation) {
            Some(id) if *id == drop.word_id => None,
            _ => {
                let flipped = self.indexes.word_at_start(cell, drop.orientation.flipped());
                if flipped == Some(&drop.word_id) {
                    Some(RejectReason::WrongOrientation)
                } else {
                    Some(RejectReason::WrongCell)
                }
            }
        }
    }
}
