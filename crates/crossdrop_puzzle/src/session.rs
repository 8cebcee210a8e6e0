//! Board session: the event interface between a renderer and the engine.

use crate::action::{PlacementOutcome, RevealOutcome, TileDrop};
use crate::coord::{Coord, Orientation, WordId};
use crate::engine::PlacementEngine;
use crate::error::{EngineError, PuzzleError};
use crate::pool::{PoolOrder, TileOrientationPolicy, TilePool};
use crate::puzzle::Puzzle;
use crate::view::{BoardView, RevealedCell};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Presentation options that shape the session but not its rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Initial orientation of tiles.
    pub tile_orientation: TileOrientationPolicy,
    /// Pool listing order.
    pub pool_order: PoolOrder,
    /// Expose word start cells in the view.
    pub show_start_hints: bool,
}

/// Events raised by the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A tile was released, over a cell or outside the grid.
    DragEnded {
        /// The dragged word.
        word_id: WordId,
        /// Cell under the tile, if any.
        target: Option<Coord>,
        /// The tile's orientation at release.
        orientation: Orientation,
    },
    /// The player rotated a tile in the pool.
    ToggleOrientation {
        /// The rotated word.
        word_id: WordId,
    },
    /// The player asked for one letter.
    RevealCell {
        /// Cell to reveal.
        cell: Coord,
    },
}

/// What changed in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardUpdate {
    /// Result of a drop, including rejections.
    Drop(PlacementOutcome),
    /// A tile now has this orientation.
    Rotated {
        /// The rotated word.
        word_id: WordId,
        /// Its new orientation.
        orientation: Orientation,
    },
    /// Result of a hint.
    Revealed(RevealOutcome),
    /// The event had no effect (e.g. rotating a placed tile).
    Ignored,
}

/// One puzzle being played: engine, tile pool and render bookkeeping.
#[derive(Debug, Clone)]
pub struct BoardSession {
    engine: PlacementEngine,
    pool: TilePool,
    options: SessionOptions,
    pending_auto_solved: Vec<WordId>,
}

impl BoardSession {
    /// Starts a session on a validated puzzle.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the puzzle cannot be indexed.
    #[instrument(skip(puzzle), fields(title = puzzle.title().unwrap_or("untitled")))]
    pub fn new(puzzle: Puzzle, options: SessionOptions) -> Result<Self, PuzzleError> {
        let pool = TilePool::new(&puzzle, options.tile_orientation);
        let engine = PlacementEngine::new(puzzle)?;
        info!(tiles = pool.tiles().len(), "Board session started");
        Ok(Self {
            engine,
            pool,
            options,
            pending_auto_solved: Vec::new(),
        })
    }

    /// Parses an ipuz document and starts a session on it.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the document is invalid.
    pub fn from_ipuz_str(json: &str, options: SessionOptions) -> Result<Self, PuzzleError> {
        Self::new(Puzzle::from_ipuz_str(json)?, options)
    }

    /// The underlying engine.
    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    /// The tile pool.
    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    /// Returns true once every word is placed.
    pub fn is_solved(&self) -> bool {
        self.engine.is_solved()
    }

    /// Applies one renderer event.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] for drops of unknown words or internal
    /// invariant violations. Invalid drops are not errors.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: BoardEvent) -> Result<BoardUpdate, EngineError> {
        let update = match event {
            BoardEvent::DragEnded {
                word_id,
                target,
                orientation,
            } => {
                let outcome = self
                    .engine
                    .apply(TileDrop::new(word_id, target, orientation))?;
                self.pending_auto_solved
                    .extend(outcome.auto_solved().iter().cloned());
                BoardUpdate::Drop(outcome)
            }
            BoardEvent::ToggleOrientation { word_id } => {
                match self
                    .pool
                    .toggle_orientation(word_id.as_str(), self.engine.state().placed())
                {
                    Some(orientation) => BoardUpdate::Rotated {
                        word_id,
                        orientation,
                    },
                    None => BoardUpdate::Ignored,
                }
            }
            BoardEvent::RevealCell { cell } => {
                let outcome = self.engine.reveal_cells([cell]);
                if outcome == RevealOutcome::default() {
                    BoardUpdate::Ignored
                } else {
                    self.pending_auto_solved
                        .extend(outcome.auto_solved.iter().cloned());
                    BoardUpdate::Revealed(outcome)
                }
            }
        };
        debug!(?update, "Event handled");
        Ok(update)
    }

    /// Projects the current state for rendering.
    pub fn view(&self) -> BoardView {
        let puzzle = self.engine.puzzle();
        let state = self.engine.state();
        let revealed = state
            .revealed()
            .iter()
            .filter_map(|cell| {
                puzzle.letter_at(*cell).map(|letter| RevealedCell {
                    cell: *cell,
                    letter,
                })
            })
            .collect();
        let start_cells = if self.options.show_start_hints {
            puzzle.start_cells().iter().copied().collect()
        } else {
            Vec::new()
        };
        let tiles = self
            .pool
            .unplaced(state.placed(), self.options.pool_order)
            .into_iter()
            .cloned()
            .collect();

        BoardView {
            rows: puzzle.rows(),
            cols: puzzle.cols(),
            title: puzzle.title().map(str::to_string),
            blocked: puzzle.blocked().iter().copied().collect(),
            revealed,
            start_cells,
            tiles,
            auto_solved: self.pending_auto_solved.clone(),
            placed: state.placed().len(),
            total: self.engine.indexes().len(),
            solved: self.engine.is_solved(),
        }
    }

    /// Clears the auto-solved list once the renderer has shown it.
    pub fn mark_rendered(&mut self) {
        self.pending_auto_solved.clear();
    }

    /// Starts over on the same puzzle.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.engine.reset();
        self.pool.reset();
        self.pending_auto_solved.clear();
    }
}
