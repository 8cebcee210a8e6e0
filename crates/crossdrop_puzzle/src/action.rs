//! First-class drop actions and their outcomes.
//!
//! A drop is a domain event: the player's claim that a word starts at a
//! cell in a given orientation. It is validated independently of being
//! applied.

use crate::coord::{Coord, Orientation, WordId};
use serde::{Deserialize, Serialize};

/// A tile released over the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileDrop {
    /// The dragged word.
    pub word_id: WordId,
    /// Cell under the tile, or `None` if released outside the grid.
    pub target: Option<Coord>,
    /// The tile's orientation at drop time.
    pub orientation: Orientation,
}

impl TileDrop {
    /// Creates a drop.
    pub fn new(
        word_id: impl Into<WordId>,
        target: Option<Coord>,
        orientation: Orientation,
    ) -> Self {
        Self {
            word_id: word_id.into(),
            target,
            orientation,
        }
    }

    /// Creates a drop onto a cell.
    pub fn at(word_id: impl Into<WordId>, target: Coord, orientation: Orientation) -> Self {
        Self::new(word_id, Some(target), orientation)
    }
}

impl std::fmt::Display for TileDrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.target {
            Some(cell) => write!(f, "{} -> {} {}", self.word_id, cell, self.orientation),
            None => write!(f, "{} -> off-grid", self.word_id),
        }
    }
}

/// Why a drop was turned down. Feedback only; nothing changes on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// Released outside every cell.
    #[display("dropped outside the grid")]
    OutsideGrid,
    /// Target lies beyond the grid edges.
    #[display("cell {} is outside the grid", _0)]
    OutOfBounds(Coord),
    /// Target is a blocked cell.
    #[display("cell {} is blocked", _0)]
    BlockedCell(Coord),
    /// Right start cell, wrong orientation.
    #[display("wrong orientation")]
    WrongOrientation,
    /// Not the word's start cell.
    #[display("wrong cell")]
    WrongCell,
}

/// Result of a placement attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// The drop matched the authored start and orientation.
    Placed {
        /// The placed word.
        word_id: WordId,
        /// Cells revealed by this call; empty if crossings had covered them all.
        newly_revealed: Vec<Coord>,
        /// Other words completed by the reveal.
        auto_solved: Vec<WordId>,
    },
    /// The word was placed earlier; nothing changed.
    AlreadyPlaced(WordId),
    /// The drop did not match; nothing changed.
    Rejected {
        /// The dragged word.
        word_id: WordId,
        /// Feedback for the player.
        reason: RejectReason,
    },
}

impl PlacementOutcome {
    /// Returns true if the drop placed the word.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed { .. })
    }

    /// Words auto-solved as a side effect, if any.
    pub fn auto_solved(&self) -> &[WordId] {
        match self {
            PlacementOutcome::Placed { auto_solved, .. } => auto_solved,
            _ => &[],
        }
    }
}

/// Result of revealing cells outside a drop (hints).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOutcome {
    /// Cells that were hidden before the call.
    pub newly_revealed: Vec<Coord>,
    /// Words completed by the reveal.
    pub auto_solved: Vec<WordId>,
}
