//! Read-only projection handed to the rendering collaborator.

use crate::coord::{Coord, WordId};
use crate::pool::WordTile;
use serde::{Deserialize, Serialize};

/// A revealed cell and its letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCell {
    /// Position.
    pub cell: Coord,
    /// Solution letter.
    pub letter: char,
}

/// How a single cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Not playable.
    Blocked,
    /// Playable, letter still hidden. `start` marks a word start hint.
    Hidden {
        /// The cell begins some word.
        start: bool,
    },
    /// Letter visible.
    Revealed(char),
}

/// Snapshot of everything the renderer needs after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Grid height.
    pub rows: usize,
    /// Grid width.
    pub cols: usize,
    /// Puzzle title, if authored.
    pub title: Option<String>,
    /// Blocked cells, row-major.
    pub blocked: Vec<Coord>,
    /// Revealed cells with letters, row-major.
    pub revealed: Vec<RevealedCell>,
    /// Word start cells; empty when hints are off.
    pub start_cells: Vec<Coord>,
    /// Unplaced tiles in pool order.
    pub tiles: Vec<WordTile>,
    /// Words auto-solved since the last render.
    pub auto_solved: Vec<WordId>,
    /// Number of placed words.
    pub placed: usize,
    /// Number of words in the puzzle.
    pub total: usize,
    /// All words placed.
    pub solved: bool,
}

impl BoardView {
    /// Classifies a cell for drawing.
    pub fn cell(&self, cell: Coord) -> CellView {
        if let Ok(index) = self.revealed.binary_search_by(|r| r.cell.cmp(&cell)) {
            return CellView::Revealed(self.revealed[index].letter);
        }
        if self.blocked.binary_search(&cell).is_ok() || !cell.in_bounds(self.rows, self.cols) {
            return CellView::Blocked;
        }
        CellView::Hidden {
            start: self.start_cells.binary_search(&cell).is_ok(),
        }
    }

    /// Iterates grid rows, each as a row of [`CellView`]s.
    pub fn grid(&self) -> impl Iterator<Item = Vec<CellView>> + '_ {
        (0..self.rows).map(move |row| {
            (0..self.cols)
                .map(|col| self.cell(Coord::new(row, col)))
                .collect()
        })
    }
}
