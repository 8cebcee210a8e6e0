//! Crossdrop puzzle core - crossword model and drag-and-drop placement
//!
//! This library turns an authored crossword into a board the player solves
//! by dragging word tiles onto their start cells.
//!
//! # Architecture
//!
//! - **Parser**: ipuz documents (or a flat word list) into a validated [`Puzzle`]
//! - **Indexes**: start-cell and word-cell lookups built once per puzzle
//! - **Engine**: drop validation, reveal and the auto-solve sweep
//! - **Pool**: unplaced tiles and their player-chosen orientation
//! - **Session**: the event interface a renderer talks to
//!
//! # Example
//!
//! ```
//! use crossdrop_puzzle::{BoardEvent, BoardSession, Coord, Orientation, SessionOptions, WordId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r##"{
//!     "version": "http://ipuz.org/v2",
//!     "kind": ["http://ipuz.org/crossword#1"],
//!     "dimensions": { "width": 2, "height": 2 },
//!     "puzzle": [[1, 2], [3, "#"]],
//!     "solution": [["A", "T"], ["N", "#"]]
//! }"##;
//! let mut session = BoardSession::from_ipuz_str(json, SessionOptions::default())?;
//! session.handle(BoardEvent::DragEnded {
//!     word_id: WordId::from("1-A"),
//!     target: Some(Coord::new(0, 0)),
//!     orientation: Orientation::Horizontal,
//! })?;
//! assert_eq!(session.view().revealed.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod coord;
mod engine;
mod error;
mod index;
mod ipuz;
mod pool;
mod puzzle;
mod session;
mod state;
mod view;

// Public modules - formal verification surface
pub mod contracts;
pub mod invariants;

// Crate-level exports - Value types
pub use coord::{Coord, Orientation, StartKey, WordId};

// Crate-level exports - Errors
pub use error::{EngineError, PuzzleError};

// Crate-level exports - Puzzle model
pub use index::PuzzleIndexes;
pub use ipuz::{CellMarker, ClueEntry, ClueNumber, Dimensions, IpuzDocument, SolutionEntry};
pub use puzzle::{Puzzle, PuzzleWord, WordEntry};

// Crate-level exports - Placement
pub use action::{PlacementOutcome, RejectReason, RevealOutcome, TileDrop};
pub use engine::PlacementEngine;
pub use state::PlacementState;

// Crate-level exports - Pool, session and view
pub use pool::{PoolOrder, TileOrientationPolicy, TilePool, WordTile};
pub use session::{BoardEvent, BoardSession, BoardUpdate, SessionOptions};
pub use view::{BoardView, CellView, RevealedCell};
