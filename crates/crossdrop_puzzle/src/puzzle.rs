//! The normalized, immutable puzzle model.

use crate::coord::{Coord, Orientation, StartKey, WordId};
use crate::error::PuzzleError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, instrument, warn};

/// An authored answer occupying a contiguous run of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleWord {
    /// Stable identity, e.g. `"1-A"`.
    pub id: WordId,
    /// The single correct orientation.
    pub orientation: Orientation,
    /// Cells from start to end; `cells[0]` is the start.
    pub cells: Vec<Coord>,
    /// Solution text, one letter per cell.
    pub text: String,
    /// Clue number printed at the start cell, if any.
    pub clue_number: Option<u32>,
    /// Clue text, if the document supplies one.
    pub clue: Option<String>,
}

impl PuzzleWord {
    /// First cell of the word.
    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    /// The (start, orientation) identity used to validate drops.
    pub fn start_key(&self) -> StartKey {
        StartKey::new(self.start(), self.orientation)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a validated word; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates `(cell, letter)` pairs in order.
    pub fn letters(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.cells.iter().copied().zip(self.text.chars())
    }
}

/// A word in the flat word-list format: identity, start, orientation, text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Word identity.
    pub id: WordId,
    /// First cell.
    pub start: Coord,
    /// Correct orientation.
    pub orientation: Orientation,
    /// Solution text.
    pub text: String,
}

impl WordEntry {
    /// Creates an entry.
    pub fn new(
        id: impl Into<WordId>,
        start: Coord,
        orientation: Orientation,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start,
            orientation,
            text: text.into(),
        }
    }
}

/// A validated puzzle. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) title: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) words: Vec<PuzzleWord>,
    #[serde(skip)]
    pub(crate) solution_letters: BTreeMap<Coord, char>,
    pub(crate) blocked: BTreeSet<Coord>,
    pub(crate) start_cells: BTreeSet<Coord>,
}

impl Puzzle {
    /// Parses an ipuz JSON document.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the document is malformed or violates
    /// any puzzle invariant.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_ipuz_str(json: &str) -> Result<Self, PuzzleError> {
        let document: crate::ipuz::IpuzDocument = serde_json::from_str(json)?;
        document.into_puzzle()
    }

    /// Builds a puzzle from a flat word list.
    ///
    /// Cells not covered by any word are blocked. Crossing words must agree
    /// on every shared letter.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] for invalid dimensions, out-of-bounds or
    /// short words, duplicate ids or starts, and letter conflicts.
    #[instrument(skip(entries), fields(entries = entries.len()))]
    pub fn from_entries(
        rows: usize,
        cols: usize,
        entries: Vec<WordEntry>,
    ) -> Result<Self, PuzzleError> {
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let mut words = Vec::with_capacity(entries.len());
        let mut solution_letters = BTreeMap::new();

        for entry in entries {
            let text = entry.text.to_uppercase();
            let mut cells = Vec::with_capacity(text.chars().count());
            for (offset, letter) in text.chars().enumerate() {
                let cell = entry.start.step(entry.orientation, offset);
                if !cell.in_bounds(rows, cols) {
                    return Err(PuzzleError::OutOfBounds { id: entry.id, cell });
                }
                if !letter.is_alphabetic() {
                    return Err(PuzzleError::InvalidLetter {
                        cell,
                        value: letter.to_string(),
                    });
                }
                record_letter(&mut solution_letters, cell, letter)?;
                cells.push(cell);
            }
            words.push(PuzzleWord {
                id: entry.id,
                orientation: entry.orientation,
                cells,
                text,
                clue_number: None,
                clue: None,
            });
        }

        let covered: BTreeSet<Coord> = words
            .iter()
            .flat_map(|word| word.cells.iter().copied())
            .collect();
        let blocked = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Coord::new(row, col)))
            .filter(|cell| !covered.contains(cell))
            .collect();

        Self::assemble(rows, cols, None, None, words, solution_letters, blocked)
    }

    /// Final assembly shared by every constructor: derives start cells and
    /// runs the full validation pass.
    pub(crate) fn assemble(
        rows: usize,
        cols: usize,
        title: Option<String>,
        author: Option<String>,
        words: Vec<PuzzleWord>,
        solution_letters: BTreeMap<Coord, char>,
        blocked: BTreeSet<Coord>,
    ) -> Result<Self, PuzzleError> {
        let start_cells = words.iter().filter_map(|w| w.cells.first().copied()).collect();
        let puzzle = Self {
            rows,
            cols,
            title,
            author,
            words,
            solution_letters,
            blocked,
            start_cells,
        };
        puzzle.validate()?;
        debug!(
            rows,
            cols,
            words = puzzle.words.len(),
            blocked = puzzle.blocked.len(),
            "Puzzle assembled"
        );
        Ok(puzzle)
    }

    /// Checks every structural invariant of the model.
    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), PuzzleError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PuzzleError::InvalidDimensions {
                width: self.cols,
                height: self.rows,
            });
        }

        let mut ids = HashSet::with_capacity(self.words.len());
        let mut starts: HashMap<StartKey, &WordId> = HashMap::with_capacity(self.words.len());

        for word in &self.words {
            if word.cells.len() < 2 {
                return Err(PuzzleError::WordTooShort {
                    id: word.id.clone(),
                    len: word.cells.len(),
                });
            }
            let letters = word.text.chars().count();
            if letters != word.cells.len() {
                return Err(PuzzleError::LengthMismatch {
                    id: word.id.clone(),
                    letters,
                    cells: word.cells.len(),
                });
            }
            let start = word.start();
            for (offset, cell) in word.cells.iter().enumerate() {
                if !cell.in_bounds(self.rows, self.cols) {
                    return Err(PuzzleError::OutOfBounds {
                        id: word.id.clone(),
                        cell: *cell,
                    });
                }
                if *cell != start.step(word.orientation, offset) {
                    return Err(PuzzleError::NotContiguous(word.id.clone()));
                }
            }
            for (cell, letter) in word.letters() {
                match self.solution_letters.get(&cell) {
                    None => return Err(PuzzleError::MissingLetter(cell)),
                    Some(&recorded) if recorded != letter => {
                        warn!(%cell, word_id = %word.id, "Crossing letters disagree");
                        return Err(PuzzleError::LetterConflict {
                            cell,
                            first: recorded,
                            second: letter,
                        });
                    }
                    Some(_) => {}
                }
            }
            if !ids.insert(&word.id) {
                return Err(PuzzleError::DuplicateWordId(word.id.clone()));
            }
            let key = word.start_key();
            if let Some(first) = starts.insert(key, &word.id) {
                return Err(PuzzleError::DuplicateStart {
                    key,
                    first: first.clone(),
                    second: word.id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Title from the document metadata.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Author from the document metadata.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// All words in authored order (horizontal scan, then vertical scan).
    pub fn words(&self) -> &[PuzzleWord] {
        &self.words
    }

    /// Looks up a word by identity.
    pub fn word(&self, id: &str) -> Option<&PuzzleWord> {
        self.words.iter().find(|w| w.id.as_str() == id)
    }

    /// Solution letter at a cell, if the cell belongs to a word.
    pub fn letter_at(&self, cell: Coord) -> Option<char> {
        self.solution_letters.get(&cell).copied()
    }

    /// Full cell-to-letter solution map.
    pub fn solution_letters(&self) -> &BTreeMap<Coord, char> {
        &self.solution_letters
    }

    /// Cells that are never drop or reveal targets.
    pub fn blocked(&self) -> &BTreeSet<Coord> {
        &self.blocked
    }

    /// Returns true if the cell is blocked.
    pub fn is_blocked(&self, cell: Coord) -> bool {
        self.blocked.contains(&cell)
    }

    /// Start cells of all words, for visual hints.
    pub fn start_cells(&self) -> &BTreeSet<Coord> {
        &self.start_cells
    }

    /// Returns true if the cell lies in the grid.
    pub fn contains(&self, cell: Coord) -> bool {
        cell.in_bounds(self.rows, self.cols)
    }
}

/// Records a solution letter, failing if a crossing already holds another.
pub(crate) fn record_letter(
    letters: &mut BTreeMap<Coord, char>,
    cell: Coord,
    letter: char,
) -> Result<(), PuzzleError> {
    match letters.insert(cell, letter) {
        Some(previous) if previous != letter => Err(PuzzleError::LetterConflict {
            cell,
            first: previous,
            second: letter,
        }),
        _ => Ok(()),
    }
}
