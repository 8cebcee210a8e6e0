//! The ipuz document schema and its conversion into a [`Puzzle`].
//!
//! Only the crossword subset is read: dimensions, the puzzle grid of
//! block / clue-number / light markers, the solution grid and the clues.

use crate::coord::{Coord, Orientation, WordId};
use crate::error::PuzzleError;
use crate::puzzle::{Puzzle, PuzzleWord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Default block marker.
pub const DEFAULT_BLOCK: &str = "#";

/// Alternative unnumbered-light marker seen in hand-authored files.
pub const COLON_EMPTY: &str = ":";

/// Grid size as declared by the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

/// One entry of the `puzzle` grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellMarker {
    /// A clue number (`0` means an unnumbered light).
    Number(u64),
    /// The block string, the empty string, or a numeric string.
    Text(String),
    /// A styled cell wrapping another marker.
    Styled {
        /// The wrapped marker.
        cell: Option<Box<CellMarker>>,
        /// Presentation details, ignored.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<serde_json::Value>,
    },
}

/// One entry of the `solution` grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolutionEntry {
    /// A letter or the block string.
    Text(String),
    /// A numeric placeholder; carries no letter.
    Number(u64),
    /// An object carrying the letter in `value`.
    Valued {
        /// The letter.
        value: Option<String>,
    },
}

/// One clue: `[number, "text"]` or `{ "number": n, "clue": "text" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClueEntry {
    /// Two-element array form.
    Pair(ClueNumber, String),
    /// Object form.
    Object {
        /// The clue number.
        number: ClueNumber,
        /// The clue text.
        clue: String,
    },
}

/// A clue number, given as an integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClueNumber {
    /// Integer form.
    Number(u64),
    /// String form.
    Text(String),
}

impl ClueNumber {
    fn value(&self) -> Option<u32> {
        match self {
            ClueNumber::Number(n) => u32::try_from(*n).ok(),
            ClueNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl ClueEntry {
    fn parts(&self) -> (Option<u32>, &str) {
        match self {
            ClueEntry::Pair(number, text) => (number.value(), text),
            ClueEntry::Object { number, clue } => (number.value(), clue),
        }
    }
}

/// The subset of an ipuz document read by the parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpuzDocument {
    /// Declared grid size.
    pub dimensions: Dimensions,
    /// Block / clue-number / light markers, `height` rows of `width`.
    pub puzzle: Vec<Vec<Option<CellMarker>>>,
    /// Solution letters, same shape as `puzzle`.
    pub solution: Vec<Vec<Option<SolutionEntry>>>,
    /// Block marker, `"#"` unless overridden.
    #[serde(default = "default_block")]
    pub block: String,
    /// Unnumbered-light marker, `0` unless overridden.
    #[serde(default = "default_empty")]
    pub empty: CellMarker,
    /// Clue lists keyed by direction name.
    #[serde(default)]
    pub clues: HashMap<String, Vec<ClueEntry>>,
    /// Puzzle title.
    #[serde(default)]
    pub title: Option<String>,
    /// Puzzle author.
    #[serde(default)]
    pub author: Option<String>,
}

fn default_block() -> String {
    DEFAULT_BLOCK.to_string()
}

fn default_empty() -> CellMarker {
    CellMarker::Number(0)
}

/// What a puzzle-grid entry means once markers are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Block,
    Light(Option<u32>),
}

impl IpuzDocument {
    /// Converts the document into a validated [`Puzzle`].
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] for bad dimensions, mismatched grid shapes,
    /// missing or invalid letters and any model invariant violation.
    #[instrument(
        skip(self),
        fields(width = self.dimensions.width, height = self.dimensions.height)
    )]
    pub fn into_puzzle(self) -> Result<Puzzle, PuzzleError> {
        let Dimensions { width, height } = self.dimensions;
        if width == 0 || height == 0 {
            return Err(PuzzleError::InvalidDimensions { width, height });
        }
        check_shape("puzzle", &self.puzzle, width, height)?;
        check_shape("solution", &self.solution, width, height)?;

        let kinds: Vec<Vec<CellKind>> = self
            .puzzle
            .iter()
            .map(|row| row.iter().map(|marker| self.classify(marker.as_ref())).collect())
            .collect();
        let is_light = |cell: Coord| matches!(kinds[cell.row][cell.col], CellKind::Light(_));

        let clues = self.clue_lookup();
        let mut words = Vec::new();
        for orientation in Orientation::iter() {
            for row in 0..height {
                for col in 0..width {
                    let start = Coord::new(row, col);
                    if !is_light(start) || !starts_run(start, orientation, &is_light) {
                        continue;
                    }
                    let cells = collect_run(start, orientation, height, width, &is_light);
                    if cells.len() < 2 {
                        continue;
                    }
                    let clue_number = match kinds[row][col] {
                        CellKind::Light(number) => number,
                        CellKind::Block => None,
                    };
                    let id = match clue_number {
                        Some(number) => WordId::numbered(number, orientation),
                        None => WordId::positional(start, orientation),
                    };
                    let clue = clue_number
                        .and_then(|number| clues.get(&(orientation, number)))
                        .cloned();
                    words.push(PuzzleWord {
                        id,
                        orientation,
                        cells,
                        text: String::new(),
                        clue_number,
                        clue,
                    });
                }
            }
        }

        let mut solution_letters = BTreeMap::new();
        for word in &mut words {
            let mut text = String::with_capacity(word.cells.len());
            for cell in &word.cells {
                let letter = self.letter(*cell)?;
                solution_letters.insert(*cell, letter);
                text.push(letter);
            }
            word.text = text;
        }

        let covered: BTreeSet<Coord> = words
            .iter()
            .flat_map(|word| word.cells.iter().copied())
            .collect();
        let blocked: BTreeSet<Coord> = (0..height)
            .flat_map(|row| (0..width).map(move |col| Coord::new(row, col)))
            .filter(|cell| !covered.contains(cell))
            .collect();

        debug!(words = words.len(), clues = clues.len(), "Scanned ipuz grid");
        Puzzle::assemble(
            height,
            width,
            self.title,
            self.author,
            words,
            solution_letters,
            blocked,
        )
    }

    fn classify(&self, marker: Option<&CellMarker>) -> CellKind {
        let Some(marker) = marker else {
            return CellKind::Block;
        };
        if *marker == self.empty {
            return CellKind::Light(None);
        }
        match marker {
            CellMarker::Number(0) => CellKind::Light(None),
            CellMarker::Number(n) => CellKind::Light(u32::try_from(*n).ok()),
            CellMarker::Text(text) if *text == self.block => CellKind::Block,
            CellMarker::Text(text) if text == COLON_EMPTY => CellKind::Light(None),
            CellMarker::Text(text) => {
                CellKind::Light(text.trim().parse::<u32>().ok().filter(|n| *n > 0))
            }
            CellMarker::Styled { cell, .. } => self.classify(cell.as_deref()),
        }
    }

    fn letter(&self, cell: Coord) -> Result<char, PuzzleError> {
        let raw = match &self.solution[cell.row][cell.col] {
            Some(SolutionEntry::Text(text)) if *text != self.block => text.as_str(),
            Some(SolutionEntry::Valued { value: Some(text) }) if *text != self.block => {
                text.as_str()
            }
            _ => return Err(PuzzleError::MissingLetter(cell)),
        };
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_alphabetic() => {
                let mut upper = letter.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(upper), None) => Ok(upper),
                    _ => Err(PuzzleError::InvalidLetter {
                        cell,
                        value: raw.to_string(),
                    }),
                }
            }
            (None, _) => Err(PuzzleError::MissingLetter(cell)),
            _ => Err(PuzzleError::InvalidLetter {
                cell,
                value: raw.to_string(),
            }),
        }
    }

    fn clue_lookup(&self) -> HashMap<(Orientation, u32), String> {
        let mut lookup = HashMap::new();
        for (direction, entries) in &self.clues {
            let orientation = if direction.starts_with("Across") {
                Orientation::Horizontal
            } else if direction.starts_with("Down") {
                Orientation::Vertical
            } else {
                warn!(direction = %direction, "Ignoring clues for unsupported direction");
                continue;
            };
            for entry in entries {
                if let (Some(number), text) = entry.parts() {
                    lookup.insert((orientation, number), text.to_string());
                }
            }
        }
        lookup
    }
}

fn check_shape<T>(
    grid: &'static str,
    rows: &[Vec<T>],
    width: usize,
    height: usize,
) -> Result<(), PuzzleError> {
    if rows.len() != height {
        return Err(PuzzleError::ShapeMismatch {
            grid,
            row: rows.len(),
            actual: rows.len(),
            expected: height,
        });
    }
    for (row, entries) in rows.iter().enumerate() {
        if entries.len() != width {
            return Err(PuzzleError::ShapeMismatch {
                grid,
                row,
                actual: entries.len(),
                expected: width,
            });
        }
    }
    Ok(())
}

/// A run starts where the previous cell is blocked or off-grid.
fn starts_run(start: Coord, orientation: Orientation, is_light: &impl Fn(Coord) -> bool) -> bool {
    match orientation {
        Orientation::Horizontal => {
            start.col == 0 || !is_light(Coord::new(start.row, start.col - 1))
        }
        Orientation::Vertical => {
            start.row == 0 || !is_light(Coord::new(start.row - 1, start.col))
        }
    }
}

fn collect_run(
    start: Coord,
    orientation: Orientation,
    height: usize,
    width: usize,
    is_light: &impl Fn(Coord) -> bool,
) -> Vec<Coord> {
    (0..)
        .map(|offset| start.step(orientation, offset))
        .take_while(|cell| cell.in_bounds(height, width) && is_light(*cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = r##"{
        "dimensions": { "width": 3, "height": 3 },
        "puzzle": [[1, 2, "#"], [3, 0, "#"], ["#", "#", "#"]],
        "solution": [["A", "T", "#"], [{ "value": "n" }, "O", "#"], ["#", "#", "#"]],
        "clues": {
            "Across": [[1, "Indefinite article"]],
            "Down": [{ "number": 2, "clue": "Preposition" }]
        }
    }"##;

    #[test]
    fn test_scan_finds_across_then_down() {
        let puzzle = Puzzle::from_ipuz_str(TINY).unwrap();
        let ids: Vec<&str> = puzzle.words().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["1-A", "3-A", "1-D", "2-D"]);
        let texts: Vec<&str> = puzzle.words().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["AT", "NO", "AN", "TO"]);
    }

    #[test]
    fn test_clues_attach_by_number_and_direction() {
        let puzzle = Puzzle::from_ipuz_str(TINY).unwrap();
        assert_eq!(puzzle.word("1-A").unwrap().clue.as_deref(), Some("Indefinite article"));
        assert_eq!(puzzle.word("2-D").unwrap().clue.as_deref(), Some("Preposition"));
        assert_eq!(puzzle.word("1-D").unwrap().clue, None);
    }

    #[test]
    fn test_object_solution_entries_are_uppercased() {
        let puzzle = Puzzle::from_ipuz_str(TINY).unwrap();
        assert_eq!(puzzle.letter_at(Coord::new(1, 0)), Some('N'));
    }

    #[test]
    fn test_colon_empty_marker_and_positional_ids() {
        let json = r##"{
            "dimensions": { "width": 2, "height": 1 },
            "empty": ":",
            "puzzle": [[":", ":"]],
            "solution": [["G", "O"]]
        }"##;
        let puzzle = Puzzle::from_ipuz_str(json).unwrap();
        assert_eq!(puzzle.words().len(), 1);
        assert_eq!(puzzle.words()[0].id.as_str(), "0,0-A");
    }

    #[test]
    fn test_null_cells_are_not_playable() {
        let json = r##"{
            "dimensions": { "width": 3, "height": 1 },
            "puzzle": [[1, 0, null]],
            "solution": [["H", "I", null]]
        }"##;
        let puzzle = Puzzle::from_ipuz_str(json).unwrap();
        assert_eq!(puzzle.words()[0].cells.len(), 2);
        assert!(puzzle.is_blocked(Coord::new(0, 2)));
    }

    #[test]
    fn test_styled_cell_unwraps_marker() {
        let json = r##"{
            "dimensions": { "width": 2, "height": 1 },
            "puzzle": [[{ "cell": 5, "style": { "shapebg": "circle" } }, 0]],
            "solution": [["O", "X"]]
        }"##;
        let puzzle = Puzzle::from_ipuz_str(json).unwrap();
        assert_eq!(puzzle.words()[0].id.as_str(), "5-A");
    }
}
