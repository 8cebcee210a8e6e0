//! Tests for loading puzzles from ipuz documents and flat word lists.

use crossdrop_puzzle::{Coord, Orientation, Puzzle, PuzzleError, PuzzleIndexes, WordEntry, WordId};
use std::collections::HashSet;

const ORCHARD: &str = include_str!("../../../puzzles/orchard.ipuz");

#[test]
fn test_orchard_words_and_ids() {
    let puzzle = Puzzle::from_ipuz_str(ORCHARD).unwrap();
    assert_eq!((puzzle.rows(), puzzle.cols()), (10, 10));
    assert_eq!(puzzle.title(), Some("Orchard"));
    assert_eq!(puzzle.author(), Some("crossdrop"));

    let words: Vec<(&str, &str, Orientation)> = puzzle
        .words()
        .iter()
        .map(|w| (w.id.as_str(), w.text.as_str(), w.orientation))
        .collect();
    assert_eq!(
        words,
        vec![
            ("1-A", "APPLE", Orientation::Horizontal),
            ("3-A", "BERRY", Orientation::Horizontal),
            ("7-A", "CAR", Orientation::Horizontal),
            ("2-D", "PEAR", Orientation::Vertical),
            ("4-D", "RYE", Orientation::Vertical),
            ("5-D", "ARC", Orientation::Vertical),
            ("6-D", "OAR", Orientation::Vertical),
            ("8-D", "ANT", Orientation::Vertical),
        ]
    );
}

#[test]
fn test_clues_are_attached() {
    let puzzle = Puzzle::from_ipuz_str(ORCHARD).unwrap();
    let pear = puzzle.word("2-D").unwrap();
    assert_eq!(pear.clue_number, Some(2));
    assert_eq!(pear.clue.as_deref(), Some("Fruit shaped like a bell"));
}

#[test]
fn test_every_word_is_at_least_two_letters() {
    let puzzle = Puzzle::from_ipuz_str(ORCHARD).unwrap();
    for word in puzzle.words() {
        assert!(word.cells.len() >= 2, "{} is too short", word.id);
        assert_eq!(word.cells.len(), word.text.chars().count());
    }
}

#[test]
fn test_start_pairs_are_unique() {
    let puzzle = Puzzle::from_ipuz_str(ORCHARD).unwrap();
    let starts: HashSet<_> = puzzle.words().iter().map(|w| w.start_key()).collect();
    assert_eq!(starts.len(), puzzle.words().len());
    assert_eq!(PuzzleIndexes::build(&puzzle).unwrap().len(), 8);
}

#[test]
fn test_blocked_cells_cover_the_rest() {
    let puzzle = Puzzle::from_ipuz_str(ORCHARD).unwrap();
    assert!(puzzle.is_blocked(Coord::new(0, 0)));
    assert!(!puzzle.is_blocked(Coord::new(1, 1)));
    assert_eq!(
        puzzle.blocked().len() + puzzle.solution_letters().len(),
        100
    );
}

#[test]
fn test_unnumbered_lights_get_positional_ids() {
    let json = r##"{
        "dimensions": { "width": 3, "height": 1 },
        "puzzle": [[0, 0, "#"]],
        "solution": [["o", "x", "#"]]
    }"##;
    let puzzle = Puzzle::from_ipuz_str(json).unwrap();
    assert_eq!(puzzle.words().len(), 1);
    assert_eq!(puzzle.words()[0].id, WordId::from("0,0-A"));
    assert_eq!(puzzle.words()[0].text, "OX");
}

#[test]
fn test_shape_mismatch() {
    let json = r#"{
        "dimensions": { "width": 3, "height": 1 },
        "puzzle": [[1, 0]],
        "solution": [["A", "B", "C"]]
    }"#;
    assert!(matches!(
        Puzzle::from_ipuz_str(json),
        Err(PuzzleError::ShapeMismatch { grid: "puzzle", .. })
    ));
}

#[test]
fn test_missing_letter() {
    let json = r#"{
        "dimensions": { "width": 2, "height": 1 },
        "puzzle": [[1, 0]],
        "solution": [["A", null]]
    }"#;
    assert_eq!(
        Puzzle::from_ipuz_str(json).unwrap_err(),
        PuzzleError::MissingLetter(Coord::new(0, 1))
    );
}

#[test]
fn test_invalid_letter() {
    let json = r#"{
        "dimensions": { "width": 2, "height": 1 },
        "puzzle": [[1, 0]],
        "solution": [["A", "7"]]
    }"#;
    assert!(matches!(
        Puzzle::from_ipuz_str(json),
        Err(PuzzleError::InvalidLetter { .. })
    ));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        Puzzle::from_ipuz_str("{ not json"),
        Err(PuzzleError::Malformed(_))
    ));
}

#[test]
fn test_flat_list_duplicate_id() {
    let result = Puzzle::from_entries(
        5,
        5,
        vec![
            WordEntry::new("x", Coord::new(0, 0), Orientation::Horizontal, "AB"),
            WordEntry::new("x", Coord::new(2, 0), Orientation::Horizontal, "CD"),
        ],
    );
    assert_eq!(result.unwrap_err(), PuzzleError::DuplicateWordId(WordId::from("x")));
}

#[test]
fn test_flat_list_crossing_conflict() {
    let result = Puzzle::from_entries(
        10,
        10,
        vec![
            WordEntry::new("APPLE", Coord::new(1, 1), Orientation::Horizontal, "APPLE"),
            WordEntry::new("PEAR", Coord::new(1, 1), Orientation::Vertical, "PEAR"),
        ],
    );
    assert!(matches!(
        result,
        Err(PuzzleError::LetterConflict { first: 'A', second: 'P', .. })
    ));
}
