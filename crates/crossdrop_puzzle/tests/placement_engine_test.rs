//! Tests for drop validation, reveal and the auto-solve sweep.

use crossdrop_puzzle::invariants::{InvariantSet, PlacementInvariants};
use crossdrop_puzzle::{
    Coord, EngineError, Orientation, PlacementEngine, PlacementOutcome, Puzzle, RejectReason,
    WordEntry, WordId,
};
use strum::IntoEnumIterator;

const ORCHARD: &str = include_str!("../../../puzzles/orchard.ipuz");

fn orchard() -> PlacementEngine {
    PlacementEngine::new(Puzzle::from_ipuz_str(ORCHARD).unwrap()).unwrap()
}

/// APPLE across with PEAR down from its second P.
fn apple_pear() -> PlacementEngine {
    let puzzle = Puzzle::from_entries(
        10,
        10,
        vec![
            WordEntry::new("APPLE", Coord::new(1, 1), Orientation::Horizontal, "APPLE"),
            WordEntry::new("PEAR", Coord::new(1, 3), Orientation::Vertical, "PEAR"),
        ],
    )
    .unwrap();
    PlacementEngine::new(puzzle).unwrap()
}

fn letters(engine: &PlacementEngine, cells: &[Coord]) -> String {
    cells
        .iter()
        .map(|cell| {
            assert!(engine.state().is_revealed(*cell), "{cell} hidden");
            engine.puzzle().letter_at(*cell).unwrap()
        })
        .collect()
}

#[test]
fn test_scenario_a_correct_drop_reveals_apple() {
    let mut engine = apple_pear();
    let outcome = engine
        .attempt_placement("APPLE", Some(Coord::new(1, 1)), Orientation::Horizontal)
        .unwrap();

    let row: Vec<Coord> = (1..=5).map(|col| Coord::new(1, col)).collect();
    assert_eq!(
        outcome,
        PlacementOutcome::Placed {
            word_id: WordId::from("APPLE"),
            newly_revealed: row.clone(),
            auto_solved: vec![],
        }
    );
    assert_eq!(letters(&engine, &row), "APPLE");
    assert!(engine.state().is_placed("APPLE"));
}

#[test]
fn test_scenario_b_crossing_word_reveals_remaining_cells() {
    let mut engine = apple_pear();
    engine
        .attempt_placement("APPLE", Some(Coord::new(1, 1)), Orientation::Horizontal)
        .unwrap();
    assert_eq!(engine.puzzle().letter_at(Coord::new(1, 3)), Some('P'));

    let outcome = engine
        .attempt_placement("PEAR", Some(Coord::new(1, 3)), Orientation::Vertical)
        .unwrap();
    let PlacementOutcome::Placed { newly_revealed, .. } = outcome else {
        panic!("PEAR should be placed");
    };
    assert_eq!(
        newly_revealed,
        vec![Coord::new(2, 3), Coord::new(3, 3), Coord::new(4, 3)]
    );
    let column: Vec<Coord> = (1..=4).map(|row| Coord::new(row, 3)).collect();
    assert_eq!(letters(&engine, &column), "PEAR");
    assert!(engine.is_solved());
}

#[test]
fn test_scenario_c_car_auto_solved_by_crossings() {
    let mut engine = orchard();
    engine
        .attempt_placement("5-D", Some(Coord::new(5, 2)), Orientation::Vertical)
        .unwrap();
    engine
        .attempt_placement("6-D", Some(Coord::new(5, 4)), Orientation::Vertical)
        .unwrap();
    assert!(!engine.state().is_placed("7-A"));

    let outcome = engine
        .attempt_placement("8-D", Some(Coord::new(7, 3)), Orientation::Vertical)
        .unwrap();
    assert_eq!(outcome.auto_solved(), [WordId::from("7-A")]);
    assert!(engine.state().is_placed("7-A"));
    assert!(engine.state().auto_solved().contains("7-A"));

    // A later drop of the auto-solved word is a no-op.
    let again = engine
        .attempt_placement("7-A", Some(Coord::new(7, 2)), Orientation::Horizontal)
        .unwrap();
    assert_eq!(again, PlacementOutcome::AlreadyPlaced(WordId::from("7-A")));
}

/// Fully light 2x2 grid: AT over NO, so AN and TO run down.
const SQUARE: &str = r##"{
    "dimensions": { "width": 2, "height": 2 },
    "puzzle": [[1, 2], [3, 0]],
    "solution": [["A", "T"], ["N", "O"]]
}"##;

#[test]
fn test_one_drop_auto_solves_every_completed_crossing() {
    let mut engine = PlacementEngine::new(Puzzle::from_ipuz_str(SQUARE).unwrap()).unwrap();

    let first = engine
        .attempt_placement("1-A", Some(Coord::new(0, 0)), Orientation::Horizontal)
        .unwrap();
    assert!(first.auto_solved().is_empty());

    let second = engine
        .attempt_placement("3-A", Some(Coord::new(1, 0)), Orientation::Horizontal)
        .unwrap();
    assert_eq!(second.auto_solved(), [WordId::from("1-D"), WordId::from("2-D")]);
    assert!(engine.is_solved());
    assert_eq!(engine.state().auto_solved().len(), 2);
    assert!(PlacementInvariants::check_all(&engine).is_ok());
}

#[test]
fn test_scenario_d_wrong_orientation_rejects() {
    let mut engine = apple_pear();
    let before = engine.state().clone();
    let outcome = engine
        .attempt_placement("APPLE", Some(Coord::new(1, 1)), Orientation::Vertical)
        .unwrap();
    assert_eq!(
        outcome,
        PlacementOutcome::Rejected {
            word_id: WordId::from("APPLE"),
            reason: RejectReason::WrongOrientation,
        }
    );
    assert_eq!(engine.state(), &before);
    assert!(!engine.state().is_placed("APPLE"));
}

#[test]
fn test_only_exact_start_and_orientation_accepts() {
    let engine = orchard();
    for word in engine.puzzle().words() {
        for row in 0..engine.puzzle().rows() {
            for col in 0..engine.puzzle().cols() {
                for orientation in Orientation::iter() {
                    let mut trial = engine.clone();
                    let target = Coord::new(row, col);
                    let outcome = trial
                        .attempt_placement(word.id.clone(), Some(target), orientation)
                        .unwrap();
                    let expected = target == word.start() && orientation == word.orientation;
                    assert_eq!(outcome.is_placed(), expected, "{} at {target}", word.id);
                }
            }
        }
    }
}

#[test]
fn test_placement_is_idempotent() {
    let mut engine = orchard();
    engine
        .attempt_placement("3-A", Some(Coord::new(3, 5)), Orientation::Horizontal)
        .unwrap();
    let snapshot = engine.state().clone();
    engine
        .attempt_placement("3-A", Some(Coord::new(3, 5)), Orientation::Horizontal)
        .unwrap();
    assert_eq!(engine.state(), &snapshot);
}

#[test]
fn test_fully_revealed_words_are_placed() {
    let mut engine = orchard();
    let cells: Vec<Coord> = engine.indexes().cells_of("4-D").unwrap().to_vec();
    let outcome = engine.reveal_cells(cells);
    assert_eq!(outcome.auto_solved, vec![WordId::from("4-D")]);

    for word in engine.puzzle().words() {
        if word.cells.iter().all(|c| engine.state().is_revealed(*c)) {
            assert!(engine.state().is_placed(word.id.as_str()));
        }
    }
}

#[test]
fn test_solving_everything() {
    let mut engine = orchard();
    let words: Vec<_> = engine.puzzle().words().to_vec();
    for word in &words {
        engine
            .attempt_placement(word.id.clone(), Some(word.start()), word.orientation)
            .unwrap();
        assert!(PlacementInvariants::check_all(&engine).is_ok());
    }
    assert!(engine.is_solved());
    assert_eq!(
        engine.state().revealed().len(),
        engine.puzzle().solution_letters().len()
    );
}

#[test]
fn test_unknown_word_is_rejected_as_error() {
    let mut engine = orchard();
    let err = engine
        .attempt_placement("BANANA", Some(Coord::new(1, 1)), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownWord(WordId::from("BANANA")));
    assert!(err.to_string().contains("BANANA"));
}
