//! Revealed cells belong to words.

use super::Invariant;
use crate::engine::PlacementEngine;

/// Invariant: only word cells are ever revealed; blocked cells never are.
pub struct RevealedCellsInWordsInvariant;

impl Invariant<PlacementEngine> for RevealedCellsInWordsInvariant {
    fn holds(engine: &PlacementEngine) -> bool {
        let puzzle = engine.puzzle();
        engine
            .state()
            .revealed()
            .iter()
            .all(|cell| !puzzle.is_blocked(*cell) && puzzle.letter_at(*cell).is_some())
    }

    fn description() -> &'static str {
        "Revealed cells are word cells, never blocked"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::engine::tests::orchard_engine;

    #[test]
    fn test_hint_on_block_keeps_invariant() {
        let mut engine = orchard_engine();
        engine.reveal_cells([Coord::new(0, 0), Coord::new(1, 1)]);
        assert!(RevealedCellsInWordsInvariant::holds(&engine));
    }

    #[test]
    fn test_revealed_block_violates() {
        let mut engine = orchard_engine();
        engine.state_mut().revealed_mut().insert(Coord::new(9, 9));
        assert!(!RevealedCellsInWordsInvariant::holds(&engine));
    }
}
