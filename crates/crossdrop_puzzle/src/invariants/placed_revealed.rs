//! Placed words are fully revealed.

use super::Invariant;
use crate::engine::PlacementEngine;

/// Invariant: every cell of every placed word is revealed.
///
/// Placement always reveals the word's cells, and auto-solve only fires
/// once they are all revealed, so a placed word can never show a hole.
pub struct PlacedWordsRevealedInvariant;

impl Invariant<PlacementEngine> for PlacedWordsRevealedInvariant {
    fn holds(engine: &PlacementEngine) -> bool {
        let state = engine.state();
        state.placed().iter().all(|id| {
            engine
                .indexes()
                .cells_of(id.as_str())
                .is_some_and(|cells| cells.iter().all(|cell| state.is_revealed(*cell)))
        })
    }

    fn description() -> &'static str {
        "Every placed word is fully revealed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::{Coord, Orientation, WordId};
    use crate::engine::tests::orchard_engine;

    #[test]
    fn test_fresh_session_holds() {
        assert!(PlacedWordsRevealedInvariant::holds(&orchard_engine()));
    }

    #[test]
    fn test_holds_after_drop() {
        let mut engine = orchard_engine();
        engine
            .attempt_placement("2-D", Some(Coord::new(1, 3)), Orientation::Vertical)
            .unwrap();
        assert!(PlacedWordsRevealedInvariant::holds(&engine));
    }

    #[test]
    fn test_unknown_placed_word_violates() {
        let mut engine = orchard_engine();
        engine.state_mut().placed_mut().insert(WordId::from("99-A"));
        assert!(!PlacedWordsRevealedInvariant::holds(&engine));
    }
}
