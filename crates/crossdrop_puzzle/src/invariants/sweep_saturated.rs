//! Auto-solve sweep reached its fixed point.

use super::Invariant;
use crate::engine::PlacementEngine;

/// Invariant: any word whose cells are all revealed is placed.
///
/// Holds after every engine call because the sweep runs a full pass before
/// control returns.
pub struct SweepSaturatedInvariant;

impl Invariant<PlacementEngine> for SweepSaturatedInvariant {
    fn holds(engine: &PlacementEngine) -> bool {
        let state = engine.state();
        engine.puzzle().words().iter().all(|word| {
            state.is_placed(word.id.as_str())
                || !word.cells.iter().all(|cell| state.is_revealed(*cell))
        })
    }

    fn description() -> &'static str {
        "Every fully revealed word is placed"
    }
}
