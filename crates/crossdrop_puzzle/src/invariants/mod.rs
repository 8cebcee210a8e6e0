//! First-class invariants of a placement session.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and document what the engine guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod placed_revealed;
pub mod revealed_cells;
pub mod sweep_saturated;

pub use placed_revealed::PlacedWordsRevealedInvariant;
pub use revealed_cells::RevealedCellsInWordsInvariant;
pub use sweep_saturated::SweepSaturatedInvariant;

/// All placement invariants as a composable set.
pub type PlacementInvariants = (
    PlacedWordsRevealedInvariant,
    RevealedCellsInWordsInvariant,
    SweepSaturatedInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::{Coord, Orientation, WordId};
    use crate::engine::tests::orchard_engine;

    #[test]
    fn test_invariant_set_holds_for_fresh_session() {
        let engine = orchard_engine();
        assert!(PlacementInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_placements() {
        let mut engine = orchard_engine();
        engine
            .attempt_placement("5-D", Some(Coord::new(5, 2)), Orientation::Vertical)
            .unwrap();
        engine
            .attempt_placement("1-A", Some(Coord::new(1, 1)), Orientation::Horizontal)
            .unwrap();
        assert!(PlacementInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = orchard_engine();
        // A placed word with nothing revealed, and a revealed block.
        engine.state_mut().placed_mut().insert(WordId::from("1-A"));
        engine.state_mut().revealed_mut().insert(Coord::new(0, 0));

        let violations = PlacementInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
