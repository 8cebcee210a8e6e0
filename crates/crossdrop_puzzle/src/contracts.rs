//! Contract-based validation for drops.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.

use crate::action::TileDrop;
use crate::engine::PlacementEngine;
use crate::error::EngineError;
use crate::invariants::{InvariantSet, PlacementInvariants};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Drop Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the dragged word exists in the puzzle.
pub struct WordExists;

impl WordExists {
    /// Checks the precondition.
    #[instrument(skip(engine), fields(word_id = %drop.word_id))]
    pub fn check(drop: &TileDrop, engine: &PlacementEngine) -> Result<(), EngineError> {
        if engine.indexes().cells_of(drop.word_id.as_str()).is_none() {
            warn!("Drop for a word that is not in the puzzle");
            Err(EngineError::UnknownWord(drop.word_id.clone()))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: revealed cells and placed words never shrink.
pub struct MonotonicState;

impl MonotonicState {
    /// Checks the postcondition.
    #[instrument(skip_all)]
    pub fn check(before: &PlacementEngine, after: &PlacementEngine) -> Result<(), EngineError> {
        if after.state().extends(before.state()) {
            Ok(())
        } else {
            Err(EngineError::InvariantViolation(
                "Placement state shrank during a transition".to_string(),
            ))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Drop Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for drop actions.
///
/// Preconditions:
/// - The word exists
///
/// Postconditions:
/// - Revealed and placed sets only grew
/// - Placed words are fully revealed
/// - Only word cells are revealed
/// - The auto-solve sweep is saturated
pub struct DropContract;

impl Contract<PlacementEngine, TileDrop> for DropContract {
    fn pre(engine: &PlacementEngine, action: &TileDrop) -> Result<(), EngineError> {
        WordExists::check(action, engine)
    }

    fn post(before: &PlacementEngine, after: &PlacementEngine) -> Result<(), EngineError> {
        MonotonicState::check(before, after)?;
        PlacementInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
