//! Runtime-checkable structural invariants for boards.
//!
//! Tests use these to assert that move application preserves gravity packing
//! and the configuration constraints. Turn balance is deliberately not an
//! invariant: while fewer than two identities have played, turn inference
//! yields no owner and the same player may legally move repeatedly.

use crate::board::{Board, MIN_N};

/// A predicate over board state that every reachable board must satisfy.
pub trait Invariant {
    /// Whether the invariant holds for the given board.
    fn holds(board: &Board) -> bool;

    /// Human-readable description for violation reports.
    fn description() -> &'static str;
}

/// Invariant: every occupied cell rests on the bottom row or on another
/// occupied cell — gravity leaves no floating tiles.
pub struct GravityPacked;

impl Invariant for GravityPacked {
    fn holds(board: &Board) -> bool {
        (0..board.width()).all(|x| {
            (1..board.height())
                .all(|y| board.cell(x, y).is_none() || board.cell(x, y - 1).is_some())
        })
    }

    fn description() -> &'static str {
        "occupied cells rest on the bottom row or on another occupied cell"
    }
}

/// Invariant: the run length is unset or achievable on the longer axis.
pub struct RunLengthAchievable;

impl Invariant for RunLengthAchievable {
    fn holds(board: &Board) -> bool {
        let n = board.n();
        n == 0 || (n >= MIN_N && n < board.width().max(board.height()))
    }

    fn description() -> &'static str {
        "run length is unset or satisfies MIN_N <= n < max(width, height)"
    }
}

/// A violated invariant, carrying its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// The full invariant set for a board.
pub struct BoardInvariants;

impl BoardInvariants {
    /// Checks every invariant, collecting violations.
    ///
    /// # Errors
    ///
    /// Returns the list of violated invariants when any check fails.
    pub fn check_all(board: &Board) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !GravityPacked::holds(board) {
            violations.push(InvariantViolation {
                description: GravityPacked::description(),
            });
        }
        if !RunLengthAchievable::holds(board) {
            violations.push(InvariantViolation {
                description: RunLengthAchievable::description(),
            });
        }
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}
