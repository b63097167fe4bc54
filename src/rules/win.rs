//! Win detection: four directional scans over the full grid.
//!
//! Each scan short-circuits on the first run it finds. Directions are tried
//! in [`Direction`] declaration order, so a board holding runs in several
//! directions reports the diagonal one first.

use crate::board::Board;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A direction a winning run can take, in the order the scans are tried.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Bottom-left to top-right runs.
    RisingDiagonal,
    /// Top-left to bottom-right runs.
    FallingDiagonal,
    /// Runs within a single column.
    Vertical,
    /// Runs within a single row.
    Horizontal,
}

/// Checks the board for a winning run of the configured length.
///
/// Returns the owner of the first run found. No winner is possible before
/// the first move or while the run length is unset.
#[instrument(skip(board), fields(id = board.id()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    if !board.game_started() {
        return None;
    }
    Direction::iter().find_map(|direction| scan(board, direction))
}

/// Runs the scan for a single direction, returning the owner of the first
/// winning run found in that direction.
///
/// An unset run length (0) means no win is possible, whichever direction is
/// asked for.
#[instrument(skip(board), fields(id = board.id()))]
pub fn scan(board: &Board, direction: Direction) -> Option<Player> {
    if board.n() == 0 {
        return None;
    }
    match direction {
        Direction::RisingDiagonal => rising_diagonal(board),
        Direction::FallingDiagonal => falling_diagonal(board),
        Direction::Vertical => vertical(board),
        Direction::Horizontal => horizontal(board),
    }
}

/// Bottom-to-top streak scan per column. Empty cells are skipped without
/// resetting the streak, so a run may span gaps; only a change of owner
/// restarts the count.
fn vertical(board: &Board) -> Option<Player> {
    let n = board.n();
    for x in 0..board.width() {
        let mut streak = 0;
        let mut last: Option<&Player> = None;
        for y in 0..board.height() {
            let Some(owner) = board.cell(x, y) else {
                continue;
            };
            if last.is_some_and(|p| p == owner) {
                streak += 1;
                if streak == n {
                    return Some(owner.clone());
                }
            } else {
                streak = 1;
                last = Some(owner);
            }
        }
    }
    None
}

/// Left-to-right streak scan per row, with the same gap-skipping rule as the
/// vertical scan.
fn horizontal(board: &Board) -> Option<Player> {
    let n = board.n();
    for y in 0..board.height() {
        let mut streak = 0;
        let mut last: Option<&Player> = None;
        for x in 0..board.width() {
            let Some(owner) = board.cell(x, y) else {
                continue;
            };
            if last.is_some_and(|p| p == owner) {
                streak += 1;
                if streak == n {
                    return Some(owner.clone());
                }
            } else {
                streak = 1;
                last = Some(owner);
            }
        }
    }
    None
}

/// Anchored scan for runs along `(c+k, r+k)`. Diagonal runs require all n
/// cells occupied by the anchor's owner; gaps never count here.
fn rising_diagonal(board: &Board) -> Option<Player> {
    let (w, h, n) = (board.width(), board.height(), board.n());
    if w < n || h < n {
        return None;
    }
    for r in 0..=(h - n) {
        for c in 0..=(w - n) {
            let Some(anchor) = board.cell(c, r) else {
                continue;
            };
            if (1..n).all(|k| board.cell(c + k, r + k) == Some(anchor)) {
                return Some(anchor.clone());
            }
        }
    }
    None
}

/// Anchored scan for runs along `(c+k, r-k)`.
fn falling_diagonal(board: &Board) -> Option<Player> {
    let (w, h, n) = (board.width(), board.height(), board.n());
    if w < n || h < n {
        return None;
    }
    for r in (n - 1)..h {
        for c in 0..=(w - n) {
            let Some(anchor) = board.cell(c, r) else {
                continue;
            };
            if (1..n).all(|k| board.cell(c + k, r - k) == Some(anchor)) {
                return Some(anchor.clone());
            }
        }
    }
    None
}
