//! Turn inference from board contents.
//!
//! The engine keeps no current-player field. Whose turn it is gets re-derived
//! from the occupied cells on every query, and that scan is the contract:
//! callers relying on the tie-breaking order get exactly the behavior below.

use crate::board::Board;
use crate::player::Player;
use tracing::instrument;

/// Infers which player moves next.
///
/// Occupied cells are scanned bottom row first, left to right within a row,
/// and classified into at most two distinct identities in order of first
/// appearance; tiles of any further identity accrue no turns. Returns `None`
/// until two distinct identities are present — before that anyone may move,
/// so a lone player can legally place several tiles in a row. With both
/// present, the identity holding fewer tiles moves next; on equal counts the
/// first-seen identity does.
#[instrument(skip(board), fields(id = board.id()))]
pub fn next_player(board: &Board) -> Option<&Player> {
    let mut first: Option<(&Player, u32)> = None;
    let mut second: Option<(&Player, u32)> = None;

    for y in 0..board.height() {
        for x in 0..board.width() {
            let Some(owner) = board.cell(x, y) else {
                continue;
            };
            if let Some((seen, count)) = first.as_mut() {
                if *seen == owner {
                    *count += 1;
                } else if let Some((seen, count)) = second.as_mut() {
                    if *seen == owner {
                        *count += 1;
                    }
                } else {
                    second = Some((owner, 1));
                }
            } else {
                first = Some((owner, 1));
            }
        }
    }

    let (first, first_count) = first?;
    let (second, second_count) = second?;
    if first_count > second_count {
        Some(second)
    } else {
        Some(first)
    }
}
