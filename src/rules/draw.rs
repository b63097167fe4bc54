//! Draw detection: a full grid with no winning run is terminal.

use crate::board::Board;
use tracing::instrument;

/// Checks whether every cell is occupied.
///
/// A zero-size (unconfigured) grid is vacuously full, which is what makes an
/// unconfigured board count as ended.
#[instrument(skip(board), fields(id = board.id()))]
pub fn is_full(board: &Board) -> bool {
    (0..board.width()).all(|x| (0..board.height()).all(|y| board.cell(x, y).is_some()))
}
