//! Game rules for Connect-N.
//!
//! Pure functions over board state. Rules are separated from board storage so
//! that win, draw, and turn logic can be exercised and reasoned about without
//! mutating anything.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use turn::next_player;
pub use win::{Direction, check_winner, scan};
