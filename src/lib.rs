//! Pure Connect-N game logic.
//!
//! Two players alternately place tiles under gravity on a fixed-size grid;
//! the engine infers whose turn it is from the board contents, validates
//! moves, and detects a winning run of N same-owner tiles in a row, column,
//! or diagonal.
//!
//! There is no current-player field anywhere: turn ownership is re-derived
//! from the occupied cells on every query, and the scoring side effect is an
//! explicit, once-per-board [`Board::award_win`] step separate from the pure
//! winner queries.
//!
//! # Example
//!
//! ```
//! use connectn::{Board, Player};
//!
//! let mut board = Board::create(6, 6, 4)?;
//! let mut red = Player::new("red");
//! let blue = Player::new("blue");
//!
//! board.drop_in_column(&red, 0)?;
//! board.drop_in_column(&blue, 1)?;
//! board.drop_in_column(&red, 0)?;
//! board.drop_in_column(&blue, 1)?;
//! board.drop_in_column(&red, 0)?;
//! board.drop_in_column(&blue, 1)?;
//! board.drop_in_column(&red, 0)?;
//!
//! assert!(board.has_winner());
//! assert!(board.award_win(&mut red));
//! assert_eq!(red.score(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod id;
mod invariants;
mod player;
mod rules;

// Board, its snapshot, and the dimension constants.
pub use board::{
    Board, BoardSnapshot, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_N, MIN_WIDTH, compare_all,
    compare_boards,
};

// Error types.
pub use error::{ConfigError, MoveError};

// Id allocation.
pub use id::IdSequence;

// Structural invariants (used by tests and embedding callers alike).
pub use invariants::{
    BoardInvariants, GravityPacked, Invariant, InvariantViolation, RunLengthAchievable,
};

// The player collaborator.
pub use player::Player;

// Pure rule functions.
pub use rules::{Direction, check_winner, is_full, next_player, scan};
