//! Board storage and game-state operations for Connect-N.
//!
//! The board owns the grid, the dimension/run-length configuration, move
//! application under gravity, and the game-end queries. Win, draw, and turn
//! logic live in the rules module as pure functions; the board only wires
//! them to its mutable state.

use crate::error::{ConfigError, MoveError};
use crate::id::IdSequence;
use crate::player::Player;
use crate::rules;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use tracing::{debug, instrument, warn};

/// Minimum board width.
pub const MIN_WIDTH: u32 = 6;
/// Maximum board width.
pub const MAX_WIDTH: u32 = 16;
/// Minimum board height.
pub const MIN_HEIGHT: u32 = 6;
/// Maximum board height.
pub const MAX_HEIGHT: u32 = 16;
/// Minimum winning run length.
pub const MIN_N: u32 = 4;

/// A Connect-N board: a width x height grid filled under gravity, with
/// `y = 0` as the bottom row.
///
/// Dimensions use `0` as the "unset" sentinel; the validated factories never
/// produce one, but the permissive constructors and [`Board::new`] do.
/// Once any cell is occupied the configuration is frozen.
///
/// Equality and hashing key on the board id, never on contents; comparing
/// contents goes through [`compare_boards`]. `Board` is deliberately not
/// `Clone` for the same reason — copy the grid with [`Board::snapshot`] or
/// the configuration with [`Board::from_config`].
#[derive(Debug)]
pub struct Board {
    id: u32,
    width: u32,
    height: u32,
    run_length: u32,
    title: Option<String>,
    /// Row-major cells, bottom row first.
    cells: Vec<Option<Player>>,
    win_awarded: bool,
}

impl Board {
    /// Creates an unconfigured board: width, height, and run length unset.
    #[instrument]
    pub fn new() -> Self {
        Self::new_with(IdSequence::global())
    }

    /// Creates an unconfigured board drawing its id from `ids`.
    #[instrument(skip(ids))]
    pub fn new_with(ids: &IdSequence) -> Self {
        Self {
            id: ids.next_id(),
            width: 0,
            height: 0,
            run_length: 0,
            title: None,
            cells: Vec::new(),
            win_awarded: false,
        }
    }

    /// Creates a board with the given dimensions and the run length unset.
    ///
    /// Out-of-range dimensions are left unset rather than rejected.
    #[instrument]
    pub fn with_size(width: u32, height: u32) -> Self {
        let mut board = Self::new();
        if (MIN_WIDTH..=MAX_WIDTH).contains(&width) {
            board.width = width;
        }
        if (MIN_HEIGHT..=MAX_HEIGHT).contains(&height) {
            board.height = height;
        }
        board.reset_grid();
        board
    }

    /// Creates a board with the given dimensions and run length.
    ///
    /// Out-of-range values are left unset rather than rejected. The run
    /// length additionally requires both dimensions to be set and
    /// `MIN_N <= n < max(width, height)`.
    #[instrument]
    pub fn with_config(width: u32, height: u32, n: u32) -> Self {
        let mut board = Self::with_size(width, height);
        if board.is_configured() && n >= MIN_N && n < board.longest_axis() {
            board.run_length = n;
        }
        board
    }

    /// Creates a new empty board copying another board's dimensions and run
    /// length, under a fresh id.
    #[instrument(skip(other), fields(other = other.id))]
    pub fn from_config(other: &Board) -> Self {
        let mut board = Self::new();
        board.width = other.width;
        board.height = other.height;
        board.run_length = other.run_length;
        board.reset_grid();
        board
    }

    /// Validated factory: rejects out-of-range dimensions and run lengths
    /// instead of leaving them unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when width or height falls outside its range,
    /// or when `n < MIN_N` or `n >= max(width, height)`.
    #[instrument]
    pub fn create(width: u32, height: u32, n: u32) -> Result<Self, ConfigError> {
        Self::create_with(IdSequence::global(), width, height, n)
    }

    /// Validated factory drawing the board id from `ids`.
    ///
    /// # Errors
    ///
    /// Same as [`Board::create`].
    #[instrument(skip(ids))]
    pub fn create_with(
        ids: &IdSequence,
        width: u32,
        height: u32,
        n: u32,
    ) -> Result<Self, ConfigError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
            return Err(ConfigError::WidthOutOfRange(width));
        }
        if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&height) {
            return Err(ConfigError::HeightOutOfRange(height));
        }
        let max = width.max(height);
        if n < MIN_N || n >= max {
            return Err(ConfigError::RunLengthOutOfRange { n, max });
        }
        let mut board = Self::new_with(ids);
        board.width = width;
        board.height = height;
        board.run_length = n;
        board.reset_grid();
        Ok(board)
    }

    /// Creates `count` independently constructed boards with distinct ids.
    ///
    /// Each board is built with the permissive constructor, so out-of-range
    /// values are left unset rather than rejected here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBatch`] when `count` is zero.
    #[instrument]
    pub fn create_many(
        count: usize,
        width: u32,
        height: u32,
        n: u32,
    ) -> Result<Vec<Self>, ConfigError> {
        if count == 0 {
            return Err(ConfigError::EmptyBatch);
        }
        Ok((0..count).map(|_| Self::with_config(width, height, n)).collect())
    }

    fn reset_grid(&mut self) {
        self.cells = vec![None; (self.width * self.height) as usize];
    }

    fn longest_axis(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Attempts to change the board width; allowed only before the first
    /// move and within range. Returns whether the change was applied.
    ///
    /// If the new dimensions make the current run length unachievable, the
    /// run length is reset to unset rather than the change failing.
    #[instrument(skip(self), fields(id = self.id))]
    pub fn set_width(&mut self, width: u32) -> bool {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) || self.game_started() {
            return false;
        }
        self.width = width;
        self.reset_grid();
        self.reconcile_run_length();
        true
    }

    /// Attempts to change the board height; same rules as [`Board::set_width`].
    #[instrument(skip(self), fields(id = self.id))]
    pub fn set_height(&mut self, height: u32) -> bool {
        if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&height) || self.game_started() {
            return false;
        }
        self.height = height;
        self.reset_grid();
        self.reconcile_run_length();
        true
    }

    /// Attempts to set the winning run length; allowed only before the first
    /// move, once both dimensions are set, and while
    /// `MIN_N <= n < max(width, height)`. Returns whether the change was
    /// applied.
    #[instrument(skip(self), fields(id = self.id))]
    pub fn set_n(&mut self, n: u32) -> bool {
        if self.game_started() || !self.is_configured() {
            return false;
        }
        if n < MIN_N || n >= self.longest_axis() {
            return false;
        }
        self.run_length = n;
        true
    }

    fn reconcile_run_length(&mut self) {
        if self.run_length != 0 && self.longest_axis() <= self.run_length {
            debug!(id = self.id, n = self.run_length, "run length no longer achievable, resetting");
            self.run_length = 0;
        }
    }

    /// Returns the board width, or 0 while unset.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the board height, or 0 while unset.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the winning run length, or 0 while unset.
    pub fn n(&self) -> u32 {
        self.run_length
    }

    /// Returns the board's unique id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the board title, if one was set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Sets a free-form board title. Titles carry no game meaning.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// True once both dimensions are set.
    pub fn is_configured(&self) -> bool {
        self.width != 0 && self.height != 0
    }

    /// The player occupying `(x, y)`, if any. Out-of-bounds reads are `None`.
    pub fn cell(&self, x: u32, y: u32) -> Option<&Player> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.index(x, y)].as_ref()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// The lowest empty row of column `x`, the only row a dropped tile may
    /// legally occupy. `None` when the column is full or out of bounds.
    pub fn landing_row(&self, x: u32) -> Option<u32> {
        if x >= self.width {
            return None;
        }
        (0..self.height).find(|&y| self.cell(x, y).is_none())
    }

    /// True once any cell is occupied; dimensions and run length are frozen
    /// from then on.
    pub fn game_started(&self) -> bool {
        self.cells.iter().any(Option::is_some)
    }

    /// True when a winning run exists or every cell is occupied. A full
    /// board with no winner is a draw and terminal.
    ///
    /// An unconfigured board has zero cells and therefore counts as ended;
    /// move operations report [`MoveError::NotConfigured`] before this is
    /// ever observable.
    pub fn game_ended(&self) -> bool {
        self.has_winner() || rules::is_full(self)
    }

    /// True when some player holds a winning run. Pure: never mutates state,
    /// safe to call repeatedly.
    pub fn has_winner(&self) -> bool {
        rules::check_winner(self).is_some()
    }

    /// The owner of the first winning run found, if any. Pure; scoring goes
    /// through [`Board::award_win`].
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// The player who moves next, inferred from the cells alone; `None`
    /// until two distinct identities have played. See [`crate::next_player`].
    pub fn whose_turn(&self) -> Option<&Player> {
        rules::next_player(self)
    }

    /// Records the win on `player`'s score, at most once per board.
    ///
    /// Returns true iff `player` is the winner and no win has been awarded
    /// on this board yet; repeated calls leave the score untouched.
    #[instrument(skip(self, player), fields(id = self.id, player = %player))]
    pub fn award_win(&mut self, player: &mut Player) -> bool {
        if self.win_awarded {
            return false;
        }
        match self.winner() {
            Some(winner) if winner == *player => {
                self.win_awarded = true;
                player.add_score();
                debug!(score = player.score(), "win awarded");
                true
            }
            _ => false,
        }
    }

    /// Targeted placement: `(x, y)` must be in bounds, empty, and exactly
    /// the column's gravity landing row, and it must be `player`'s turn (or
    /// no turn owner inferable yet).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] naming the first violated condition; the board
    /// is unchanged on any error.
    #[instrument(skip(self, player), fields(id = self.id, player = %player))]
    pub fn place_at(&mut self, player: &Player, x: u32, y: u32) -> Result<(), MoveError> {
        self.check_move_gate(player)?;
        if x >= self.width || y >= self.height {
            return Err(MoveError::OutOfBounds { x, y });
        }
        // Columns are gravity-packed: every row below the landing row is
        // occupied and every row from it upward is empty, so the landing row
        // alone classifies the target.
        match self.landing_row(x) {
            Some(landing) if y == landing => {
                let index = self.index(x, y);
                self.cells[index] = Some(player.clone());
                Ok(())
            }
            Some(landing) if y > landing => {
                warn!(landing, "rejected floating placement");
                Err(MoveError::Floating { y, landing })
            }
            _ => Err(MoveError::Occupied { x, y }),
        }
    }

    /// Column drop: the tile lands in the lowest empty row of column `x`,
    /// which is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] naming the first violated condition; the board
    /// is unchanged on any error.
    #[instrument(skip(self, player), fields(id = self.id, player = %player))]
    pub fn drop_in_column(&mut self, player: &Player, x: u32) -> Result<u32, MoveError> {
        self.check_move_gate(player)?;
        if x >= self.width {
            return Err(MoveError::InvalidColumn(x));
        }
        let Some(landing) = self.landing_row(x) else {
            return Err(MoveError::ColumnFull(x));
        };
        let index = self.index(x, landing);
        self.cells[index] = Some(player.clone());
        Ok(landing)
    }

    /// Shared move gating: configured, not ended, and the mover owns the
    /// turn (or no turn owner can be inferred yet).
    fn check_move_gate(&self, player: &Player) -> Result<(), MoveError> {
        if !self.is_configured() {
            return Err(MoveError::NotConfigured);
        }
        if self.game_ended() {
            return Err(MoveError::GameOver);
        }
        if let Some(turn) = self.whose_turn() {
            if turn != player {
                return Err(MoveError::WrongTurn(player.name().to_owned()));
            }
        }
        Ok(())
    }

    /// A deep-copy snapshot of the grid; `None` until both dimensions are
    /// set.
    #[instrument(skip(self), fields(id = self.id))]
    pub fn snapshot(&self) -> Option<BoardSnapshot> {
        if !self.is_configured() {
            return None;
        }
        Some(BoardSnapshot {
            width: self.width,
            height: self.height,
            run_length: self.run_length,
            cells: self.cells.clone(),
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// An immutable deep copy of a board's configuration and contents.
///
/// Returned by value; nothing reachable from a snapshot aliases the live
/// board, so mutating players cloned out of it never affects the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BoardSnapshot {
    /// Board width at capture time.
    width: u32,
    /// Board height at capture time.
    height: u32,
    /// Winning run length (0 while unset).
    run_length: u32,
    /// Cells in row-major order, bottom row first.
    cells: Vec<Option<Player>>,
}

impl BoardSnapshot {
    /// The player occupying `(x, y)` in the snapshot, if any.
    pub fn cell(&self, x: u32, y: u32) -> Option<&Player> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[(y * self.width + x) as usize].as_ref()
    }
}

/// Compares two boards by configuration and contents, not identity: true iff
/// dimensions, run length, and every cell agree (player equality by name).
/// Reflexive and symmetric.
pub fn compare_boards(a: &Board, b: &Board) -> bool {
    if a.width() != b.width() || a.height() != b.height() || a.n() != b.n() {
        return false;
    }
    (0..a.width()).all(|x| (0..a.height()).all(|y| a.cell(x, y) == b.cell(x, y)))
}

/// True when every consecutive pair of boards compares equal under
/// [`compare_boards`]. Empty and singleton slices compare true.
pub fn compare_all(boards: &[Board]) -> bool {
    boards.windows(2).all(|pair| compare_boards(&pair[0], &pair[1]))
}
