//! Error types for board configuration and move application.
//!
//! All failures are local and non-fatal: the board is left untouched and the
//! caller is expected to retry with corrected input.

use derive_more::Display;

/// Rejected board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigError {
    /// Width outside the supported `[MIN_WIDTH, MAX_WIDTH]` range.
    #[display("width {_0} is outside the supported range")]
    WidthOutOfRange(u32),

    /// Height outside the supported `[MIN_HEIGHT, MAX_HEIGHT]` range.
    #[display("height {_0} is outside the supported range")]
    HeightOutOfRange(u32),

    /// Run length below `MIN_N` or not achievable on the longer axis.
    #[display("run length {n} must be at least 4 and shorter than the longer axis ({max})")]
    RunLengthOutOfRange {
        /// The rejected run length.
        n: u32,
        /// The longer of the requested width and height.
        max: u32,
    },

    /// A batch factory was asked for zero boards.
    #[display("cannot create an empty batch of boards")]
    EmptyBatch,
}

impl std::error::Error for ConfigError {}

/// Rejected move. The board state is unchanged whenever one of these is
/// returned; a move either fully applies or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The board's dimensions have not been set yet.
    #[display("board dimensions are not set")]
    NotConfigured,

    /// The game has already ended (win or full board).
    #[display("the game has already ended")]
    GameOver,

    /// Another player's turn; carries the name of the rejected mover.
    #[display("it is not {_0}'s turn")]
    WrongTurn(String),

    /// The target coordinate lies outside the grid.
    #[display("({x}, {y}) is outside the board")]
    OutOfBounds {
        /// Target column.
        x: u32,
        /// Target row.
        y: u32,
    },

    /// The target cell already holds a tile.
    #[display("({x}, {y}) is already occupied")]
    Occupied {
        /// Target column.
        x: u32,
        /// Target row.
        y: u32,
    },

    /// The target row is not the column's gravity landing row.
    #[display("row {y} is not the landing row (tiles fall to row {landing})")]
    Floating {
        /// Requested row.
        y: u32,
        /// Lowest empty row of the column.
        landing: u32,
    },

    /// The column index lies outside the grid.
    #[display("column {_0} is outside the board")]
    InvalidColumn(u32),

    /// Every row of the column is occupied.
    #[display("column {_0} is full")]
    ColumnFull(u32),
}

impl std::error::Error for MoveError {}
