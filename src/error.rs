use crate::board::{Mark, NUM_CELLS};
use thiserror::Error;

/// Recoverable failures raised while validating outside input before it
/// reaches the board. Out-of-range indices passed straight to [`crate::board::Board`]
/// are precondition violations and panic instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cell index {0} is out of range (expected 0..{})", NUM_CELLS)]
    IndexOutOfRange(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("{0} needs a cell index to play")]
    MoveRequired(String),

    #[error("no open cell left to play")]
    NoMoveAvailable,

    #[error("both players use the mark '{0}'")]
    DuplicateMarks(Mark),

    #[error("invalid mark {0:?}: expected a single visible character")]
    InvalidMark(String),

    #[error("unknown player kind {0:?}: expected human, random or minimax")]
    UnknownPlayerKind(String),

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
