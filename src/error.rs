use crate::core::{Mark, Outcome};
use thiserror::Error;

/// Reasons a move cannot be applied to a board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("move mark must be X or O")]
    InvalidMark,

    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("board has no cells")]
    NilBoard,

    #[error("unsupported board size: {0}")]
    InvalidSize(usize),

    #[error("board rows must form a square grid")]
    NotSquare,
}

/// Errors raised while setting up or driving a game.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("a player must hold X or O")]
    InvalidPlayerMark,

    #[error("both players hold {0:?}")]
    DuplicateMark(Mark),

    #[error("game is already finished")]
    Finished,

    #[error("starting position is already decided: {0:?}")]
    AlreadyDecided(Outcome),

    #[error(transparent)]
    Board(#[from] BoardError),
}
