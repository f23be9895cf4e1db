//! Error types for the rules engine.

use crate::moves::Move;
use crate::piece::Color;
use crate::position::Position;

/// Errors raised by [`crate::game::Game`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The move's start square holds no piece.
    #[error("no piece at {0}")]
    EmptySquare(Position),

    /// The piece being moved does not belong to the side to move.
    #[error("it is {expected}'s turn, not {found}'s")]
    WrongTurn { expected: Color, found: Color },

    /// The move is not among the legal moves of the piece.
    #[error("{0} is not a legal move")]
    IllegalMove(Move),

    /// A check query was made on a board with no king of that color.
    #[error("invalid state: no {0} king on the board")]
    MissingKing(Color),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositionError {
    #[error("position must be exactly 2 characters, e.g. 'e4', got {0:?}")]
    WrongLength(String),

    #[error("position {0:?} is outside 'a1' to 'h8'")]
    OutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("move must be 4 or 5 characters, e.g. 'e2e4' or 'e7e8q', got {0:?}")]
    WrongLength(String),

    #[error(transparent)]
    Position(#[from] ParsePositionError),

    #[error("{0:?} is not a promotion piece")]
    BadPromotion(char),
}
