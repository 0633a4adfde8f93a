//! Error types for move validation, square notation and FEN input.

use thiserror::Error;

use crate::board::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Not a file letter followed by a rank digit.
    #[error("Invalid move format")]
    Format(String),

    /// Well-formed, but outside the 8x8 board.
    #[error("Out of bounds move")]
    OutOfBounds(String),
}

/// Why a move was rejected. Checks run in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    MalformedInput(#[from] NotationError),

    #[error("No piece at starting square")]
    EmptySquare,

    #[error("It's {0}'s turn")]
    WrongTurn(Color),

    #[error("Cannot capture your own piece")]
    FriendlyCapture,

    #[error("Invalid move for this piece")]
    IllegalGeometry,

    #[error("Move would leave your king in check")]
    ExposesKing,
}

impl MoveError {
    /// Stable machine-readable code for the rejection reason.
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::MalformedInput(_) => "malformed_input",
            MoveError::EmptySquare => "empty_square",
            MoveError::WrongTurn(_) => "wrong_turn",
            MoveError::FriendlyCapture => "friendly_capture",
            MoveError::IllegalGeometry => "illegal_geometry",
            MoveError::ExposesKing => "exposes_king",
        }
    }
}

#[derive(Error, Debug)]
pub enum FenError {
    #[error("Invalid FEN: {0}")]
    Parse(#[from] shakmaty::fen::ParseFenError),
}
