//! Two-player chess rule engine: move legality, check and checkmate detection.

pub mod board;
pub mod check;
pub mod error;
pub mod fen;
pub mod game;
pub mod notation;
pub mod rules;

pub use board::{Board, Color, Kind, Piece, Square};
pub use check::{
    has_legal_moves, is_checkmate, is_king_in_check, is_stalemate, legal_destinations,
    legal_moves,
};
pub use error::{FenError, MoveError, NotationError};
pub use game::{GameController, MoveOutcome, Phase};
pub use notation::parse_square;
pub use rules::{is_path_clear, is_valid_move};
