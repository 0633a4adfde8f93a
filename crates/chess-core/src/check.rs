//! Check, checkmate and stalemate detection.
//!
//! Attacks are found by asking the ordinary move rules whether an enemy piece
//! could move onto the king's square. Pawns therefore only attack diagonally:
//! a straight pawn step needs an empty destination and the king's square is
//! never empty.

use crate::board::{Board, Color, Square};
use crate::rules::is_valid_move;

/// Is `color`'s king attacked by any enemy piece? False if there is no king.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.find_king(color) else {
        return false;
    };
    let enemy = color.opponent();
    board
        .pieces()
        .filter(|(_, piece)| piece.color == enemy)
        .any(|(sq, piece)| is_valid_move(board, sq, king_sq, piece))
}

/// Geometrically legal moves for `color` that do not land on a friendly piece.
fn candidate_moves(board: &Board, color: Color) -> impl Iterator<Item = (Square, Square)> + '_ {
    board
        .pieces()
        .filter(move |(_, piece)| piece.color == color)
        .flat_map(move |(from, piece)| {
            Square::all()
                .filter(move |&to| board.color_at(to) != Some(color))
                .filter(move |&to| is_valid_move(board, from, to, piece))
                .map(move |to| (from, to))
        })
}

/// Would playing `from -> to` leave `color`'s king attacked?
pub fn leaves_king_in_check(board: &Board, from: Square, to: Square, color: Color) -> bool {
    is_king_in_check(&board.with_move(from, to), color)
}

/// Does `color` have at least one move that leaves its king safe?
///
/// Stops at the first such move.
pub fn has_legal_moves(board: &Board, color: Color) -> bool {
    candidate_moves(board, color).any(|(from, to)| !leaves_king_in_check(board, from, to, color))
}

/// Every move `color` could play without leaving its king in check.
pub fn legal_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    candidate_moves(board, color)
        .filter(|&(from, to)| !leaves_king_in_check(board, from, to, color))
        .collect()
}

/// Legal destinations for the piece on `from`; empty if the square is empty.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    Square::all()
        .filter(|&to| board.color_at(to) != Some(piece.color))
        .filter(|&to| is_valid_move(board, from, to, piece))
        .filter(|&to| !leaves_king_in_check(board, from, to, piece.color))
        .collect()
}

pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_king_in_check(board, color) && !has_legal_moves(board, color)
}

pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_king_in_check(board, color) && !has_legal_moves(board, color)
}
