//! FEN import/export via shakmaty.
//!
//! Only piece placement and side to move are meaningful here; castling and
//! en passant are written as `-` and ignored when reading.

use shakmaty::fen::{Fen, LossyFenError};
use shakmaty::{File, Rank, Role, Setup};

use crate::board::{Board, Color, Kind, Piece, Square};
use crate::error::FenError;

fn to_shakmaty_square(sq: Square) -> shakmaty::Square {
    // shakmaty ranks count up from white's side; our rows count down from black's.
    shakmaty::Square::from_coords(
        File::new(u32::from(sq.col())),
        Rank::new(u32::from(7 - sq.row())),
    )
}

fn to_role(kind: Kind) -> Role {
    match kind {
        Kind::Pawn => Role::Pawn,
        Kind::Knight => Role::Knight,
        Kind::Bishop => Role::Bishop,
        Kind::Rook => Role::Rook,
        Kind::Queen => Role::Queen,
        Kind::King => Role::King,
    }
}

fn from_role(role: Role) -> Kind {
    match role {
        Role::Pawn => Kind::Pawn,
        Role::Knight => Kind::Knight,
        Role::Bishop => Kind::Bishop,
        Role::Rook => Kind::Rook,
        Role::Queen => Kind::Queen,
        Role::King => Kind::King,
    }
}

fn to_color(color: Color) -> shakmaty::Color {
    match color {
        Color::White => shakmaty::Color::White,
        Color::Black => shakmaty::Color::Black,
    }
}

fn from_color(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

/// FEN for `board` with `side` to move, e.g. `"rnbqkbnr/... w - - 0 1"`.
pub fn to_fen(board: &Board, side: Color) -> String {
    let mut setup = Setup::empty();
    for (sq, piece) in board.pieces() {
        setup.board.set_piece_at(
            to_shakmaty_square(sq),
            shakmaty::Piece {
                color: to_color(piece.color),
                role: to_role(piece.kind),
            },
        );
    }
    setup.turn = to_color(side);
    // Without castling rights or promoted pieces nothing can be lost.
    Fen::try_from_setup(setup)
        .unwrap_or_else(LossyFenError::ignore)
        .to_string()
}

/// Read piece placement and side to move from a FEN string.
pub fn parse_fen(text: &str) -> Result<(Board, Color), FenError> {
    let fen: Fen = text.trim().parse()?;
    let setup = fen.into_setup();

    let mut board = Board::empty();
    for sq in Square::all() {
        if let Some(p) = setup.board.piece_at(to_shakmaty_square(sq)) {
            board.put(sq, Piece::new(from_role(p.role), from_color(p.color)));
        }
    }
    Ok((board, from_color(setup.turn)))
}
