//! Geometric move legality per piece kind.
//!
//! These rules ignore whose turn it is and whether the mover's own king ends
//! up attacked. Apart from the pawn's capture rule they also ignore what
//! stands on the destination square; the friendly-capture guard lives in the
//! game controller and the legal-move search.

use crate::board::{Board, Color, Kind, Piece, Square};

/// True if every square strictly between `start` and `end` is empty.
///
/// `start` and `end` must share a rank, file or diagonal; otherwise false.
pub fn is_path_clear(board: &Board, start: Square, end: Square) -> bool {
    let (drow, dcol) = start.delta(end);
    if drow != 0 && dcol != 0 && drow.abs() != dcol.abs() {
        return false;
    }

    let step = (drow.signum(), dcol.signum());
    let mut current = start.offset(step.0, step.1);
    while let Some(sq) = current {
        if sq == end {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(step.0, step.1);
    }
    true
}

fn pawn_move(board: &Board, start: Square, end: Square, color: Color) -> bool {
    let direction = color.pawn_direction();
    let (drow, dcol) = start.delta(end);

    match dcol.abs() {
        0 if drow == direction => board.is_empty(end),
        0 if drow == 2 * direction && start.row() == color.pawn_home_row() => {
            let Some(between) = start.offset(direction, 0) else {
                return false;
            };
            board.is_empty(between) && board.is_empty(end)
        }
        // Diagonal steps only ever capture.
        1 if drow == direction => board
            .color_at(end)
            .is_some_and(|target| target != color),
        _ => false,
    }
}

fn rook_move(board: &Board, start: Square, end: Square) -> bool {
    let (drow, dcol) = start.delta(end);
    (drow == 0 || dcol == 0) && is_path_clear(board, start, end)
}

fn knight_move(start: Square, end: Square) -> bool {
    let (drow, dcol) = start.delta(end);
    matches!((drow.abs(), dcol.abs()), (2, 1) | (1, 2))
}

fn bishop_move(board: &Board, start: Square, end: Square) -> bool {
    let (drow, dcol) = start.delta(end);
    drow != 0 && drow.abs() == dcol.abs() && is_path_clear(board, start, end)
}

fn queen_move(board: &Board, start: Square, end: Square) -> bool {
    rook_move(board, start, end) || bishop_move(board, start, end)
}

fn king_move(start: Square, end: Square) -> bool {
    let (drow, dcol) = start.delta(end);
    drow.abs() <= 1 && dcol.abs() <= 1
}

/// Can `piece` standing on `start` move to `end` on this board?
///
/// Blind to turn order and check-safety. The null move is never legal.
pub fn is_valid_move(board: &Board, start: Square, end: Square, piece: Piece) -> bool {
    if start == end {
        return false;
    }
    match piece.kind {
        Kind::Pawn => pawn_move(board, start, end, piece.color),
        Kind::Rook => rook_move(board, start, end),
        Kind::Knight => knight_move(start, end),
        Kind::Bishop => bishop_move(board, start, end),
        Kind::Queen => queen_move(board, start, end),
        Kind::King => king_move(start, end),
    }
}
