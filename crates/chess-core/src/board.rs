//! Board representation: an 8x8 grid of optional colored pieces.
//!
//! Row 0 is black's back rank, row 7 is white's. Column 0..7 maps to files a..h.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker used for an empty square in piece-code grids.
pub const EMPTY_CODE: char = '.';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step (white moves up the grid).
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color starts on; double steps are only allowed from here.
    pub fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::Pawn,
        Kind::Knight,
        Kind::Bishop,
        Kind::Rook,
        Kind::Queen,
        Kind::King,
    ];

    /// Lowercase letter for this kind ('p', 'n', 'b', 'r', 'q', 'k').
    pub fn letter(self) -> char {
        match self {
            Kind::Pawn => 'p',
            Kind::Knight => 'n',
            Kind::Bishop => 'b',
            Kind::Rook => 'r',
            Kind::Queen => 'q',
            Kind::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<Kind> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.letter() == c.to_ascii_lowercase())
    }
}

/// A piece is identified by kind and color only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: Kind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: Kind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Single-character code: uppercase for white, lowercase for black.
    pub fn code(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    pub fn from_code(c: char) -> Option<Piece> {
        let kind = Kind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }
}

/// A coordinate on the board. Both components are always in 0..8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Square> {
        (row < 8 && col < 8).then_some(Square { row, col })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// All 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    /// The square `drow` rows and `dcol` columns away, if it is on the board.
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        let row = self.row as i8 + drow;
        let col = self.col as i8 + dcol;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Signed (row, col) distance from `self` to `other`.
    pub fn delta(self, other: Square) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [Kind; 8] = [
    Kind::Rook,
    Kind::Knight,
    Kind::Bishop,
    Kind::Queen,
    Kind::King,
    Kind::Bishop,
    Kind::Knight,
    Kind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial chess position.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, Color::Black));
            board.squares[1][col] = Some(Piece::new(Kind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(Kind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row as usize][sq.col as usize]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.row as usize][sq.col as usize] = Some(piece);
    }

    pub fn clear(&mut self, sq: Square) {
        self.squares[sq.row as usize][sq.col as usize] = None;
    }

    /// Move whatever stands on `from` to `to`, capturing anything there.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let piece = self.piece_at(from);
        self.clear(from);
        self.squares[to.row as usize][to.col as usize] = piece;
    }

    /// A copy of this board with `from` moved to `to`; `self` is untouched.
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut next = self.clone();
        next.move_piece(from, to);
        next
    }

    /// Every occupied square with its piece, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(Kind::King, color);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(sq, _)| sq)
    }

    /// Grid of piece codes, `EMPTY_CODE` for empty squares.
    pub fn to_codes(&self) -> [[char; 8]; 8] {
        let mut codes = [[EMPTY_CODE; 8]; 8];
        for (sq, piece) in self.pieces() {
            codes[sq.row as usize][sq.col as usize] = piece.code();
        }
        codes
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}
