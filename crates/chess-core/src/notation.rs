//! Algebraic square notation: "E2" <-> row 6, column 4.

use std::sync::LazyLock;

use regex::Regex;

use crate::board::Square;
use crate::error::NotationError;

static SQUARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z])([0-9])$").expect("valid square regex"));

/// Parse a file letter + rank digit, case-insensitive. `row = 8 - rank`.
pub fn parse_square(text: &str) -> Result<Square, NotationError> {
    let trimmed = text.trim();
    let caps = SQUARE_RE
        .captures(trimmed)
        .ok_or_else(|| NotationError::Format(text.to_string()))?;

    let file = caps[1].as_bytes()[0].to_ascii_lowercase();
    let rank = caps[2].as_bytes()[0] - b'0';

    let col = i16::from(file) - i16::from(b'a');
    let row = 8 - i16::from(rank);
    if !(0..8).contains(&col) || !(0..8).contains(&row) {
        return Err(NotationError::OutOfBounds(text.to_string()));
    }

    Square::new(row as u8, col as u8).ok_or_else(|| NotationError::OutOfBounds(text.to_string()))
}

impl Square {
    /// Uppercase file + rank, e.g. "E2".
    pub fn to_algebraic(self) -> String {
        let file = char::from(b'A' + self.col());
        let rank = 8 - self.row();
        format!("{file}{rank}")
    }
}
