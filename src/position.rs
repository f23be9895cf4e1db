use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePositionError;

/// A square on the board. Row 1 is White's back rank, column 1 is the a-file.
///
/// Positions are plain values and may be built off the board while stepping
/// along a ray; [`Position::is_on_board`] tells the two apart.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Position { row, column }
    }

    pub fn is_on_board(self) -> bool {
        (1..=8).contains(&self.row) && (1..=8).contains(&self.column)
    }

    pub fn offset(self, row_delta: i32, column_delta: i32) -> Position {
        Position::new(self.row + row_delta, self.column + column_delta)
    }

    /// Zero-based `(row, col)` array index, `None` when off the board.
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some(((self.row - 1) as usize, (self.column - 1) as usize))
        } else {
            None
        }
    }
}

/// Algebraic notation, e.g. "e4".
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.column);
        }
        let file = (b'a' + (self.column - 1) as u8) as char;
        write!(f, "{file}{}", self.row)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().map(|c| c.to_ascii_lowercase()).collect();
        let [file, rank] = chars[..] else {
            return Err(ParsePositionError::WrongLength(s.to_string()));
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(ParsePositionError::OutOfRange(s.to_string()));
        }
        Ok(Position::new(rank as i32 - '0' as i32, file as i32 - 'a' as i32 + 1))
    }
}
