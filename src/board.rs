use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::piece::{Color, Piece, PieceType};
use crate::position::Position;
use crate::rules;

/// An 8×8 grid of optional pieces, indexed `squares[row - 1][column - 1]`.
///
/// The grid is `Copy`, so simulating a move is a plain value copy with no
/// shared state between the copy and its source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub struct Board {
    pub squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Board in the standard starting arrangement.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    pub fn reset(&mut self) {
        self.squares = [[None; 8]; 8];

        // White pieces (rows 1-2)
        for (col, &pt) in BACK_RANK.iter().enumerate() {
            self.squares[0][col] = Some(Piece::new(pt, Color::White));
        }
        for sq in &mut self.squares[1] {
            *sq = Some(Piece::new(PieceType::Pawn, Color::White));
        }

        // Black pieces (rows 7-8)
        for sq in &mut self.squares[6] {
            *sq = Some(Piece::new(PieceType::Pawn, Color::Black));
        }
        for (col, &pt) in BACK_RANK.iter().enumerate() {
            self.squares[7][col] = Some(Piece::new(pt, Color::Black));
        }
    }

    /// The occupant of `pos`, `None` if empty or off the board.
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        pos.index().and_then(|(r, c)| self.squares[r][c])
    }

    /// Place `piece` at `pos`, replacing any occupant.
    pub fn add_piece(&mut self, pos: Position, piece: Piece) {
        match pos.index() {
            Some((r, c)) => self.squares[r][c] = Some(piece),
            None => tracing::warn!(%pos, %piece, "ignoring placement off the board"),
        }
    }

    /// Relocate the piece at `start` to `end` without any legality check.
    ///
    /// A pawn given a `promotion` arrives as a piece of that type; other
    /// pieces ignore it. Nothing happens if `start` is empty or either
    /// square is off the board.
    pub fn move_piece(&mut self, start: Position, end: Position, promotion: Option<PieceType>) {
        let (Some((fr, fc)), Some((tr, tc))) = (start.index(), end.index()) else {
            return;
        };
        let Some(piece) = self.squares[fr][fc].take() else {
            return;
        };

        self.squares[tr][tc] = match promotion {
            Some(promo_type) if piece.piece_type == PieceType::Pawn => {
                Some(Piece::new(promo_type, piece.color))
            }
            _ => Some(piece),
        };
    }

    pub fn is_real_position(&self, pos: Position) -> bool {
        pos.is_on_board()
    }

    pub fn is_occupied_at(&self, pos: Position) -> bool {
        self.get_piece(pos).is_some()
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, p)| p.piece_type == PieceType::King && p.color == color)
            .map(|(pos, _)| pos)
    }

    /// Every occupied square, rows 1→8 then columns 1→8.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, sq)| {
                sq.map(|p| (Position::new(r as i32 + 1, c as i32 + 1), p))
            })
        })
    }

    /// Squares any piece not of `color` could move to, ignoring self-check.
    pub fn threatened_positions(&self, color: Color) -> HashSet<Position> {
        self.pieces()
            .filter(|(_, p)| p.color != color)
            .flat_map(|(pos, _)| rules::piece_moves(self, pos))
            .map(|m| m.end)
            .collect()
    }
}

/// Rows 8 down to 1, one `|`-separated line each.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.iter().rev() {
            write!(f, "|")?;
            for sq in row {
                match sq {
                    Some(p) => write!(f, "{p}|")?,
                    None => write!(f, " |")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
