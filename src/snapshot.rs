//! Flat, serializable view of a game for renderers and the wire layer.

use serde::Serialize;

use crate::error::GameResult;
use crate::game::{Game, GameStatus};
use crate::moves::Move;
use crate::piece::{Color, PieceType};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SquarePiece {
    pub piece_type: PieceType,
    pub color: Color,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveJson {
    pub from: String,
    pub to: String,
    pub promotion: Option<PieceType>,
}

impl From<&Move> for MoveJson {
    fn from(m: &Move) -> Self {
        MoveJson {
            from: m.start.to_string(),
            to: m.end.to_string(),
            promotion: m.promotion,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct BoardState {
    /// `squares[0]` is row 1.
    pub squares: Vec<Vec<Option<SquarePiece>>>,
    pub current_turn: Color,
    pub status: GameStatus,
    pub legal_moves: Vec<MoveJson>,
}

pub fn build_board_state(game: &Game) -> GameResult<BoardState> {
    let squares = game
        .board()
        .squares
        .iter()
        .map(|row| {
            row.iter()
                .map(|sq| {
                    sq.map(|p| SquarePiece {
                        piece_type: p.piece_type,
                        color: p.color,
                    })
                })
                .collect()
        })
        .collect();

    let turn = game.team_turn();
    let legal_moves = game
        .all_valid_moves(turn)?
        .iter()
        .map(MoveJson::from)
        .collect();

    Ok(BoardState {
        squares,
        current_turn: turn,
        status: game.status(turn)?,
        legal_moves,
    })
}
