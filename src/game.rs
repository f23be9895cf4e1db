use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{GameError, GameResult};
use crate::moves::Move;
use crate::piece::Color;
use crate::position::Position;
use crate::rules;

/// Derived end-of-turn state for one side. Never stored on the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

/// A board plus the side to move.
///
/// Checkmate and stalemate are queries, not states: nothing stops
/// [`Game::make_move`] after either, so callers check before acting.
/// Castling and en passant are not part of the rule set.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Game {
    board: Board,
    team_turn: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            team_turn: Color::White,
        }
    }

    pub fn team_turn(&self) -> Color {
        self.team_turn
    }

    pub fn set_team_turn(&mut self, color: Color) {
        self.team_turn = color;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Legal moves for the piece on `pos`, whichever side owns it.
    ///
    /// Each pseudo-legal candidate is played on a copy of the board and kept
    /// only if the mover's king is not attacked afterwards.
    pub fn valid_moves(&self, pos: Position) -> GameResult<Vec<Move>> {
        let Some(piece) = self.board.get_piece(pos) else {
            return Ok(Vec::new());
        };

        let candidates = rules::piece_moves(&self.board, pos);
        let total = candidates.len();
        let mut legal = Vec::with_capacity(total);
        for m in candidates {
            let mut copy = self.board;
            copy.move_piece(m.start, m.end, m.promotion);
            if !king_attacked(&copy, piece.color)? {
                legal.push(m);
            }
        }

        if legal.len() < total {
            tracing::debug!(
                %pos,
                discarded = total - legal.len(),
                "dropped moves leaving king attacked"
            );
        }
        Ok(legal)
    }

    /// Legal moves for every piece of `color`.
    pub fn all_valid_moves(&self, color: Color) -> GameResult<Vec<Move>> {
        let mut moves = Vec::new();
        for (pos, piece) in self.board.pieces() {
            if piece.color == color {
                moves.extend(self.valid_moves(pos)?);
            }
        }
        Ok(moves)
    }

    /// Apply `m` for the side to move, then hand the turn over.
    ///
    /// On error the board and turn are untouched.
    pub fn make_move(&mut self, m: Move) -> GameResult<()> {
        let result = self.check_move(m);
        if let Err(err) = &result {
            tracing::warn!(mv = %m, %err, "rejected move");
            return result;
        }

        self.board.move_piece(m.start, m.end, m.promotion);
        tracing::debug!(mv = %m, color = %self.team_turn, "applied move");
        self.team_turn = self.team_turn.opposite();
        Ok(())
    }

    fn check_move(&self, m: Move) -> GameResult<()> {
        let piece = self
            .board
            .get_piece(m.start)
            .ok_or(GameError::EmptySquare(m.start))?;
        if piece.color != self.team_turn {
            return Err(GameError::WrongTurn {
                expected: self.team_turn,
                found: piece.color,
            });
        }
        if !self.valid_moves(m.start)?.contains(&m) {
            return Err(GameError::IllegalMove(m));
        }
        Ok(())
    }

    pub fn is_in_check(&self, color: Color) -> GameResult<bool> {
        king_attacked(&self.board, color)
    }

    /// True when no piece of `color` has a legal move.
    pub fn has_no_valid_moves(&self, color: Color) -> GameResult<bool> {
        for (pos, piece) in self.board.pieces() {
            if piece.color == color && !self.valid_moves(pos)?.is_empty() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn is_in_checkmate(&self, color: Color) -> GameResult<bool> {
        Ok(self.is_in_check(color)? && self.has_no_valid_moves(color)?)
    }

    pub fn is_in_stalemate(&self, color: Color) -> GameResult<bool> {
        Ok(!self.is_in_check(color)? && self.has_no_valid_moves(color)?)
    }

    /// Checkmate, then stalemate, then check; `Ongoing` otherwise.
    pub fn status(&self, color: Color) -> GameResult<GameStatus> {
        let in_check = self.is_in_check(color)?;
        let stuck = self.has_no_valid_moves(color)?;
        Ok(match (in_check, stuck) {
            (true, true) => GameStatus::Checkmate,
            (false, true) => GameStatus::Stalemate,
            (true, false) => GameStatus::Check,
            (false, false) => GameStatus::Ongoing,
        })
    }
}

fn king_attacked(board: &Board, color: Color) -> GameResult<bool> {
    let king = board.find_king(color).ok_or(GameError::MissingKing(color))?;
    Ok(board.threatened_positions(color).contains(&king))
}
