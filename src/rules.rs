//! Pseudo-legal move generation.
//!
//! Every rule maps a board and a square to the moves the piece on that square
//! could make by geometry and occupancy alone. Whether a move leaves the
//! mover's own king attacked is decided later by [`crate::game::Game`].

use crate::board::Board;
use crate::moves::Move;
use crate::piece::{Color, PieceType};
use crate::position::Position;

const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
#[rustfmt::skip]
const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];
#[rustfmt::skip]
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1), (1, 2), (2, -1), (1, -2),
    (-2, 1), (-1, 2), (-2, -1), (-1, -2),
];

/// Moves for whatever piece stands on `pos`; empty if the square is empty.
pub fn piece_moves(board: &Board, pos: Position) -> Vec<Move> {
    let Some(piece) = board.get_piece(pos) else {
        return Vec::new();
    };
    let color = piece.color;
    let mut moves = Vec::new();
    let m = &mut moves;
    match piece.piece_type {
        PieceType::King => generate_stepping_moves(board, pos, color, &ALL_DIRECTIONS, m),
        PieceType::Queen => generate_sliding_moves(board, pos, color, &ALL_DIRECTIONS, m),
        PieceType::Bishop => generate_sliding_moves(board, pos, color, &DIAGONAL, m),
        PieceType::Knight => generate_stepping_moves(board, pos, color, &KNIGHT_OFFSETS, m),
        PieceType::Rook => generate_sliding_moves(board, pos, color, &ORTHOGONAL, m),
        PieceType::Pawn => generate_pawn_moves(board, pos, color, m),
    }
    moves
}

/// Walk from `start` along one direction, emitting quiet moves until the
/// edge or an occupied square; an enemy occupant is emitted as a capture.
/// A short-range walk stops after the first step.
fn cast_ray(
    board: &Board,
    start: Position,
    color: Color,
    (dr, dc): (i32, i32),
    long_range: bool,
    moves: &mut Vec<Move>,
) {
    let mut target = start.offset(dr, dc);
    while target.is_on_board() {
        if let Some(p) = board.get_piece(target) {
            if p.color != color {
                moves.push(Move::quiet(start, target));
            }
            break;
        }
        moves.push(Move::quiet(start, target));
        if !long_range {
            break;
        }
        target = target.offset(dr, dc);
    }
}

fn generate_sliding_moves(
    board: &Board,
    pos: Position,
    color: Color,
    directions: &[(i32, i32)],
    moves: &mut Vec<Move>,
) {
    for &dir in directions {
        cast_ray(board, pos, color, dir, true, moves);
    }
}

// Knight offsets are jumps, so nothing between start and target is looked at.
fn generate_stepping_moves(
    board: &Board,
    pos: Position,
    color: Color,
    offsets: &[(i32, i32)],
    moves: &mut Vec<Move>,
) {
    for &offset in offsets {
        cast_ray(board, pos, color, offset, false, moves);
    }
}

// The double step is allowed from the starting row alone. A pawn can never
// return to that row once it leaves, so no move history is needed.
// En passant is not generated.
fn generate_pawn_moves(board: &Board, pos: Position, color: Color, moves: &mut Vec<Move>) {
    let dir = color.forward();

    // Single push
    let one = pos.offset(dir, 0);
    if one.is_on_board() && !board.is_occupied_at(one) {
        push_pawn_move(pos, one, color, moves);

        // Double push
        let two = one.offset(dir, 0);
        if pos.row == color.pawn_row() && two.is_on_board() && !board.is_occupied_at(two) {
            push_pawn_move(pos, two, color, moves);
        }
    }

    // Captures
    for dc in [-1, 1] {
        let target = pos.offset(dir, dc);
        let is_capture = board
            .get_piece(target)
            .map(|p| p.color != color)
            .unwrap_or(false);
        if is_capture {
            push_pawn_move(pos, target, color, moves);
        }
    }
}

/// One plain move, or one move per promotion target on the last row.
fn push_pawn_move(start: Position, end: Position, color: Color, moves: &mut Vec<Move>) {
    if end.row == color.promotion_row() {
        for pt in PieceType::PROMOTIONS {
            moves.push(Move::new(start, end, Some(pt)));
        }
    } else {
        moves.push(Move::quiet(start, end));
    }
}
