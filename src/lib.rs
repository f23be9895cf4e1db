pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod piece;
pub mod position;
pub mod rules;
pub mod snapshot;

#[cfg(target_arch = "wasm32")]
mod wasm_api;

pub use board::Board;
pub use error::{GameError, GameResult};
pub use game::{Game, GameStatus};
pub use moves::Move;
pub use piece::{Color, Piece, PieceType};
pub use position::Position;
