use crate::game::Game as Engine;
use crate::moves::Move;
use crate::position::Position;
use crate::snapshot::{build_board_state, BoardState, MoveJson};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct MoveResult {
    #[serde(flatten)]
    board_state: Option<BoardState>,
    error: Option<String>,
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn error_result(message: String) -> JsValue {
    to_js(&MoveResult {
        board_state: None,
        error: Some(message),
    })
}

#[wasm_bindgen]
pub struct Game {
    game: Engine,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game { game: Engine::new() }
    }

    /// Restore a game from its JSON encoding.
    pub fn from_json(json: &str) -> Result<Game, JsValue> {
        serde_json::from_str(json)
            .map(|game| Game { game })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn get_board_state(&self) -> JsValue {
        match build_board_state(&self.game) {
            Ok(state) => to_js(&state),
            Err(e) => error_result(e.to_string()),
        }
    }

    /// Apply a move given in UCI text, e.g. "e2e4" or "a7a8q".
    pub fn make_move(&mut self, uci: &str) -> JsValue {
        let m = match Move::from_uci(uci) {
            Ok(m) => m,
            Err(e) => return error_result(e.to_string()),
        };
        if let Err(e) = self.game.make_move(m) {
            return error_result(e.to_string());
        }
        match build_board_state(&self.game) {
            Ok(state) => to_js(&MoveResult {
                board_state: Some(state),
                error: None,
            }),
            Err(e) => error_result(e.to_string()),
        }
    }

    pub fn get_legal_moves_for_square(&self, square: &str) -> JsValue {
        let moves = square
            .parse::<Position>()
            .map_err(|e| e.to_string())
            .and_then(|pos| self.game.valid_moves(pos).map_err(|e| e.to_string()));
        match moves {
            Ok(moves) => to_js(&moves.iter().map(MoveJson::from).collect::<Vec<_>>()),
            Err(e) => error_result(e),
        }
    }
}
