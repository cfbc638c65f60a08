//! Fixed-depth minimax engine.

use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::position::Position;
use crate::search::search_tree::choose_move;

pub struct MinimaxEngine;

impl MinimaxEngine {
    pub fn new() -> Self {
        MinimaxEngine
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Quince Minimax"
    }

    fn choose_move(&mut self, position: &Position) -> ChessResult<Position> {
        choose_move(position)
    }
}
