//! Uniform random baseline engine.
//!
//! Selects uniformly from legal moves; primarily used for diagnostics,
//! integration testing, and low-strength opposition. Promotions are always
//! played as queens.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Quince Random"
    }

    fn choose_move(&mut self, position: &Position) -> ChessResult<Position> {
        let moves = legal_moves(position)?;

        let mut rng = rand::rng();
        let picked = moves
            .as_slice()
            .choose(&mut rng)
            .ok_or(ChessError::NoLegalMoves)?;

        let promotion = promotion_for(position, picked.from, picked.to);
        Ok(apply_move(position, picked.from, picked.to, promotion))
    }
}

fn promotion_for(position: &Position, from: Square, to: Square) -> Option<Piece> {
    let mover = position.piece_at(from).untagged();
    match (mover, position.side_to_move()) {
        (Piece::LightPawn, Some(Color::Light)) if to >= 56 => Some(Piece::LightQueen),
        (Piece::DarkPawn, Some(Color::Dark)) if to < 8 => Some(Piece::DarkQueen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::position::Position;
    use crate::move_generation::apply_move::apply_move;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn pick_is_one_of_the_legal_successors() {
        let position = Position::starting();
        let successors: Vec<Position> = legal_moves(&position)
            .expect("generation should succeed")
            .iter()
            .map(|mv| apply_move(&position, mv.from, mv.to, None))
            .collect();

        let mut engine = RandomEngine::new();
        for _ in 0..8 {
            let chosen = engine
                .choose_move(&position)
                .expect("engine should find a move");
            assert!(successors.contains(&chosen));
        }
    }

    #[test]
    fn promotions_are_queened() {
        let position = Position::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1")
            .expect("FEN should parse");
        let mut engine = RandomEngine::new();
        // a8 is the only pawn move; keep drawing until the pawn advances.
        for _ in 0..64 {
            let chosen = engine
                .choose_move(&position)
                .expect("engine should find a move");
            if chosen.piece_at(48) == crate::game_state::chess_types::Piece::Empty {
                assert_eq!(
                    chosen.piece_at(56),
                    crate::game_state::chess_types::Piece::LightQueen
                );
                return;
            }
        }
    }
}
