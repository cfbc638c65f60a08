//! Raw candidate generation, before king-safety filtering.
//!
//! Candidates follow piece-movement rules only. Attack queries, castling
//! safety, and the static evaluator all consume this layer directly so that
//! none of them can re-enter the legality filter.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::pseudo_moves_king::{castling_moves, king_moves};
use crate::move_generation::pseudo_moves_knight::knight_moves;
use crate::move_generation::pseudo_moves_pawn::pawn_moves;
use crate::move_generation::pseudo_moves_sliding::{
    sliding_moves, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// A candidate from/to pair, not yet checked for leaving the king attacked.
pub type PseudoMove = (Square, Square);

/// Candidates for the side to move. Driving a finished game is a caller
/// error and is reported instead of silently generating nothing.
pub fn pseudo_moves(position: &Position) -> ChessResult<Vec<PseudoMove>> {
    match position.side_to_move() {
        Some(color) => Ok(pseudo_moves_for(position, color)),
        None => Err(ChessError::GameFinished),
    }
}

/// Candidates for an explicit color, in ascending from-square order.
pub fn pseudo_moves_for(position: &Position, color: Color) -> Vec<PseudoMove> {
    let mut out = Vec::with_capacity(64);

    for square in 0..64u8 {
        let piece = position.piece_at(square);
        if !piece.is_color(color) {
            continue;
        }

        match piece.untagged() {
            Piece::LightPawn | Piece::DarkPawn => pawn_moves(position, color, square, &mut out),
            Piece::LightKnight | Piece::DarkKnight => {
                knight_moves(position, color, square, &mut out)
            }
            Piece::LightKing | Piece::DarkKing => {
                castling_moves(position, color, square, &mut out);
                king_moves(position, color, square, &mut out);
            }
            Piece::LightBishop | Piece::DarkBishop => {
                sliding_moves(position, color, square, &BISHOP_DIRECTIONS, &mut out)
            }
            Piece::LightRook | Piece::DarkRook => {
                sliding_moves(position, color, square, &ROOK_DIRECTIONS, &mut out)
            }
            Piece::LightQueen | Piece::DarkQueen => {
                sliding_moves(position, color, square, &QUEEN_DIRECTIONS, &mut out)
            }
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{pseudo_moves, pseudo_moves_for};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::{Color, TurnState};
    use crate::game_state::position::Position;

    #[test]
    fn starting_position_has_twenty_candidates_per_side() {
        let position = Position::starting();
        assert_eq!(pseudo_moves_for(&position, Color::Light).len(), 20);
        assert_eq!(pseudo_moves_for(&position, Color::Dark).len(), 20);
    }

    #[test]
    fn candidates_come_out_in_ascending_from_square_order() {
        let position = Position::starting();
        let moves = pseudo_moves_for(&position, Color::Light);
        for pair in moves.windows(2) {
            assert!(pair[0].0 <= pair[1].0);
        }
    }

    #[test]
    fn finished_game_is_a_usage_error() {
        let mut position = Position::starting();
        position.turn = TurnState::Drawn;
        assert_eq!(pseudo_moves(&position), Err(ChessError::GameFinished));
    }
}
