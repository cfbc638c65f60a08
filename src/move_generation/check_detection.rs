//! King-attack queries.
//!
//! A square counts as attacked when it appears among the destinations of
//! the attacker's raw candidates. These queries must stay on the raw layer;
//! routing them through the legality filter would recurse without bound.

use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::pseudo_moves::pseudo_moves_for;

pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    let king = match color {
        Color::Light => Piece::LightKing,
        Color::Dark => Piece::DarkKing,
    };
    (0..64u8).find(|&square| position.piece_at(square) == king)
}

pub fn is_square_attacked(position: &Position, square: Square, attacker: Color) -> bool {
    pseudo_moves_for(position, attacker)
        .iter()
        .any(|&(_, to)| to == square)
}

pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    match king_square(position, color) {
        Some(square) => is_square_attacked(position, square, color.opposite()),
        None => false,
    }
}

/// Check status of the side to move; a finished position is never in check.
pub fn in_check(position: &Position) -> bool {
    match position.side_to_move() {
        Some(color) => is_king_in_check(position, color),
        None => false,
    }
}
