//! King candidate generation: single steps plus castling candidates.
//!
//! Castling here is gated on rights and empty between-squares only; the
//! attacked-square conditions belong to the legality filter so that attack
//! queries built on this layer cannot recurse.

use crate::game_state::chess_types::{
    Color, Piece, Square, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, CASTLE_LIGHT_KINGSIDE,
    CASTLE_LIGHT_QUEENSIDE,
};
use crate::game_state::position::Position;
use crate::move_generation::pseudo_moves::PseudoMove;

pub const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

pub fn king_moves(position: &Position, color: Color, from: Square, out: &mut Vec<PseudoMove>) {
    let file = (from % 8) as i8;
    let rank = (from / 8) as i8;

    for (d_file, d_rank) in KING_STEPS {
        let x = file + d_file;
        let y = rank + d_rank;
        if !(0..8).contains(&x) || !(0..8).contains(&y) {
            continue;
        }

        let to = (x + 8 * y) as Square;
        if !position.piece_at(to).is_color(color) {
            out.push((from, to));
        }
    }
}

pub fn castling_moves(position: &Position, color: Color, from: Square, out: &mut Vec<PseudoMove>) {
    match color {
        Color::Light => {
            if from != 4 {
                return;
            }
            if position.can_castle(CASTLE_LIGHT_KINGSIDE)
                && position.piece_at(5) == Piece::Empty
                && position.piece_at(6) == Piece::Empty
            {
                out.push((4, 6));
            }
            if position.can_castle(CASTLE_LIGHT_QUEENSIDE)
                && position.piece_at(3) == Piece::Empty
                && position.piece_at(2) == Piece::Empty
                && position.piece_at(1) == Piece::Empty
            {
                out.push((4, 2));
            }
        }
        Color::Dark => {
            if from != 60 {
                return;
            }
            if position.can_castle(CASTLE_DARK_KINGSIDE)
                && position.piece_at(61) == Piece::Empty
                && position.piece_at(62) == Piece::Empty
            {
                out.push((60, 62));
            }
            if position.can_castle(CASTLE_DARK_QUEENSIDE)
                && position.piece_at(59) == Piece::Empty
                && position.piece_at(58) == Piece::Empty
                && position.piece_at(57) == Piece::Empty
            {
                out.push((60, 58));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{castling_moves, king_moves};
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;

    #[test]
    fn boxed_in_king_has_no_steps() {
        let position = Position::starting();
        let mut out = Vec::new();
        king_moves(&position, Color::Light, 4, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn castling_candidates_require_empty_between_squares() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        castling_moves(&position, Color::Light, 4, &mut out);
        assert_eq!(out, vec![(4, 6), (4, 2)]);

        let blocked = Position::from_fen("r3k2r/8/8/8/8/8/8/R2QK2R w KQkq - 0 1")
            .expect("FEN should parse");
        out.clear();
        castling_moves(&blocked, Color::Light, 4, &mut out);
        assert_eq!(out, vec![(4, 6)]);
    }

    #[test]
    fn revoked_rights_suppress_candidates() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        castling_moves(&position, Color::Light, 4, &mut out);
        assert!(out.is_empty());

        out.clear();
        castling_moves(&position, Color::Dark, 60, &mut out);
        assert_eq!(out, vec![(60, 62), (60, 58)]);
    }
}
