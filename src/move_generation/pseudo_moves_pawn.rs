//! Pawn candidate generation: pushes, diagonal captures, and en passant.

use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::pseudo_moves::PseudoMove;

/// An en-passant capture lands on the diagonal square the enemy pawn
/// skipped; the tagged pawn itself sits beside the capturer on the same
/// rank and is removed by the applicator.
pub fn pawn_moves(position: &Position, color: Color, from: Square, out: &mut Vec<PseudoMove>) {
    let file = i16::from(from % 8);
    let rank = from / 8;

    let (forward, home_rank, enemy_tag): (i16, u8, Piece) = match color {
        Color::Light => (8, 1, Piece::DarkPassantPawn),
        Color::Dark => (-8, 6, Piece::LightPassantPawn),
    };

    // Pushes: one square, and two from the home rank through empty squares.
    let ahead = i16::from(from) + forward;
    if (0..64).contains(&ahead) && position.piece_at(ahead as Square) == Piece::Empty {
        out.push((from, ahead as Square));

        if rank == home_rank {
            let two_ahead = ahead + forward;
            if position.piece_at(two_ahead as Square) == Piece::Empty {
                out.push((from, two_ahead as Square));
            }
        }
    }

    // Captures. Edge files suppress the diagonal that would wrap.
    for side_step in [-1i16, 1] {
        if !(0..8).contains(&(file + side_step)) {
            continue;
        }
        let to = i16::from(from) + forward + side_step;
        if !(0..64).contains(&to) {
            continue;
        }

        let target = position.piece_at(to as Square);
        let beside = position.piece_at((i16::from(from) + side_step) as Square);

        if target.is_color(color.opposite()) || beside == enemy_tag {
            out.push((from, to as Square));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;

    #[test]
    fn home_rank_pawn_has_single_and_double_push() {
        let position = Position::starting();
        let mut out = Vec::new();
        pawn_moves(&position, Color::Light, 12, &mut out);
        assert_eq!(out, vec![(12, 20), (12, 28)]);
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        let position = Position::from_fen("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        pawn_moves(&position, Color::Light, 20, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn edge_file_pawn_does_not_wrap_captures() {
        // Light pawn on a4 with a dark piece on h4: no wraparound capture.
        let position = Position::from_fen("4k3/8/8/8/P6r/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        pawn_moves(&position, Color::Light, 24, &mut out);
        assert_eq!(out, vec![(24, 32)]);
    }

    #[test]
    fn diagonal_captures_on_both_sides() {
        let position = Position::from_fen("4k3/8/8/3p1p2/4P3/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        pawn_moves(&position, Color::Light, 28, &mut out);
        assert_eq!(out, vec![(28, 36), (28, 35), (28, 37)]);
    }
}
