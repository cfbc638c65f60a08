//! Knight candidate generation over the eight jump offsets.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::pseudo_moves::PseudoMove;

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (-1, -2),
    (1, -2),
    (2, 1),
    (-2, 1),
    (-2, -1),
    (2, -1),
];

pub fn knight_moves(position: &Position, color: Color, from: Square, out: &mut Vec<PseudoMove>) {
    let file = (from % 8) as i8;
    let rank = (from / 8) as i8;

    for (d_file, d_rank) in KNIGHT_JUMPS {
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

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;

    #[test]
    fn centralized_knight_reaches_eight_squares() {
        let position = Position::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        knight_moves(&position, Color::Light, 27, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn cornered_knight_is_clipped_to_two_squares() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        knight_moves(&position, Color::Light, 0, &mut out);
        out.sort_unstable();
        assert_eq!(out, vec![(0, 10), (0, 17)]);
    }

    #[test]
    fn own_pieces_block_landing_squares() {
        let position = Position::starting();
        let mut out = Vec::new();
        knight_moves(&position, Color::Light, 1, &mut out);
        out.sort_unstable();
        assert_eq!(out, vec![(1, 16), (1, 18)]);
    }
}
