//! Ray-walking candidate generation for bishops, rooks, and queens.

use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::pseudo_moves::PseudoMove;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Walk each ray outward, stopping at the board edge, inclusively on the
/// first enemy piece, and exclusively on the first own piece.
pub fn sliding_moves(
    position: &Position,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<PseudoMove>,
) {
    for &(d_file, d_rank) in directions {
        let mut x = (from % 8) as i8;
        let mut y = (from / 8) as i8;

        loop {
            x += d_file;
            y += d_rank;
            if !(0..8).contains(&x) || !(0..8).contains(&y) {
                break;
            }

            let to = (x + 8 * y) as Square;
            let target = position.piece_at(to);

            if target == Piece::Empty {
                out.push((from, to));
                continue;
            }
            if !target.is_color(color) {
                out.push((from, to));
            }
            break;
        }
    }
}
