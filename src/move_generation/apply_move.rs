//! Position transition with all special-move bookkeeping.
//!
//! `apply_move` assumes its input already passed the legality filter and
//! performs no validation; calling it with an unchecked move is the caller's
//! contract to uphold. Promotion substitutes whatever piece the caller
//! supplies; `None` leaves the pawn in place, which is what the legality
//! probe and the search tree use.

use crate::game_state::chess_types::{
    Piece, Square, TurnState, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, CASTLE_LIGHT_KINGSIDE,
    CASTLE_LIGHT_QUEENSIDE,
};
use crate::game_state::position::Position;

pub fn apply_move(
    position: &Position,
    from: Square,
    to: Square,
    promotion: Option<Piece>,
) -> Position {
    let mut next = position.clone();

    next.turn = match next.turn {
        TurnState::LightToMove => TurnState::DarkToMove,
        TurnState::DarkToMove => TurnState::LightToMove,
        finished => finished,
    };

    let moved = next.piece_at(from);
    next.put_piece(to, moved);
    next.put_piece(from, Piece::Empty);

    match moved {
        Piece::LightPawn | Piece::LightPassantPawn => {
            if (8..16).contains(&from) && (24..32).contains(&to) {
                next.put_piece(to, Piece::LightPassantPawn);
            } else if to >= 56 {
                if let Some(promoted) = promotion {
                    next.put_piece(to, promoted);
                }
            }
            if to >= 8 && next.piece_at(to - 8) == Piece::DarkPassantPawn {
                next.put_piece(to - 8, Piece::Empty);
            }
        }
        Piece::DarkPawn | Piece::DarkPassantPawn => {
            if (48..56).contains(&from) && (32..40).contains(&to) {
                next.put_piece(to, Piece::DarkPassantPawn);
            } else if to < 8 {
                if let Some(promoted) = promotion {
                    next.put_piece(to, promoted);
                }
            }
            if to < 56 && next.piece_at(to + 8) == Piece::LightPassantPawn {
                next.put_piece(to + 8, Piece::Empty);
            }
        }
        Piece::LightKing => {
            if from == 4 && to == 6 {
                next.put_piece(7, Piece::Empty);
                next.put_piece(5, Piece::LightRook);
            } else if from == 4 && to == 2 {
                next.put_piece(0, Piece::Empty);
                next.put_piece(3, Piece::LightRook);
            }
            next.castling_rights &= !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE);
        }
        Piece::DarkKing => {
            if from == 60 && to == 62 {
                next.put_piece(63, Piece::Empty);
                next.put_piece(61, Piece::DarkRook);
            } else if from == 60 && to == 58 {
                next.put_piece(56, Piece::Empty);
                next.put_piece(59, Piece::DarkRook);
            }
            next.castling_rights &= !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);
        }
        Piece::LightRook => {
            if from == 0 {
                next.castling_rights &= !CASTLE_LIGHT_QUEENSIDE;
            } else if from == 7 {
                next.castling_rights &= !CASTLE_LIGHT_KINGSIDE;
            }
        }
        Piece::DarkRook => {
            if from == 56 {
                next.castling_rights &= !CASTLE_DARK_QUEENSIDE;
            } else if from == 63 {
                next.castling_rights &= !CASTLE_DARK_KINGSIDE;
            }
        }
        _ => {}
    }

    // A move landing on a rook's home corner revokes that side's right,
    // covering rooks captured before they ever moved.
    match to {
        0 => next.castling_rights &= !CASTLE_LIGHT_QUEENSIDE,
        7 => next.castling_rights &= !CASTLE_LIGHT_KINGSIDE,
        56 => next.castling_rights &= !CASTLE_DARK_QUEENSIDE,
        63 => next.castling_rights &= !CASTLE_DARK_KINGSIDE,
        _ => {}
    }

    // Tags belonging to the side about to move have served their one ply.
    let (tag, plain) = match next.turn {
        TurnState::LightToMove => (Piece::LightPassantPawn, Piece::LightPawn),
        TurnState::DarkToMove => (Piece::DarkPassantPawn, Piece::DarkPawn),
        _ => return next,
    };
    for square in 0..64u8 {
        if next.piece_at(square) == tag {
            next.put_piece(square, plain);
        }
    }

    next
}
