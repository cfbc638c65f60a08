//! Fixed rules data: the standard starting position.

use crate::game_state::chess_types::{Piece, TurnState, CASTLE_ALL};
use crate::game_state::position::Position;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[rustfmt::skip]
pub const STARTING_POSITION: Position = Position {
    board: [
        Piece::LightRook, Piece::LightKnight, Piece::LightBishop, Piece::LightQueen,
        Piece::LightKing, Piece::LightBishop, Piece::LightKnight, Piece::LightRook,
        Piece::LightPawn, Piece::LightPawn, Piece::LightPawn, Piece::LightPawn,
        Piece::LightPawn, Piece::LightPawn, Piece::LightPawn, Piece::LightPawn,
        Piece::Empty, Piece::Empty, Piece::Empty, Piece::Empty,
        Piece::Empty, Piece::Empty, Piece::Empty, Piece::Empty,
        Piece::Empty, Piece::Empty, Piece::Empty, Piece::Empty,
        Piece::Empty, Piece::Empty, Piece::Empty, Piece::Empty,
        Piece::Empty, Piece::Empty, Piece::Empty, Piece::Empty,
        Piece::Empty, Piece::Empty, Piece::Empty, Piece::Empty,
        Piece::Empty, Piece::Empty, Piece::Empty, Piece::Empty,
        Piece::Empty, Piece::Empty, Piece::Empty, Piece::Empty,
        Piece::DarkPawn, Piece::DarkPawn, Piece::DarkPawn, Piece::DarkPawn,
        Piece::DarkPawn, Piece::DarkPawn, Piece::DarkPawn, Piece::DarkPawn,
        Piece::DarkRook, Piece::DarkKnight, Piece::DarkBishop, Piece::DarkQueen,
        Piece::DarkKing, Piece::DarkBishop, Piece::DarkKnight, Piece::DarkRook,
    ],
    turn: TurnState::LightToMove,
    castling_rights: CASTLE_ALL,
};

#[cfg(test)]
mod tests {
    use super::{STARTING_POSITION, STARTING_POSITION_FEN};
    use crate::game_state::position::Position;

    #[test]
    fn starting_constant_matches_starting_fen() {
        let parsed = Position::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(parsed, STARTING_POSITION);
    }
}
