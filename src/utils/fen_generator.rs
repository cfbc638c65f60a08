//! Position-to-FEN generator.
//!
//! A finished position cannot be expressed: the side-to-move field has no
//! spelling for an outcome. Move clocks are emitted as placeholders since
//! the position model does not track them.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{
    CastlingRights, Piece, TurnState, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE,
    CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::game_state::position::Position;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(position: &Position) -> ChessResult<String> {
    let side_to_move = match position.turn {
        TurnState::LightToMove => "w",
        TurnState::DarkToMove => "b",
        _ => return Err(ChessError::GameFinished),
    };

    let board = generate_board_field(position);
    let castling = generate_castling_field(position.castling_rights);
    let en_passant = generate_en_passant_field(position)?;

    Ok(format!("{board} {side_to_move} {castling} {en_passant} 0 1"))
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let piece = position.piece_at(rank * 8 + file);
            match piece_to_fen_char(piece) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> Option<char> {
    match piece.untagged() {
        Piece::Empty => None,
        Piece::LightPawn => Some('P'),
        Piece::LightKnight => Some('N'),
        Piece::LightBishop => Some('B'),
        Piece::LightRook => Some('R'),
        Piece::LightQueen => Some('Q'),
        Piece::LightKing => Some('K'),
        Piece::DarkPawn => Some('p'),
        Piece::DarkKnight => Some('n'),
        Piece::DarkBishop => Some('b'),
        Piece::DarkRook => Some('r'),
        Piece::DarkQueen => Some('q'),
        Piece::DarkKing => Some('k'),
        _ => None,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_LIGHT_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_LIGHT_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_DARK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_DARK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(position: &Position) -> ChessResult<String> {
    for square in 0..64u8 {
        match position.piece_at(square) {
            Piece::LightPassantPawn => return square_to_algebraic(square - 8),
            Piece::DarkPassantPawn => return square_to_algebraic(square + 8),
            _ => {}
        }
    }
    Ok("-".to_owned())
}
