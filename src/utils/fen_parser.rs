//! FEN-to-Position parser.
//!
//! The en-passant field maps onto the tagged-pawn representation: the named
//! square must sit directly behind a pawn of the side that just moved, and
//! that pawn becomes the tagged variant. Move clocks are validated and
//! discarded; the position model does not track them.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{
    CastlingRights, Piece, TurnState, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE,
    CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing side to move".to_owned()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing castling rights".to_owned()))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing en-passant square".to_owned()))?;
    let halfmove_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing halfmove clock".to_owned()))?;
    let fullmove_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing fullmove number".to_owned()))?;

    if parts.next().is_some() {
        return Err(ChessError::InvalidFen("extra trailing fields".to_owned()));
    }

    let mut position = Position {
        board: [Piece::Empty; 64],
        turn: parse_side_to_move(side_part)?,
        castling_rights: parse_castling_rights(castling_part)?,
    };

    parse_board(board_part, &mut position)?;
    apply_en_passant_field(en_passant_part, &mut position)?;

    // Clocks must be numeric but are not represented in the position.
    let _: u32 = halfmove_part
        .parse()
        .map_err(|_| ChessError::InvalidFen(format!("invalid halfmove clock: {halfmove_part}")))?;
    let _: u32 = fullmove_part
        .parse()
        .map_err(|_| ChessError::InvalidFen(format!("invalid fullmove number: {fullmove_part}")))?;

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    for (fen_rank_index, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_index;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;

            if file >= 8 {
                return Err(ChessError::InvalidFen(
                    "board rank has too many files".to_owned(),
                ));
            }

            position.put_piece((board_rank * 8 + file) as u8, piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::InvalidFen(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<TurnState> {
    match side_part {
        "w" => Ok(TurnState::LightToMove),
        "b" => Ok(TurnState::DarkToMove),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn apply_en_passant_field(en_passant_part: &str, position: &mut Position) -> ChessResult<()> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| ChessError::InvalidFen(format!("invalid en-passant square: {en_passant_part}")))?;

    // The vulnerable pawn stands in front of the skipped square, seen from
    // the side that just moved.
    let (pawn_square, plain, tagged) = match position.turn {
        TurnState::DarkToMove => (square.wrapping_add(8), Piece::LightPawn, Piece::LightPassantPawn),
        TurnState::LightToMove => (square.wrapping_sub(8), Piece::DarkPawn, Piece::DarkPassantPawn),
        _ => {
            return Err(ChessError::InvalidFen(
                "en-passant square on a finished game".to_owned(),
            ))
        }
    };

    if pawn_square > 63 || position.piece_at(pawn_square) != plain {
        return Err(ChessError::InvalidFen(format!(
            "no pawn matches en-passant square {en_passant_part}"
        )));
    }

    position.put_piece(pawn_square, tagged);
    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    match ch {
        'P' => Some(Piece::LightPawn),
        'N' => Some(Piece::LightKnight),
        'B' => Some(Piece::LightBishop),
        'R' => Some(Piece::LightRook),
        'Q' => Some(Piece::LightQueen),
        'K' => Some(Piece::LightKing),
        'p' => Some(Piece::DarkPawn),
        'n' => Some(Piece::DarkKnight),
        'b' => Some(Piece::DarkBishop),
        'r' => Some(Piece::DarkRook),
        'q' => Some(Piece::DarkQueen),
        'k' => Some(Piece::DarkKing),
        _ => None,
    }
}
