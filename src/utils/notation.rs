//! Algebraic move-token resolution.
//!
//! Resolves a single token (`e4`, `Nf3`, `exd5`, `Rad1`, `e8Q`, `O-O`)
//! against the current position's legal moves. Resolution is pure; the game
//! entry points apply the resolved triple. When rank/file hints still leave
//! several candidates, the first in ascending-square order plays.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::{is_legal, legal_moves};
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

pub fn resolve_token(position: &Position, token: &str) -> ChessResult<ResolvedMove> {
    let color = position
        .side_to_move()
        .ok_or(ChessError::GameFinished)?;

    // Castling aliases rewrite to the equivalent king move.
    let token_ref: &str = match (token, color) {
        ("O-O" | "0-0", Color::Light) => "Kg1",
        ("O-O" | "0-0", Color::Dark) => "Kg8",
        ("O-O-O" | "0-0-0", Color::Light) => "Kc1",
        ("O-O-O" | "0-0-0", Color::Dark) => "Kc8",
        _ => token,
    };
    let bytes = token_ref.as_bytes();
    if bytes.is_empty() {
        return Err(ChessError::InvalidNotation(token.to_owned()));
    }

    let piece = if bytes[0].is_ascii_uppercase() {
        letter_to_piece(char::from(bytes[0]), color)
            .ok_or_else(|| ChessError::InvalidNotation(token.to_owned()))?
    } else {
        match color {
            Color::Light => Piece::LightPawn,
            Color::Dark => Piece::DarkPawn,
        }
    };

    // The destination starts at the last lowercase letter; uppercase letters
    // behind it name the promotion piece.
    let mut promotion_letter = None;
    let mut destination_index = None;
    for index in (0..bytes.len()).rev() {
        let ch = char::from(bytes[index]);
        if ch.is_ascii_uppercase() {
            promotion_letter = Some(ch);
        }
        if ch.is_ascii_lowercase() {
            destination_index = Some(index);
            break;
        }
    }
    let destination_index =
        destination_index.ok_or_else(|| ChessError::InvalidNotation(token.to_owned()))?;
    if destination_index + 2 > bytes.len() {
        return Err(ChessError::InvalidNotation(token.to_owned()));
    }
    let to = algebraic_to_square(&token_ref[destination_index..destination_index + 2])
        .map_err(|_| ChessError::InvalidNotation(token.to_owned()))?;

    // Anything before the destination disambiguates the origin.
    let mut file_hint = None;
    let mut rank_hint = None;
    for &byte in &bytes[..destination_index] {
        let ch = char::from(byte);
        if ch.is_ascii_lowercase() && ch != 'x' {
            file_hint = Some(byte - b'a');
        }
        if ch.is_ascii_digit() {
            rank_hint = Some(byte - b'1');
        }
    }

    let promotion = promotion_letter.and_then(|ch| letter_to_piece(ch, color));

    let moves = legal_moves(position)?;
    let mut candidates = Vec::new();
    for square in 0..64u8 {
        if position.piece_at(square).untagged() == piece && is_legal(&moves, square, to) {
            candidates.push(square);
        }
    }

    // A unique candidate plays regardless of hints.
    if candidates.len() == 1 {
        return Ok(ResolvedMove {
            from: candidates[0],
            to,
            promotion,
        });
    }

    for &from in &candidates {
        if let Some(file) = file_hint {
            if from % 8 != file {
                continue;
            }
        }
        if let Some(rank) = rank_hint {
            if from / 8 != rank {
                continue;
            }
        }
        return Ok(ResolvedMove {
            from,
            to,
            promotion,
        });
    }

    Err(ChessError::InvalidNotation(token.to_owned()))
}

fn letter_to_piece(letter: char, color: Color) -> Option<Piece> {
    match (letter, color) {
        ('N', Color::Light) => Some(Piece::LightKnight),
        ('B', Color::Light) => Some(Piece::LightBishop),
        ('R', Color::Light) => Some(Piece::LightRook),
        ('Q', Color::Light) => Some(Piece::LightQueen),
        ('K', Color::Light) => Some(Piece::LightKing),
        ('N', Color::Dark) => Some(Piece::DarkKnight),
        ('B', Color::Dark) => Some(Piece::DarkBishop),
        ('R', Color::Dark) => Some(Piece::DarkRook),
        ('Q', Color::Dark) => Some(Piece::DarkQueen),
        ('K', Color::Dark) => Some(Piece::DarkKing),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_token, ResolvedMove};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::Piece;
    use crate::game_state::position::Position;

    #[test]
    fn pawn_pushes_resolve_without_a_piece_letter() {
        let resolved =
            resolve_token(&Position::starting(), "e4").expect("e4 should resolve");
        assert_eq!(
            resolved,
            ResolvedMove {
                from: 12,
                to: 28,
                promotion: None
            }
        );
    }

    #[test]
    fn piece_letters_pick_the_piece_kind() {
        let resolved =
            resolve_token(&Position::starting(), "Nf3").expect("Nf3 should resolve");
        assert_eq!(resolved.from, 6);
        assert_eq!(resolved.to, 21);
    }

    #[test]
    fn capture_markers_carry_a_file_hint() {
        let position = Position::from_fen(
            "rnbqkbnr/pppp1ppp/8/4p3/3P4/8/PPP1PPPP/RNBQKBNR w KQkq - 0 1",
        )
        .expect("FEN should parse");
        let resolved = resolve_token(&position, "dxe5").expect("dxe5 should resolve");
        assert_eq!(resolved.from, 27);
        assert_eq!(resolved.to, 36);
    }

    #[test]
    fn file_hints_disambiguate_doubled_rooks() {
        let position = Position::from_fen("4k3/8/8/8/8/8/4K3/R6R w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(
            resolve_token(&position, "Rad1").expect("Rad1 should resolve").from,
            0
        );
        assert_eq!(
            resolve_token(&position, "Rhd1").expect("Rhd1 should resolve").from,
            7
        );
    }

    #[test]
    fn ambiguous_tokens_play_the_first_candidate() {
        let position = Position::from_fen("4k3/8/8/8/8/8/4K3/R6R w - - 0 1")
            .expect("FEN should parse");
        let resolved = resolve_token(&position, "Rd1").expect("Rd1 should resolve");
        assert_eq!(resolved.from, 0);
    }

    #[test]
    fn promotion_letters_resolve_to_the_mover_color() {
        let position = Position::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1")
            .expect("FEN should parse");
        let resolved = resolve_token(&position, "a8Q").expect("a8Q should resolve");
        assert_eq!(
            resolved,
            ResolvedMove {
                from: 48,
                to: 56,
                promotion: Some(Piece::LightQueen)
            }
        );
    }

    #[test]
    fn castling_aliases_resolve_to_king_moves() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let kingside = resolve_token(&position, "O-O").expect("O-O should resolve");
        assert_eq!((kingside.from, kingside.to), (4, 6));
        let queenside = resolve_token(&position, "0-0-0").expect("0-0-0 should resolve");
        assert_eq!((queenside.from, queenside.to), (4, 2));
    }

    #[test]
    fn unresolvable_tokens_are_reported() {
        let position = Position::starting();
        for bad in ["e5", "Ke3", "Qd4", "zz", "9"] {
            assert_eq!(
                resolve_token(&position, bad),
                Err(ChessError::InvalidNotation(bad.to_owned()))
            );
        }
    }

    #[test]
    fn check_suffixes_are_tolerated() {
        let resolved =
            resolve_token(&Position::starting(), "e4+").expect("suffix should be ignored");
        assert_eq!(resolved.to, 28);
    }
}
