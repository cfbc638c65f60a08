//! Move-stream loading in a PGN-like text format.
//!
//! Bracketed metadata and braced comments are skippable noise; move tokens
//! are delimited by whitespace and move-number dots; a result marker or the
//! end of input stops the load. A token the resolver rejects aborts the
//! whole load, and positions applied before the failure stay in history.

use crate::errors::ChessResult;
use crate::game_state::game_history::Game;

pub fn load_pgn(game: &mut Game, text: &str) -> ChessResult<()> {
    let movetext = strip_tags_and_comments(text);

    for raw in movetext.split_whitespace() {
        for token in raw.split('.') {
            if token.is_empty() || token.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            if is_result_token(token) {
                return Ok(());
            }
            game.play_notation(token)?;
        }
    }

    Ok(())
}

fn strip_tags_and_comments(text: &str) -> String {
    let mut out = String::new();
    let mut bracket_depth = 0usize;
    let mut brace_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '[' => bracket_depth = bracket_depth.saturating_add(1),
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            _ if bracket_depth == 0 && brace_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}
