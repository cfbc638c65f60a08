//! Checkmate and stalemate classification.
//!
//! Must be invoked after every applied move; the applicator itself never
//! inspects terminal state.

use crate::errors::ChessResult;
use crate::game_state::chess_types::TurnState;
use crate::game_state::position::Position;
use crate::move_generation::check_detection::in_check;
use crate::move_generation::legal_move_generator::legal_moves;

/// Leave an in-progress position untouched; with no legal moves left, a
/// checked mover loses and an unchecked mover is stalemated.
pub fn update_state(position: &mut Position) -> ChessResult<()> {
    let mover_in_check = in_check(position);
    let remaining = legal_moves(position)?;

    if remaining.is_empty() {
        position.turn = match position.turn {
            TurnState::LightToMove => {
                if mover_in_check {
                    TurnState::DarkWon
                } else {
                    TurnState::Drawn
                }
            }
            TurnState::DarkToMove => {
                if mover_in_check {
                    TurnState::LightWon
                } else {
                    TurnState::Drawn
                }
            }
            finished => finished,
        };
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::update_state;
    use crate::game_state::chess_types::TurnState;
    use crate::game_state::position::Position;

    #[test]
    fn in_progress_positions_are_left_unchanged() {
        let mut position = Position::starting();
        update_state(&mut position).expect("update should succeed");
        assert_eq!(position.turn, TurnState::LightToMove);
    }

    #[test]
    fn back_rank_mate_is_a_win_for_the_attacker() {
        let before = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1")
            .expect("FEN should parse");
        let mut position = crate::move_generation::apply_move::apply_move(&before, 0, 56, None);
        // After Ra8 it is dark to move with no reply.
        update_state(&mut position).expect("update should succeed");
        assert_eq!(position.turn, TurnState::LightWon);
    }

    #[test]
    fn stalemate_is_a_draw_not_a_win() {
        // Dark king in the corner, no moves, not in check.
        let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("FEN should parse");
        update_state(&mut position).expect("update should succeed");
        assert_eq!(position.turn, TurnState::Drawn);
    }
}
