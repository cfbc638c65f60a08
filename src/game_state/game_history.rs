//! Append-only bounded game history and the gameplay entry points.
//!
//! A `Game` owns every position it has passed through, indexed by half-move.
//! All mutation goes through the entry points below: they validate, apply,
//! re-evaluate terminal state, and append, never rewriting an existing
//! entry. There is no ambient global game; callers own their instance.

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::position::Position;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::legal_move_generator::{is_legal, legal_moves};
use crate::move_generation::terminal_state::update_state;
use crate::utils::notation::resolve_token;

#[derive(Debug, Clone)]
pub struct Game {
    positions: Vec<Position>,
    capacity: usize,
}

impl Game {
    pub const DEFAULT_CAPACITY: usize = 256;

    /// A fresh game from the standard starting position.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A fresh game holding at most `capacity` positions (the starting
    /// position counts as the first).
    pub fn with_capacity(capacity: usize) -> Self {
        Game {
            positions: vec![Position::starting()],
            capacity: capacity.max(1),
        }
    }

    /// A game continuing from an arbitrary position, for analysis setups.
    pub fn from_position(position: Position) -> Self {
        Game {
            positions: vec![position],
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Index of the current position; advances by one per applied move.
    #[inline]
    pub fn halfmove(&self) -> usize {
        self.positions.len() - 1
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn current(&self) -> &Position {
        // The constructors guarantee at least one stored position.
        &self.positions[self.positions.len() - 1]
    }

    #[inline]
    pub fn position(&self, halfmove: usize) -> Option<&Position> {
        self.positions.get(halfmove)
    }

    fn push(&mut self, position: Position) -> ChessResult<()> {
        if self.positions.len() >= self.capacity {
            return Err(ChessError::HistoryFull {
                capacity: self.capacity,
            });
        }
        self.positions.push(position);
        Ok(())
    }

    /// Play a move given as coordinates, checking it against the legal move
    /// set. On failure the history is left unchanged.
    pub fn play_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> ChessResult<()> {
        let moves = legal_moves(self.current())?;
        if !is_legal(&moves, from, to) {
            return Err(ChessError::IllegalMove { from, to });
        }

        let mut next = apply_move(self.current(), from, to, promotion);
        update_state(&mut next)?;
        self.push(next)
    }

    /// Play a move given in algebraic notation. Resolution already proves
    /// legality, so the resolved triple is applied directly.
    pub fn play_notation(&mut self, token: &str) -> ChessResult<()> {
        let resolved = resolve_token(self.current(), token)?;

        let mut next = apply_move(self.current(), resolved.from, resolved.to, resolved.promotion);
        update_state(&mut next)?;
        self.push(next)
    }

    /// Let an engine pick and play the next move.
    pub fn play_engine_move(&mut self, engine: &mut dyn Engine) -> ChessResult<()> {
        let mut next = engine.choose_move(self.current())?;
        update_state(&mut next)?;
        self.push(next)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
