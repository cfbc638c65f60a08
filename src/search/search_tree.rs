//! Fixed-depth minimax over an explicitly built position tree.
//!
//! A tree is built fresh for every engine move request and dropped wholesale
//! after the chosen child is extracted. There is no pruning and no caching;
//! the depth constant is the only thing keeping the tree small.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::TurnState;
use crate::game_state::position::Position;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::static_eval::static_eval;

/// Nodes at depths up to and including this constant are expanded, so the
/// deepest leaves sit one ply further down.
pub const SEARCH_DEPTH: usize = 2;

pub struct SearchNode {
    pub position: Position,
    pub evaluation: i32,
    pub propagated: bool,
    pub children: Vec<SearchNode>,
}

impl SearchNode {
    fn new(position: Position) -> Self {
        let evaluation = static_eval(&position);
        SearchNode {
            position,
            evaluation,
            propagated: false,
            children: Vec::new(),
        }
    }
}

fn expand(node: &mut SearchNode, depth: usize) -> ChessResult<()> {
    if depth > SEARCH_DEPTH {
        return Ok(());
    }

    let moves = legal_moves(&node.position)?;
    node.children = moves
        .iter()
        // TODO: branch per promotion piece instead of leaving the pawn
        // unpromoted in child positions.
        .map(|mv| SearchNode::new(apply_move(&node.position, mv.from, mv.to, None)))
        .collect();

    for child in &mut node.children {
        expand(child, depth + 1)?;
    }

    Ok(())
}

/// Backward induction: a node takes the best child evaluation for its side
/// to move; childless nodes keep their static evaluation.
fn propagate(node: &mut SearchNode) {
    if node.propagated {
        return;
    }
    if node.children.is_empty() {
        node.propagated = true;
        return;
    }

    for child in &mut node.children {
        propagate(child);
    }

    let maximizing = node.position.turn == TurnState::LightToMove;
    let mut best = node.children[0].evaluation;
    for child in &node.children[1..] {
        if (maximizing && child.evaluation > best) || (!maximizing && child.evaluation < best) {
            best = child.evaluation;
        }
    }

    node.evaluation = best;
    node.propagated = true;
}

/// Build, score, and pick the best root child for the side to move. Ties go
/// to the first child in generation order, which makes the choice
/// deterministic for identical inputs.
pub fn choose_move(position: &Position) -> ChessResult<Position> {
    if position.turn.is_finished() {
        return Err(ChessError::GameFinished);
    }

    let mut root = SearchNode::new(position.clone());
    expand(&mut root, 0)?;
    propagate(&mut root);

    let maximizing = root.position.turn == TurnState::LightToMove;
    let mut best_index: Option<usize> = None;
    let mut best_eval = 0;

    for (index, child) in root.children.iter().enumerate() {
        let better = match best_index {
            None => true,
            Some(_) if maximizing => child.evaluation > best_eval,
            Some(_) => child.evaluation < best_eval,
        };
        if better {
            best_index = Some(index);
            best_eval = child.evaluation;
        }
    }

    match best_index {
        Some(index) => Ok(root.children.swap_remove(index).position),
        None => Err(ChessError::NoLegalMoves),
    }
}
