//! Crate root module declarations for the Quince Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_history;
    pub mod position;
}

pub mod move_generation {
    pub mod apply_move;
    pub mod check_detection;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_moves;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliding;
    pub mod terminal_state;
}

pub mod search {
    pub mod search_tree;
    pub mod static_eval;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod event_log;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod notation;
    pub mod pgn;
    pub mod render_position;
}

pub mod errors;
