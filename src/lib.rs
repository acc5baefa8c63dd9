//! Crate root module declarations for the Cube Chess rules engine.
//!
//! Chess played on the six 8x8 faces of a cube whose row and column slices
//! can be twisted like a Rubik's cube. This file exposes the subsystems
//! (board state, cube topology, movement rules, move generation, engines,
//! turn sequencing, and utility helpers) so binaries, tests, and hosts can
//! import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod topology {
    pub mod face_adjacency;
    pub mod slice_rotation;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_rules;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod controller {
    pub mod turn_controller;
}

pub mod utils {
    pub mod render_game_state;
    pub mod square_notation;
}
