//! Crate root module declarations for the snapshot chess rules engine.
//!
//! This file exposes the core rules (position model, legality, attack
//! detection, move application, generation and game analysis) together with
//! the collaborators built on top of them (players, turn loop, rendering,
//! notation and wire helpers) so binaries, tests and benches can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod geometry;
}

pub mod move_generation {
    pub mod game_analyzer;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_validation;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_console;
    pub mod engine_random;
    pub mod engine_stream;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod move_serializer;
    pub mod render_game_state;
}
