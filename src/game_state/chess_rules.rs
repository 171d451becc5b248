//! Canonical chess-rule constants and the rules facade.
//!
//! Static literals for the standard setup and the fixed squares that castling
//! logic refers to, plus `RulesEngine`, which bundles the core operations.

use crate::chess_errors::RulesError;
use crate::game_state::chess_types::{GameReport, Move, Position};
use crate::move_generation::game_analyzer::analyze;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::legal_move_validation::is_valid_move;

/// Standard starting placement (FEN board field, rank 0 first).
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// File both kings start on.
pub const KING_START_FILE: i8 = 4;

/// Rook corner on the queen side.
pub const QUEENSIDE_ROOK_FILE: i8 = 0;

/// Rook corner on the king side.
pub const KINGSIDE_ROOK_FILE: i8 = 7;

/// Object-safe bundle of the four rule operations, for collaborators that
/// want to swap rule sets (or stub them out in tests).
pub trait RulesEngine: Send + Sync {
    fn generate_moves(&self, position: &Position) -> Vec<Move>;
    fn is_valid_move(&self, position: &Position, mv: Move) -> bool;
    fn apply_move(&self, position: &Position, mv: Move) -> Result<Position, RulesError>;
    fn analyze_board(&self, position: &Position) -> Result<GameReport, RulesError>;
}

/// Standard chess rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl RulesEngine for StandardRules {
    fn generate_moves(&self, position: &Position) -> Vec<Move> {
        generate_legal_moves(position)
    }

    fn is_valid_move(&self, position: &Position, mv: Move) -> bool {
        is_valid_move(position, mv)
    }

    fn apply_move(&self, position: &Position, mv: Move) -> Result<Position, RulesError> {
        apply_move(position, mv)
    }

    fn analyze_board(&self, position: &Position) -> Result<GameReport, RulesError> {
        analyze(position)
    }
}
