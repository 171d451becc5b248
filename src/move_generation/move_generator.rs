//! Move generation interface shared by the rules facade, players and perft.

use crate::game_state::chess_types::{Move, Position};

pub trait MoveGenerator: Send + Sync {
    /// Every legal move for the side to move, in board-scan order.
    fn generate_legal_moves(&self, position: &Position) -> Vec<Move>;
}

/// Generator that never produces a move. Useful as a stand-in for players
/// and harness tests that must not depend on real chess rules.
pub struct NullMoveGenerator;

impl MoveGenerator for NullMoveGenerator {
    fn generate_legal_moves(&self, _position: &Position) -> Vec<Move> {
        Vec::new()
    }
}
