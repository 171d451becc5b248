//! Random-move player.
//!
//! Selects uniformly from legal moves. With a seed the sequence of choices is
//! reproducible, which the integration tests and `--seed` rely on.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::GameError;
use crate::engines::engine_trait::Player;
use crate::game_state::chess_types::{Move, Position};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomPlayer<G: MoveGenerator = LegalMoveGenerator> {
    move_generator: G,
    rng: Option<StdRng>,
}

impl RandomPlayer {
    /// Unseeded player drawing from the thread RNG.
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MoveGenerator> RandomPlayer<G> {
    /// Replaces the move source, keeping the RNG.
    pub fn with_generator<H: MoveGenerator>(self, move_generator: H) -> RandomPlayer<H> {
        RandomPlayer {
            move_generator,
            rng: self.rng,
        }
    }
}

impl<G: MoveGenerator> Player for RandomPlayer<G> {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, position: &Position) -> Result<Option<Move>, GameError> {
        let legal_moves = self.move_generator.generate_legal_moves(position);
        log::trace!("random player choosing among {} moves", legal_moves.len());

        let picked = match self.rng.as_mut() {
            Some(rng) => legal_moves.choose(rng),
            None => legal_moves.choose(&mut rand::rng()),
        };
        Ok(picked.copied())
    }
}
