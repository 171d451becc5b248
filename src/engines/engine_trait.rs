//! Player abstraction used by the turn loop.
//!
//! A player sees the current position and answers with the move it wants to
//! make. Legality is checked by the caller, not the player.

use crate::chess_errors::GameError;
use crate::game_state::chess_types::{Move, Position};

pub trait Player: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// `Ok(None)` means the player has nothing to offer, which the turn loop
    /// treats as a failure whenever legal moves exist.
    fn choose_move(&mut self, position: &Position) -> Result<Option<Move>, GameError>;

    /// Called with every move the turn loop applies, the player's own included.
    fn observe_move(&mut self, _mv: &Move) -> Result<(), GameError> {
        Ok(())
    }
}
