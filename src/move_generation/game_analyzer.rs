//! Game status classification for the side to move.

use crate::chess_errors::RulesError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;

/// Classifies `position` as Normal, Check, Checkmate or Stalemate.
///
/// Fails with `MissingKing` when the side to move has no king on the board.
pub fn analyze(position: &Position) -> Result<GameReport, RulesError> {
    let side_to_move = position.side_to_move();
    let in_check = is_king_in_check(position, side_to_move)?;
    let has_moves = !generate_legal_moves(position).is_empty();

    let (status, winner) = match (has_moves, in_check) {
        (true, false) => (GameStatus::Normal, None),
        (true, true) => (GameStatus::Check, None),
        (false, true) => (GameStatus::Checkmate, Some(side_to_move.opposite())),
        (false, false) => (GameStatus::Stalemate, None),
    };

    Ok(GameReport {
        side_to_move,
        status,
        winner,
    })
}
