//! Position transition for a single move.
//!
//! `apply_move` does not check legality. The legality checker itself calls it
//! on scratch copies to look for self-check, so it has to produce a result for
//! any move whose squares are on the board and whose from-square is occupied.

use crate::chess_errors::RulesError;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::chess_types::*;

pub fn apply_move(position: &Position, mv: Move) -> Result<Position, RulesError> {
    for square in [mv.from, mv.to] {
        if !square.is_on_board() {
            return Err(RulesError::OffBoard(square));
        }
    }

    let moved = position
        .piece_at(mv.from)
        .ok_or(RulesError::EmptySourceSquare(mv.from))?;

    // Decided on the position before the move: the captured pawn's square is
    // only recognisable while the destination is still empty.
    let en_passant_victim = en_passant_capture_square(position, mv);

    let mut next = position.clone();
    next.set(mv.from, None);
    next.set(mv.to, Some(moved));

    if mv.is_castling_shape() && moved.kind == PieceKind::King {
        move_castling_rook(&mut next, mv);
    }

    if let Some(promotion) = promotion_piece(mv, moved) {
        next.set(mv.to, Some(Piece::new(promotion, mv.color)));
    }

    if let Some(victim) = en_passant_victim {
        next.set(victim, None);
    }

    next.push_history(mv);
    Ok(next)
}

/// Square of the pawn removed by `mv` when it is an en passant capture.
///
/// That is a pawn stepping diagonally onto an empty square right after the
/// opponent double-pushed a pawn to the square beside it on the target file.
pub fn en_passant_capture_square(position: &Position, mv: Move) -> Option<Square> {
    if mv.piece != PieceKind::Pawn || mv.file_delta().abs() != 1 || position.is_occupied(mv.to) {
        return None;
    }

    let last = position.last_move()?;
    let victim = Square::new(mv.to.file, mv.from.rank);
    let passed = last.color != mv.color && last.is_double_pawn_push() && last.to == victim;
    passed.then_some(victim)
}

fn move_castling_rook(next: &mut Position, mv: Move) {
    let direction = mv.file_delta().signum();
    let rook_file = if direction > 0 {
        KINGSIDE_ROOK_FILE
    } else {
        QUEENSIDE_ROOK_FILE
    };
    let rook_from = Square::new(rook_file, mv.from.rank);
    let rook_to = Square::new(mv.to.file - direction, mv.to.rank);

    if let Some(rook) = next.piece_at(rook_from) {
        next.set(rook_from, None);
        next.set(rook_to, Some(rook));
    }
}

fn promotion_piece(mv: Move, moved: Piece) -> Option<PieceKind> {
    if moved.kind != PieceKind::Pawn || mv.to.rank != mv.color.promotion_rank() {
        return None;
    }
    mv.promotion
}
