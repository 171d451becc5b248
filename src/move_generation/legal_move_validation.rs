//! Legality checking for a single claimed move.
//!
//! The checks run in a fixed order and stop at the first failure:
//! 1. from and to differ
//! 2. both squares are on the board
//! 3. the claimed piece and color stand on the from-square
//! 4. White made the first move of the game
//! 5. the mover did not also make the previous move
//! 6. the destination does not hold a piece of the mover's color
//! 7. the piece's movement geometry and path rules hold
//! 8. the move does not leave the mover's own king attacked
//!
//! An illegal move is an ordinary answer, never an error.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, KING_START_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, en_passant_capture_square};
use crate::move_generation::legal_move_checks::{is_square_attacked, king_square};
use crate::moves::geometry::{
    are_adjacent, is_knight_jump, same_diagonal, same_file, same_rank, squares_between,
};

pub fn is_valid_move(position: &Position, mv: Move) -> bool {
    mv.from != mv.to
        && mv.from.is_on_board()
        && mv.to.is_on_board()
        && claims_own_piece(position, mv)
        && white_moved_first(position, mv)
        && !plays_twice_in_a_row(position, mv)
        && !captures_own_piece(position, mv)
        && follows_piece_geometry(position, mv)
        && !leaves_own_king_attacked(position, mv)
}

fn claims_own_piece(position: &Position, mv: Move) -> bool {
    position.piece_at(mv.from) == Some(Piece::new(mv.piece, mv.color))
}

fn white_moved_first(position: &Position, mv: Move) -> bool {
    let opener = position.history().first().map_or(mv.color, |first| first.color);
    opener == Color::White
}

fn plays_twice_in_a_row(position: &Position, mv: Move) -> bool {
    position.last_move().is_some_and(|last| last.color == mv.color)
}

fn captures_own_piece(position: &Position, mv: Move) -> bool {
    position
        .piece_at(mv.to)
        .is_some_and(|piece| piece.color == mv.color)
}

fn follows_piece_geometry(position: &Position, mv: Move) -> bool {
    if mv.piece != PieceKind::Pawn && mv.promotion.is_some() {
        return false;
    }

    let (from, to) = (mv.from, mv.to);
    match mv.piece {
        PieceKind::Knight => is_knight_jump(from, to),
        PieceKind::Bishop => same_diagonal(from, to) && is_path_clear(position, from, to),
        PieceKind::Rook => (same_rank(from, to) || same_file(from, to)) && is_path_clear(position, from, to),
        PieceKind::Queen => {
            (same_diagonal(from, to) || same_rank(from, to) || same_file(from, to))
                && is_path_clear(position, from, to)
        }
        PieceKind::King => are_adjacent(from, to) || is_valid_castling(position, mv),
        PieceKind::Pawn => is_valid_pawn_move(position, mv),
    }
}

fn is_path_clear(position: &Position, from: Square, to: Square) -> bool {
    squares_between(from, to)
        .into_iter()
        .all(|square| !position.is_occupied(square))
}

fn is_valid_pawn_move(position: &Position, mv: Move) -> bool {
    let forward = mv.color.forward();

    match (mv.file_delta().abs(), mv.rank_delta()) {
        (0, d_rank) if d_rank == forward => !position.is_occupied(mv.to) && has_valid_promotion(mv),
        (0, d_rank) if d_rank == 2 * forward => {
            let middle = Square::new(mv.from.file, mv.from.rank + forward);
            mv.from.rank == mv.color.pawn_rank()
                && mv.promotion.is_none()
                && !position.is_occupied(middle)
                && !position.is_occupied(mv.to)
        }
        (1, d_rank) if d_rank == forward => {
            if position.is_occupied(mv.to) {
                has_valid_promotion(mv)
            } else {
                mv.promotion.is_none() && is_valid_en_passant(position, mv)
            }
        }
        _ => false,
    }
}

/// A promotion piece is required exactly when the pawn lands on the far rank.
fn has_valid_promotion(mv: Move) -> bool {
    let reaches_far_rank = mv.to.rank == mv.color.promotion_rank();
    match mv.promotion {
        Some(kind) => reaches_far_rank && kind.is_promotion_target(),
        None => !reaches_far_rank,
    }
}

fn is_valid_en_passant(position: &Position, mv: Move) -> bool {
    let passed_pawn = Piece::new(PieceKind::Pawn, mv.color.opposite());
    en_passant_capture_square(position, mv)
        .is_some_and(|victim| position.piece_at(victim) == Some(passed_pawn))
}

fn is_valid_castling(position: &Position, mv: Move) -> bool {
    let king_origin = Square::new(KING_START_FILE, mv.color.back_rank());
    if mv.from != king_origin || !mv.is_castling_shape() {
        return false;
    }

    let direction = mv.file_delta().signum();
    let rook_file = if direction > 0 {
        KINGSIDE_ROOK_FILE
    } else {
        QUEENSIDE_ROOK_FILE
    };
    let rook_origin = Square::new(rook_file, king_origin.rank);

    if position.piece_at(rook_origin) != Some(Piece::new(PieceKind::Rook, mv.color)) {
        return false;
    }
    if position.was_square_disturbed(king_origin) || position.was_square_disturbed(rook_origin) {
        return false;
    }
    if !is_path_clear(position, king_origin, rook_origin) {
        return false;
    }

    // Start, transit and destination squares of the king.
    (0..=2).all(|step| {
        let square = Square::new(king_origin.file + step * direction, king_origin.rank);
        !is_square_attacked(position, mv.color, square)
    })
}

fn leaves_own_king_attacked(position: &Position, mv: Move) -> bool {
    let Ok(next) = apply_move(position, mv) else {
        return true;
    };
    // Nothing to protect on a board without the mover's king.
    king_square(&next, mv.color).is_some_and(|king| is_square_attacked(&next, mv.color, king))
}
