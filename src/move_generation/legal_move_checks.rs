//! Attack detection on the mailbox grid.
//!
//! A square is attacked when the nearest piece along one of the eight rays
//! belongs to the opponent and can move along that ray, or when an opposing
//! knight sits a knight's jump away.

use crate::chess_errors::RulesError;
use crate::game_state::chess_types::*;
use crate::moves::geometry::{
    are_adjacent, moves_forward, DIAGONAL_DIRECTIONS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS,
};

/// First king of `color` in scan order.
#[inline]
pub fn king_square(position: &Position, color: Color) -> Option<Square> {
    position
        .pieces(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

/// Whether the king of `color` is attacked by the other side.
pub fn is_king_in_check(position: &Position, color: Color) -> Result<bool, RulesError> {
    let king_sq = king_square(position, color).ok_or(RulesError::MissingKing(color))?;
    Ok(is_square_attacked(position, color, king_sq))
}

/// Whether any piece of `defender`'s opponent attacks `square`.
pub fn is_square_attacked(position: &Position, defender: Color, square: Square) -> bool {
    let attacker = defender.opposite();

    let rays = ORTHOGONAL_DIRECTIONS
        .iter()
        .map(|dir| (*dir, false))
        .chain(DIAGONAL_DIRECTIONS.iter().map(|dir| (*dir, true)));

    for ((d_file, d_rank), diagonal) in rays {
        let Some((from, piece)) = nearest_piece(position, square, d_file, d_rank) else {
            continue;
        };
        if piece.color == attacker && attacks_along_ray(piece.kind, attacker, from, square, diagonal) {
            return true;
        }
    }

    KNIGHT_OFFSETS.iter().any(|&(d_file, d_rank)| {
        square
            .offset(d_file, d_rank)
            .and_then(|from| position.piece_at(from))
            .is_some_and(|piece| piece.color == attacker && piece.kind == PieceKind::Knight)
    })
}

/// Nearest occupied square walking from `origin` (exclusive) in one direction.
fn nearest_piece(position: &Position, origin: Square, d_file: i8, d_rank: i8) -> Option<(Square, Piece)> {
    let mut current = origin.offset(d_file, d_rank);
    while let Some(square) = current {
        if let Some(piece) = position.piece_at(square) {
            return Some((square, piece));
        }
        current = square.offset(d_file, d_rank);
    }
    None
}

/// Whether a `kind` piece of `color` on `from`, with a clear line to
/// `target`, attacks it. `diagonal` tells which kind of ray connects them.
fn attacks_along_ray(kind: PieceKind, color: Color, from: Square, target: Square, diagonal: bool) -> bool {
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => !diagonal,
        PieceKind::Bishop => diagonal,
        PieceKind::King => are_adjacent(from, target),
        PieceKind::Pawn => diagonal && are_adjacent(from, target) && moves_forward(from, target, color),
        PieceKind::Knight => false,
    }
}
