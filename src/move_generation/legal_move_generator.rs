//! Full legal move generation pipeline.
//!
//! Produces geometric candidates for every piece of the side to move, then
//! keeps the ones the legality checker accepts. Candidates ignore blockers
//! and self-check; the checker is the single authority on both.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_validation::is_valid_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::geometry::{DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> Vec<Move> {
        generate_legal_moves(position)
    }
}

pub fn generate_legal_moves(position: &Position) -> Vec<Move> {
    let color = position.side_to_move();
    let mut candidates = Vec::<Move>::with_capacity(128);

    for (from, piece) in position.pieces(color) {
        push_candidates(from, piece, &mut candidates);
    }

    let legal: Vec<Move> = candidates
        .into_iter()
        .filter(|mv| is_valid_move(position, *mv))
        .collect();

    log::trace!(
        "generated {} legal moves for {} at ply {}",
        legal.len(),
        color,
        position.history().len()
    );
    legal
}

/// Geometric candidates for one piece, appended to `out`.
pub fn push_candidates(from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Knight => push_steps(from, piece, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => push_rays(from, piece, &DIAGONAL_DIRECTIONS, out),
        PieceKind::Rook => push_rays(from, piece, &ORTHOGONAL_DIRECTIONS, out),
        PieceKind::Queen => {
            push_rays(from, piece, &ORTHOGONAL_DIRECTIONS, out);
            push_rays(from, piece, &DIAGONAL_DIRECTIONS, out);
        }
        PieceKind::King => {
            push_steps(from, piece, &KING_OFFSETS, out);
            push_steps(from, piece, &[(2, 0), (-2, 0)], out);
        }
        PieceKind::Pawn => push_pawn_candidates(from, piece, out),
    }
}

fn push_steps(from: Square, piece: Piece, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(d_file, d_rank) in offsets {
        if let Some(to) = from.offset(d_file, d_rank) {
            out.push(Move::new(from, to, piece.kind, piece.color));
        }
    }
}

/// Every square along each direction up to the board edge.
fn push_rays(from: Square, piece: Piece, directions: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(d_file, d_rank) in directions {
        let mut current = from.offset(d_file, d_rank);
        while let Some(to) = current {
            out.push(Move::new(from, to, piece.kind, piece.color));
            current = to.offset(d_file, d_rank);
        }
    }
}

fn push_pawn_candidates(from: Square, piece: Piece, out: &mut Vec<Move>) {
    let forward = piece.color.forward();
    let targets = [
        from.offset(0, forward),
        from.offset(0, 2 * forward),
        from.offset(-1, forward),
        from.offset(1, forward),
    ];

    for to in targets.into_iter().flatten() {
        let mv = Move::new(from, to, piece.kind, piece.color);
        if to.rank == piece.color.promotion_rank() {
            out.extend(PieceKind::PROMOTIONS.map(|kind| mv.with_promotion(kind)));
        } else {
            out.push(mv);
        }
    }
}
