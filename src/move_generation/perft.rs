use std::sync::Arc;
use std::thread;

use crate::chess_errors::RulesError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, en_passant_capture_square};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, position: &Position, depth: u8) -> Result<PerftCounts, RulesError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(position) {
        perft_recurse(generator, position, mv, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Same counts as `perft`, with one worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    position: &Position,
    depth: u8,
) -> Result<PerftCounts, RulesError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(position);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let root = position.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &root, mv, depth, 1, &mut local);
            result.map(|()| local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(local) => total.merge(local?),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    parent: &Position,
    mv: Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), RulesError> {
    let next = apply_move(parent, mv)?;

    if current_depth < search_depth {
        for child in generator.generate_legal_moves(&next) {
            perft_recurse(generator, &next, child, search_depth, current_depth + 1, counts)?;
        }
        return Ok(());
    }

    counts.nodes += 1;

    let is_en_passant = en_passant_capture_square(parent, mv).is_some();
    if parent.is_occupied(mv.to) || is_en_passant {
        counts.captures += 1;
    }
    if is_en_passant {
        counts.en_passant += 1;
    }
    if mv.piece == PieceKind::King && mv.is_castling_shape() {
        counts.castles += 1;
    }
    if mv.promotion.is_some() {
        counts.promotions += 1;
    }

    // A side without a king can still be counted; it is simply never in check.
    if is_king_in_check(&next, mv.color.opposite()).unwrap_or(false) {
        counts.checks += 1;
        if generator.generate_legal_moves(&next).is_empty() {
            counts.checkmates += 1;
        }
    }

    Ok(())
}
