//! FEN piece-placement parser.
//!
//! Only the board field is read: side to move, castling eligibility and en
//! passant are all derived from move history in this crate, so those FEN
//! fields have nothing to populate. The first FEN rank is rank 0 (Black's
//! back rank), matching the grid layout.

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::*;
use crate::game_state::position::Board;

pub fn parse_placement(placement: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err(NotationError::InvalidPlacement(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board: Board = [[None; 8]; 8];
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(NotationError::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                NotationError::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;
            if file >= 8 {
                return Err(NotationError::InvalidPlacement(format!(
                    "rank {rank} has too many files"
                )));
            }

            board[rank][file] = Some(piece);
            file += 1;
        }

        if file != 8 {
            return Err(NotationError::InvalidPlacement(format!(
                "rank {rank} does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
