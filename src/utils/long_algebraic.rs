//! Long algebraic move text (`e2e4`, `e7e8q`) read against a position.
//!
//! The piece and color of the resulting `Move` come from whatever stands on
//! the from-square; whether the move is legal is left to the rules engine.

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn long_algebraic_to_move(long_algebraic: &str, position: &Position) -> Result<Move, NotationError> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(NotationError::InvalidMove(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let piece = position
        .piece_at(from)
        .ok_or_else(|| NotationError::NoPieceOnSquare(text[0..2].to_owned()))?;

    let mut mv = Move::new(from, to, piece.kind, piece.color);
    if let Some(ch) = text.chars().nth(4) {
        mv = mv.with_promotion(char_to_promotion(ch)?);
    }

    Ok(mv)
}

pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}

fn char_to_promotion(ch: char) -> Result<PieceKind, NotationError> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(NotationError::InvalidPiece(ch.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::chess_errors::NotationError;
    use crate::game_state::chess_types::*;

    #[test]
    fn reads_piece_and_color_from_the_board() {
        let position = Position::new_game();
        let mv = long_algebraic_to_move("g1f3", &position).expect("move should parse");
        assert_eq!(mv.piece, PieceKind::Knight);
        assert_eq!(mv.color, Color::White);
        assert_eq!(mv.from, Square::new(6, 7));
        assert_eq!(mv.to, Square::new(5, 5));
        assert_eq!(move_to_long_algebraic(&mv), "g1f3");
    }

    #[test]
    fn promotion_suffix_becomes_the_promotion_piece() {
        let position = Position::from_placement("8/P7/8/8/8/8/8/k6K").expect("placement should parse");
        let mv = long_algebraic_to_move("a7a8n", &position).expect("move should parse");
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
        assert_eq!(move_to_long_algebraic(&mv), "a7a8n");
    }

    #[test]
    fn bad_text_is_reported() {
        let position = Position::new_game();
        assert!(matches!(
            long_algebraic_to_move("e4", &position),
            Err(NotationError::InvalidMove(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("e4e5", &position),
            Err(NotationError::NoPieceOnSquare(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("e2e4k", &position),
            Err(NotationError::InvalidPiece(_))
        ));
    }
}
