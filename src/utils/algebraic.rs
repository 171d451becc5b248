//! Square conversions for algebraic coordinates.
//!
//! `a8` is `(0, 0)` and `h1` is `(7, 7)`: file letters run left to right,
//! rank digits count up from White's side of the board.

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, NotationError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new((file - b'a') as i8, (b'8' - rank) as i8))
}

/// Convert an on-board square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, NotationError> {
    if !square.is_on_board() {
        return Err(NotationError::InvalidSquare(format!(
            "({},{})",
            square.file, square.rank
        )));
    }
    Ok(square.to_string())
}
