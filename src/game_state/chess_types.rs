//! Value types shared by every rules component.
//!
//! Squares use signed coordinates so that a malformed move (for example one
//! decoded from the wire) can still be represented and then rejected by the
//! legality checker. Rank 0 is Black's back rank, rank 7 is White's.

use std::fmt;

pub use crate::game_state::position::Position;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank the pieces of this side start on.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        self.opposite().back_rank()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Pieces a pawn may turn into, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Upper-case English letter (`N` for knight).
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Board coordinate. Only `0..8` on both axes is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }

    /// Square shifted by `(d_file, d_rank)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        let next = Square::new(self.file.checked_add(d_file)?, self.rank.checked_add(d_rank)?);
        next.is_on_board().then_some(next)
    }

    /// All 64 squares in scan order: rank 0 first, files left to right.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|rank| (0..8i8).map(move |file| Square::new(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = char::from(b'a' + self.file as u8);
            let rank = char::from(b'8' - self.rank as u8);
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

/// A move as claimed by its caller: the mover's piece and color are part of
/// the claim and get checked against the board, not derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub color: Color,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, piece: PieceKind, color: Color) -> Self {
        Self {
            from,
            to,
            piece,
            color,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(self, promotion: PieceKind) -> Self {
        Self {
            promotion: Some(promotion),
            ..self
        }
    }

    #[inline]
    pub fn file_delta(&self) -> i8 {
        self.to.file - self.from.file
    }

    #[inline]
    pub fn rank_delta(&self) -> i8 {
        self.to.rank - self.from.rank
    }

    /// King shifted two files along its rank.
    #[inline]
    pub fn is_castling_shape(&self) -> bool {
        self.piece == PieceKind::King && self.rank_delta() == 0 && self.file_delta().abs() == 2
    }

    /// Pawn advanced two ranks along its file.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece == PieceKind::Pawn && self.file_delta() == 0 && self.rank_delta().abs() == 2
    }
}

/// Long algebraic form, e.g. `e2e4` or `a7a8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

/// Classification of a position for the side to move.
///
/// `Draw` is reserved: no rule in this crate produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

/// Result of analysing a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameReport {
    pub side_to_move: Color,
    pub status: GameStatus,
    /// Present only for checkmate.
    pub winner: Option<Color>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_names_follow_white_at_the_bottom() {
        assert_eq!(Square::new(4, 7).to_string(), "e1");
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 4).to_string(), "h4");
        assert_eq!(Square::new(8, 0).to_string(), "(8,0)");
    }

    #[test]
    fn offset_stops_at_the_edge() {
        assert_eq!(Square::new(0, 0).offset(-1, 0), None);
        assert_eq!(Square::new(6, 7).offset(1, -2), Some(Square::new(7, 5)));
        assert_eq!(Square::new(7, 7).offset(1, 0), None);
    }

    #[test]
    fn scan_order_is_rank_major() {
        let squares: Vec<Square> = Square::all().take(9).collect();
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[7], Square::new(7, 0));
        assert_eq!(squares[8], Square::new(0, 1));
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn move_display_is_long_algebraic() {
        let mv = Move::new(Square::new(0, 1), Square::new(0, 0), PieceKind::Pawn, Color::White)
            .with_promotion(PieceKind::Queen);
        assert_eq!(mv.to_string(), "a7a8q");
    }

    #[test]
    fn pawn_directions_point_at_the_opponent() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::White.promotion_rank(), 0);
        assert_eq!(Color::Black.promotion_rank(), 7);
        assert_eq!(Color::Black.pawn_rank(), 1);
    }
}
