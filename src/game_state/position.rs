//! Immutable board position: an 8x8 grid of optional pieces plus the ordered
//! history of moves that produced it.
//!
//! Nothing in `Position` can be changed through a shared reference. Every
//! transition (see `legal_move_apply`) works on an owned copy and returns a
//! fresh value, so callers can hold and query a position from any number of
//! threads without synchronization.

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::*;
use crate::utils::fen_parser::parse_placement;

/// Grid indexed as `[rank][file]`.
pub type Board = [[Option<Piece>; 8]; 8];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    history: Vec<Move>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Standard initial setup with an empty history.
    pub fn new_game() -> Self {
        let mut board: Board = [[None; 8]; 8];
        for color in [Color::White, Color::Black] {
            board[color.back_rank() as usize] = back_rank_row(color);
            board[color.pawn_rank() as usize] = [Some(Piece::new(PieceKind::Pawn, color)); 8];
        }
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Board with no pieces and no history.
    pub fn empty() -> Self {
        Self {
            board: [[None; 8]; 8],
            history: Vec::new(),
        }
    }

    /// Takes ownership of a caller-built grid and history.
    pub fn from_parts(board: Board, history: Vec<Move>) -> Self {
        Self { board, history }
    }

    /// Position from a FEN piece-placement field with an empty history.
    pub fn from_placement(placement: &str) -> Result<Self, NotationError> {
        Ok(Self::from_parts(parse_placement(placement)?, Vec::new()))
    }

    /// Copy of the grid.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Piece on `square`; off-board squares read as empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.board[square.rank as usize][square.file as usize]
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Opposite of the last mover, White on an empty history.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.history
            .last()
            .map_or(Color::White, |last| last.color.opposite())
    }

    /// True when any recorded move started or ended on `square`, i.e. the
    /// piece originally standing there has moved or been captured.
    pub fn was_square_disturbed(&self, square: Square) -> bool {
        self.history
            .iter()
            .any(|mv| mv.from == square || mv.to == square)
    }

    /// Occupied squares of `color` in scan order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.color == color)
                .map(|piece| (square, piece))
        })
    }

    /// New position with `square` set to `piece`. Off-board squares are ignored.
    pub fn with_piece(&self, square: Square, piece: Option<Piece>) -> Self {
        let mut next = self.clone();
        next.set(square, piece);
        next
    }

    /// New position with the same grid and the given history.
    pub fn with_history(&self, history: Vec<Move>) -> Self {
        Self::from_parts(self.board, history)
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_on_board() {
            self.board[square.rank as usize][square.file as usize] = piece;
        }
    }

    pub(crate) fn push_history(&mut self, mv: Move) {
        self.history.push(mv);
    }
}

fn back_rank_row(color: Color) -> [Option<Piece>; 8] {
    [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ]
    .map(|kind| Some(Piece::new(kind, color)))
}
