//! Pure relations between two squares. No board access.

use crate::game_state::chess_types::{Color, Square};

/// Rook ray directions as `(d_file, d_rank)`.
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Bishop ray directions as `(d_file, d_rank)`.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (-1, -1), (1, 1), (-1, 1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

#[inline]
pub fn same_rank(a: Square, b: Square) -> bool {
    a.rank == b.rank
}

#[inline]
pub fn same_file(a: Square, b: Square) -> bool {
    a.file == b.file
}

/// Equal coordinate sum or equal coordinate difference.
#[inline]
pub fn same_diagonal(a: Square, b: Square) -> bool {
    a.file - a.rank == b.file - b.rank || a.file + a.rank == b.file + b.rank
}

/// One king step apart (the squares must differ).
#[inline]
pub fn are_adjacent(a: Square, b: Square) -> bool {
    let d_file = (b.file - a.file).abs();
    let d_rank = (b.rank - a.rank).abs();
    a != b && d_file <= 1 && d_rank <= 1
}

/// Squared euclidean distance of five: the knight's L.
#[inline]
pub fn is_knight_jump(a: Square, b: Square) -> bool {
    let d_file = i16::from(b.file - a.file);
    let d_rank = i16::from(b.rank - a.rank);
    d_file * d_file + d_rank * d_rank == 5
}

/// Unit step `(d_file, d_rank)` from `a` toward `b`, each component in `-1..=1`.
#[inline]
pub fn step_direction(a: Square, b: Square) -> (i8, i8) {
    ((b.file - a.file).signum(), (b.rank - a.rank).signum())
}

/// `to` lies toward the opponent's back rank as seen from `from`.
#[inline]
pub fn moves_forward(from: Square, to: Square, color: Color) -> bool {
    (to.rank - from.rank).signum() == color.forward()
}

/// Squares strictly between `a` and `b` along a shared rank, file or
/// diagonal. Empty for squares that are not aligned or are adjacent.
pub fn squares_between(a: Square, b: Square) -> Vec<Square> {
    let aligned = same_rank(a, b) || same_file(a, b) || same_diagonal(a, b);
    if a == b || !aligned {
        return Vec::new();
    }

    let (d_file, d_rank) = step_direction(a, b);
    let mut out = Vec::new();
    let mut current = Square::new(a.file + d_file, a.rank + d_rank);
    while current != b {
        out.push(current);
        current = Square::new(current.file + d_file, current.rank + d_rank);
    }
    out
}
