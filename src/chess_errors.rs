//! Errors used throughout the rules engine.
//!
//! Legality is never an error: `is_valid_move` answers with a `bool`. The
//! enums here cover the remaining failure modes:
//! - `RulesError`: a caller broke a structural precondition of the core
//!   (applying a move from an empty square, asking for a king that is not on
//!   the board). These indicate a bug in the caller, not bad user input.
//! - `NotationError`: text crossing the wire or notation boundary could not be
//!   turned into a well-formed value. Suitable for showing to end users.
//! - `GameError`: failures of the turn loop that drives players.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Move, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// A move referenced a square outside the board.
    #[error("square {0} is off the board")]
    OffBoard(Square),

    /// `apply_move` was asked to move a piece that is not there.
    #[error("no piece on from-square {0}")]
    EmptySourceSquare(Square),

    /// The position has no king of the given color.
    #[error("position has no {0} king")]
    MissingKing(Color),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("invalid long algebraic move: {0}")]
    InvalidMove(String),

    #[error("no piece on from-square {0}")]
    NoPieceOnSquare(String),

    #[error("expected {expected} fields in move record, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid color token: {0}")]
    InvalidColor(String),

    #[error("invalid piece token: {0}")]
    InvalidPiece(String),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    /// A player produced a move the rules reject.
    #[error("{color} player attempted illegal move {mv}")]
    IllegalMove { color: Color, mv: Move },

    /// A player could not produce a move although legal moves exist.
    #[error("{color} player failed to move: {reason}")]
    PlayerFailed { color: Color, reason: String },

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
