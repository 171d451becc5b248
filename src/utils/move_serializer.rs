//! Text wire format for moves.
//!
//! One move is seven `;`-separated fields:
//! `fromFile;fromRank;toFile;toRank;color;piece;promotion`, for example
//! `4;6;4;4;white;pawn;empty`. Coordinates are grid indices, not algebraic
//! names, and are not range-checked here: an off-board move decodes fine and
//! is rejected later by the legality checker.

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::*;

pub const FIELD_SEPARATOR: char = ';';

const FIELD_COUNT: usize = 7;
const NO_PROMOTION: &str = "empty";

pub fn serialize_move(mv: &Move) -> String {
    let promotion = mv.promotion.map_or(NO_PROMOTION, PieceKind::name);
    format!(
        "{};{};{};{};{};{};{}",
        mv.from.file,
        mv.from.rank,
        mv.to.file,
        mv.to.rank,
        mv.color.name(),
        mv.piece.name(),
        promotion
    )
}

pub fn deserialize_move(text: &str) -> Result<Move, NotationError> {
    let fields: Vec<&str> = text.trim().split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(NotationError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let from = Square::new(parse_coordinate(fields[0])?, parse_coordinate(fields[1])?);
    let to = Square::new(parse_coordinate(fields[2])?, parse_coordinate(fields[3])?);
    let color = parse_color(fields[4])?;
    let piece = parse_piece(fields[5])?;

    let mv = Move::new(from, to, piece, color);
    match fields[6] {
        NO_PROMOTION => Ok(mv),
        token => Ok(mv.with_promotion(parse_piece(token)?)),
    }
}

fn parse_coordinate(token: &str) -> Result<i8, NotationError> {
    token
        .parse::<i8>()
        .map_err(|_| NotationError::InvalidCoordinate(token.to_owned()))
}

fn parse_color(token: &str) -> Result<Color, NotationError> {
    match token {
        "white" => Ok(Color::White),
        "black" => Ok(Color::Black),
        _ => Err(NotationError::InvalidColor(token.to_owned())),
    }
}

fn parse_piece(token: &str) -> Result<PieceKind, NotationError> {
    PieceKind::ALL
        .into_iter()
        .find(|kind| kind.name() == token)
        .ok_or_else(|| NotationError::InvalidPiece(token.to_owned()))
}
