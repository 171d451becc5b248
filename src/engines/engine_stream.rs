//! Remote player behind a pair of byte streams.
//!
//! Moves travel in the `move_serializer` wire format, one per line. The remote
//! side's moves are read from `input`; the opponent's moves are forwarded to
//! `output` so the remote side can follow the game.

use std::io::{BufRead, Write};

use crate::chess_errors::GameError;
use crate::engines::engine_trait::Player;
use crate::game_state::chess_types::{Color, Move, Position};
use crate::utils::move_serializer::{deserialize_move, serialize_move};

pub struct StreamPlayer<R, W> {
    color: Color,
    input: R,
    output: W,
}

impl<R: BufRead + Send, W: Write + Send> StreamPlayer<R, W> {
    pub fn new(color: Color, input: R, output: W) -> Self {
        Self { color, input, output }
    }
}

impl<R: BufRead + Send, W: Write + Send> Player for StreamPlayer<R, W> {
    fn name(&self) -> &str {
        "stream"
    }

    /// Decoded but unchecked; the turn loop rejects illegal moves.
    fn choose_move(&mut self, _position: &Position) -> Result<Option<Move>, GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(deserialize_move(&line)?))
    }

    fn observe_move(&mut self, mv: &Move) -> Result<(), GameError> {
        if mv.color == self.color {
            return Ok(());
        }
        writeln!(self.output, "{}", serialize_move(mv))?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::StreamPlayer;
    use crate::chess_errors::{GameError, NotationError};
    use crate::engines::engine_trait::Player;
    use crate::game_state::chess_types::*;

    #[test]
    fn decodes_moves_from_input() {
        let input = Cursor::new("4;6;4;4;white;pawn;empty\n");
        let mut player = StreamPlayer::new(Color::White, input, Vec::new());
        let start = Position::new_game();

        let mv = player.choose_move(&start).expect("line is well formed");
        assert_eq!(
            mv,
            Some(Move::new(Square::new(4, 6), Square::new(4, 4), PieceKind::Pawn, Color::White))
        );
        assert_eq!(player.choose_move(&start).expect("end of input is not an error"), None);
    }

    #[test]
    fn malformed_lines_are_notation_errors() {
        let mut player = StreamPlayer::new(Color::White, Cursor::new("4;6;4\n"), Vec::new());
        assert!(matches!(
            player.choose_move(&Position::new_game()),
            Err(GameError::Notation(NotationError::FieldCount { .. }))
        ));
    }

    #[test]
    fn forwards_only_the_opponents_moves() {
        let mut output = Vec::new();
        let mut player = StreamPlayer::new(Color::Black, Cursor::new(""), &mut output);
        let white_move = Move::new(Square::new(6, 7), Square::new(5, 5), PieceKind::Knight, Color::White);
        let black_move = Move::new(Square::new(6, 0), Square::new(5, 2), PieceKind::Knight, Color::Black);

        player.observe_move(&white_move).expect("write to vec");
        player.observe_move(&black_move).expect("write to vec");
        drop(player);
        assert_eq!(String::from_utf8_lossy(&output), "6;7;5;5;white;knight;empty\n");
    }
}
