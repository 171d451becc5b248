//! Human player typing long algebraic moves.

use std::io::{BufRead, Write};

use crate::chess_errors::GameError;
use crate::engines::engine_trait::Player;
use crate::game_state::chess_types::{Move, Position};
use crate::move_generation::legal_move_validation::is_valid_move;
use crate::utils::long_algebraic::long_algebraic_to_move;

/// Reads one move per line from `input` and prompts on `output`.
///
/// Unparsable and illegal input is reported and the prompt repeats. The player
/// gives up only when `input` is exhausted.
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead + Send, W: Write + Send> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead + Send, W: Write + Send> Player for ConsolePlayer<R, W> {
    fn name(&self) -> &str {
        "console"
    }

    fn choose_move(&mut self, position: &Position) -> Result<Option<Move>, GameError> {
        let color = position.side_to_move();
        let mut line = String::new();

        loop {
            write!(self.output, "{color} to move: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::PlayerFailed {
                    color,
                    reason: "input closed".to_owned(),
                });
            }

            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            let mv = match long_algebraic_to_move(text, position) {
                Ok(mv) => mv,
                Err(e) => {
                    log::warn!("rejected console input {text:?}: {e}");
                    writeln!(self.output, "could not read move: {e}")?;
                    continue;
                }
            };

            if mv.color != color || !is_valid_move(position, mv) {
                log::warn!("rejected illegal console move {mv}");
                writeln!(self.output, "illegal move: {mv}")?;
                continue;
            }

            return Ok(Some(mv));
        }
    }
}
