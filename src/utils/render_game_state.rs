//! Terminal-oriented ASCII board renderer.
//!
//! Each rank is one line of three-character cells between `|` separators:
//! a color letter (`w`/`b`) and a piece letter, or blanks for an empty
//! square. Rank 0 (Black's back rank) comes first.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::game_state::chess_types::*;

pub fn render_position(position: &Position) -> String {
    let mut out = String::with_capacity(8 * 34 + 1);

    for rank in 0..8 {
        out.push('|');
        for file in 0..8 {
            match position.piece_at(Square::new(file, rank)) {
                Some(piece) => {
                    out.push(' ');
                    out.push(color_letter(piece.color));
                    out.push(piece.kind.letter());
                }
                None => out.push_str("   "),
            }
            out.push('|');
        }
        out.push('\n');
    }

    out.push('\n');
    out
}

fn color_letter(color: Color) -> char {
    match color {
        Color::White => 'w',
        Color::Black => 'b',
    }
}

pub trait Renderer {
    fn draw(&mut self, position: &Position) -> io::Result<()>;
}

/// Writes the ASCII grid to any byte sink.
pub struct StreamRenderer<W: Write> {
    out: W,
}

impl<W: Write> StreamRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for StreamRenderer<W> {
    fn draw(&mut self, position: &Position) -> io::Result<()> {
        self.out.write_all(render_position(position).as_bytes())?;
        self.out.flush()
    }
}

/// Sleeps for a fixed delay before every draw of the wrapped renderer, so a
/// game between two automatic players can be followed by eye.
pub struct DelayRenderer<R: Renderer> {
    inner: R,
    delay: Duration,
}

impl<R: Renderer> DelayRenderer<R> {
    pub fn new(inner: R, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl<R: Renderer> Renderer for DelayRenderer<R> {
    fn draw(&mut self, position: &Position) -> io::Result<()> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.inner.draw(position)
    }
}
