//! Human contestant reading moves from a line-based terminal.

use super::Contestant;
use anyhow::Result;
use perfect_play_engine::{Game, Move, minimax};
use std::io::{BufRead, Write};
use tracing::debug;

/// Human player typing moves on `input`, with prompts written to `output`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    hints: bool,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W, hints: bool) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            hints,
        }
    }
}

impl<R: BufRead, W: Write> Contestant for HumanPlayer<R, W> {
    fn choose(&mut self, game: &Game) -> Result<Move> {
        if self.hints
            && let Some(hint) = minimax(game.board())
        {
            writeln!(self.output, "Hint: {} {}", hint.label(), hint)?;
        }

        loop {
            write!(
                self.output,
                "{}, your move (1-9, row,col or a name like center): ",
                self.name
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }

            match Move::parse(&line) {
                Some(mv) => {
                    debug!(player = %self.name, %mv, "Human entered move");
                    return Ok(mv);
                }
                None => writeln!(self.output, "Could not read {:?} as a move.", line.trim())?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
