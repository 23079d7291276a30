//! Observer implementations for matches

use std::io::Write;

use tracing::info;

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, Game, Outcome, Ply},
};

/// Prints the board after every move
pub struct BoardPrinter<W: Write> {
    out: W,
}

impl<W: Write> BoardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for BoardPrinter<W> {
    fn on_game_start(&mut self, board: &Board) -> Result<()> {
        writeln!(self.out, "{board}\n")?;
        Ok(())
    }

    fn on_move(&mut self, ply: &Ply, board: &Board) -> Result<()> {
        writeln!(self.out, "{} plays {}", ply.mark, ply.mv)?;
        writeln!(self.out, "{board}\n")?;
        Ok(())
    }

    fn on_game_end(&mut self, game: &Game) -> Result<()> {
        match game.outcome {
            Some(Outcome::Win(mark)) => writeln!(self.out, "{mark} wins")?,
            Some(Outcome::Draw) => writeln!(self.out, "Draw")?,
            None => {}
        }
        Ok(())
    }
}

/// Emits one `tracing` event per move
#[derive(Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_move(&mut self, ply: &Ply, board: &Board) -> Result<()> {
        info!(mark = %ply.mark, mv = %ply.mv, board = %board.encode(), "move played");
        Ok(())
    }
}

/// Keeps every board seen during a match
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub boards: Vec<Board>,
    pub outcome: Option<Outcome>,
}

impl Observer for RecordingObserver {
    fn on_game_start(&mut self, board: &Board) -> Result<()> {
        self.boards.clear();
        self.boards.push(*board);
        Ok(())
    }

    fn on_move(&mut self, _ply: &Ply, board: &Board) -> Result<()> {
        self.boards.push(*board);
        Ok(())
    }

    fn on_game_end(&mut self, game: &Game) -> Result<()> {
        self.outcome = game.outcome;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pipeline::{ScriptedAgent, play_match},
        tictactoe::Move,
    };

    #[test]
    fn test_board_printer_output() {
        let mut x = ScriptedAgent::new("x", [0, 1, 2].map(|i| Move::from_index(i).unwrap()));
        let mut o = ScriptedAgent::new("o", [3, 4].map(|i| Move::from_index(i).unwrap()));
        let mut printer = BoardPrinter::new(Vec::new());
        play_match(&mut x, &mut o, &mut [&mut printer]).unwrap();

        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert!(text.starts_with("...\n...\n...\n"));
        assert!(text.contains("O plays (1, 1)"));
        assert!(text.contains("XXX\nOO.\n..."));
        assert!(text.trim_end().ends_with("X wins"));
    }
}
