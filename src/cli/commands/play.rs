//! Play command - a human against the engine

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    Error,
    cli::{
        config::{CliConfig, OutputFormat},
        output::{print_json, render_board},
    },
    pipeline::{BoardPrinter, MinimaxAgent, ScriptedAgent, TracingObserver, play_from},
    ports::{Agent, Observer},
    tictactoe::{Board, Mark, Move},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine")]
pub struct PlayArgs {
    /// Play these moves instead of reading from stdin, e.g. "1,1;0,2;2,0"
    #[arg(long)]
    pub moves: Option<String>,

    /// Start from this board instead of the empty one
    #[arg(long)]
    pub from: Option<String>,
}

/// Reads moves as `row,col` lines, prompting until a legal one arrives.
///
/// Prompts go to a separate writer (stderr in the CLI) so that stdout only
/// carries the game record.
pub struct HumanAgent<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_move(&mut self, board: &Board) -> crate::Result<Move> {
        loop {
            write!(self.prompt, "{}\nYour move (row,col): ", render_board(board))?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::Io {
                    operation: "read move".to_string(),
                    source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
                });
            }

            match line.trim().parse::<Move>() {
                Ok(mv) if board.is_legal(mv) => return Ok(mv),
                Ok(mv) => writeln!(self.prompt, "Cell {mv} is taken, try again.")?,
                Err(e) => writeln!(self.prompt, "{e}")?,
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}

/// Parse a `;`-separated move list
pub fn parse_moves(text: &str) -> crate::Result<Vec<Move>> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

pub fn execute(args: PlayArgs, config: &CliConfig) -> Result<()> {
    let start = match &args.from {
        Some(text) => {
            Board::from_string(text).with_context(|| format!("invalid board '{text}'"))?
        }
        None => Board::new(),
    };

    let mut human: Box<dyn Agent> = match &args.moves {
        Some(text) => Box::new(ScriptedAgent::new(
            "human",
            parse_moves(text).with_context(|| format!("invalid move list '{text}'"))?,
        )),
        None => Box::new(HumanAgent::new(io::stdin().lock(), io::stderr())),
    };
    let mut engine = MinimaxAgent::new("engine");

    let human: &mut dyn Agent = human.as_mut();
    let engine: &mut dyn Agent = &mut engine;
    let (x, o) = match config.human.mark() {
        Mark::X => (human, engine),
        Mark::O => (engine, human),
    };

    let mut tracer = TracingObserver;
    let game = match config.format {
        OutputFormat::Text => {
            let mut printer = BoardPrinter::new(io::stdout());
            let observers: &mut [&mut dyn Observer] = &mut [&mut printer, &mut tracer];
            play_from(start, x, o, observers)?
        }
        OutputFormat::Json => play_from(start, x, o, &mut [&mut tracer])?,
    };

    if config.format == OutputFormat::Json {
        print_json(&game)?;
    }

    Ok(())
}
