//! Selfplay command - the engine against itself

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::{CliConfig, OutputFormat},
        output::print_json,
    },
    pipeline::{BoardPrinter, MinimaxAgent, TracingObserver, play_from},
    ports::Observer,
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Let the engine play both sides")]
pub struct SelfplayArgs {
    /// Start from this board instead of the empty one
    #[arg(long)]
    pub from: Option<String>,
}

pub fn execute(args: SelfplayArgs, config: &CliConfig) -> Result<()> {
    let start = match &args.from {
        Some(text) => {
            Board::from_string(text).with_context(|| format!("invalid board '{text}'"))?
        }
        None => Board::new(),
    };

    let mut x = MinimaxAgent::new("engine-x");
    let mut o = MinimaxAgent::new("engine-o");
    let mut tracer = TracingObserver;

    match config.format {
        OutputFormat::Text => {
            let mut printer = BoardPrinter::new(io::stdout());
            let observers: &mut [&mut dyn Observer] = &mut [&mut printer, &mut tracer];
            play_from(start, &mut x, &mut o, observers)?;
        }
        OutputFormat::Json => {
            let game = play_from(start, &mut x, &mut o, &mut [&mut tracer])?;
            print_json(&game)?;
        }
    }

    Ok(())
}
