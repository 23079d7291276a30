//! tictactoe - exhaustive minimax Tic-Tac-Toe from the command line
//!
//! Subcommands:
//! - `best`: optimal move for a board
//! - `play`: a human against the engine
//! - `selfplay`: the engine against itself
//! - `census`: count every game and position

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tictactoe_minimax::cli::{
    self,
    commands::{best, census, play, selfplay},
    config::{CliConfig, OutputFormat, Side},
};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Exhaustive minimax solver for Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (e.g. "info", "tictactoe_minimax=trace")
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Shorthand for --log-level debug
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Side the human plays in `play`
    #[arg(long, value_enum, global = true)]
    human: Option<Side>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal move for a board
    Best(best::BestArgs),

    /// Play against the engine
    Play(play::PlayArgs),

    /// Let the engine play both sides
    Selfplay(selfplay::SelfplayArgs),

    /// Enumerate the whole game tree
    Census(census::CensusArgs),
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let config = CliConfig::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(args.log_level, args.format, args.human, args.verbose)
        .context("invalid command-line options")?;
    cli::init_tracing(&config.log_level);

    match args.command {
        Commands::Best(cmd) => best::execute(cmd, &config),
        Commands::Play(cmd) => play::execute(cmd, &config),
        Commands::Selfplay(cmd) => selfplay::execute(cmd, &config),
        Commands::Census(cmd) => census::execute(cmd, &config),
    }
}
