//! Census command - enumerate the whole game tree

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::GameCensus,
    cli::{
        config::{CliConfig, OutputFormat},
        output::{create_spinner, format_number, print_json, print_kv, print_section},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Count every game and position reachable from the empty board")]
pub struct CensusArgs {
    /// Hide the progress spinner
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: CensusArgs, config: &CliConfig) -> Result<()> {
    let spinner = if args.quiet {
        None
    } else {
        Some(create_spinner("Enumerating games")?)
    };

    let census = GameCensus::analyze_with_progress(|games| {
        if let Some(pb) = &spinner {
            pb.set_message(format!("Enumerating games ({} so far)", format_number(games)));
            pb.tick();
        }
    });

    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    match config.format {
        OutputFormat::Json => print_json(&census)?,
        OutputFormat::Text => {
            print_section("Tic-Tac-Toe game tree");
            print_kv("Games", &format_number(census.total_games));
            print_kv(
                "X wins",
                &format_number(census.outcome_distribution.x_wins),
            );
            print_kv(
                "O wins",
                &format_number(census.outcome_distribution.o_wins),
            );
            print_kv("Draws", &format_number(census.outcome_distribution.draws));
            print_kv(
                "Average length",
                &format!("{:.2} moves", census.average_game_length),
            );
            print_kv(
                "Positions",
                &format_number(census.reachable_positions as u64),
            );
            print_kv(
                "Terminal positions",
                &format_number(census.terminal_positions as u64),
            );
            let root = census
                .root_value
                .map_or_else(|| "n/a".to_string(), |v| format!("{v:+}"));
            print_kv("Value of empty board", &root);

            println!("\nGames by length:");
            for (length, count) in &census.length_histogram {
                println!("  {length} moves: {}", format_number(*count));
            }
        }
    }

    Ok(())
}
