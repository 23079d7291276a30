//! Best command - optimal move for a given board

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use crate::{
    cli::{
        config::{CliConfig, OutputFormat},
        output::{format_number, print_json, print_kv, render_board},
    },
    search,
    tictactoe::{Board, Outcome},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a board")]
pub struct BestArgs {
    /// Board as 9 cells in row-major order, e.g. "XO..X...." or "XO.|.X.|..."
    pub board: String,

    /// Also print the minimax value of every legal move
    #[arg(long)]
    pub all: bool,
}

pub fn execute(args: BestArgs, config: &CliConfig) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("invalid board '{}'", args.board))?;

    let Some(report) = search::analyze(&board) else {
        match config.format {
            OutputFormat::Json => print_json(&terminal_summary(&board))?,
            OutputFormat::Text => {
                print!("{}", render_board(&board));
                println!("\n{}", describe_terminal(&board));
            }
        }
        return Ok(());
    };

    match config.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            print!("{}", render_board(&board));
            println!();
            print_kv("To move", &report.to_move.to_string());
            print_kv("Best move", &report.chosen.to_string());
            print_kv("Value", &describe_value(report.value));
            print_kv("Positions searched", &format_number(report.nodes));

            if args.all {
                println!("\nAll moves:");
                for (mv, value) in report.action_values.iter() {
                    let marker = if *mv == report.chosen { "*" } else { " " };
                    println!("  {marker} {mv}  {value:+}");
                }
            }
        }
    }

    Ok(())
}

fn describe_value(value: i32) -> String {
    match value {
        1 => "+1 (X wins)".to_string(),
        -1 => "-1 (O wins)".to_string(),
        0 => "0 (draw)".to_string(),
        other => other.to_string(),
    }
}

/// JSON record printed for a finished board
fn terminal_summary(board: &Board) -> serde_json::Value {
    json!({
        "board": board,
        "terminal": true,
        "outcome": Outcome::of(board),
        "utility": board.utility(),
    })
}

fn describe_terminal(board: &Board) -> String {
    match Outcome::of(board) {
        Some(Outcome::Win(mark)) => format!("Terminal: {mark} has won"),
        _ => "Terminal: draw".to_string(),
    }
}
