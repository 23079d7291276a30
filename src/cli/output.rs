//! Output formatting and progress indicators for the CLI

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::{Error, Result, tictactoe::Board};

/// Create a spinner for long-running enumeration
///
/// # Errors
///
/// Returns [`Error::ProgressBarTemplate`] if the template fails to parse.
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}]")
            .map_err(|e| Error::ProgressBarTemplate {
                message: e.to_string(),
            })?,
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board with row and column coordinates
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    0   1   2\n");
    for (row, cells) in board.rows().iter().enumerate() {
        if row > 0 {
            out.push_str("   ---+---+---\n");
        }
        let line: Vec<String> = cells
            .iter()
            .map(|cell| match cell.mark() {
                Some(mark) => format!(" {mark} "),
                None => "   ".to_string(),
            })
            .collect();
        out.push_str(&format!("{row}  {}\n", line.join("|")));
    }
    out
}

/// Serialize a value as pretty JSON on stdout
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the value cannot be serialized.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
