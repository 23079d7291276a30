//! Winning line analysis for Tic-Tac-Toe

use super::board::{Cell, Mark, SIZE};

/// A line of three `(row, col)` coordinates
pub type Line = [(usize, usize); 3];

/// Winning lines on the 3x3 board, in the order they are checked
pub const WINNING_LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First completed line, scanning rows, then columns, then diagonals.
    pub fn winning_line(cells: &[[Cell; SIZE]; SIZE]) -> Option<(Mark, Line)> {
        WINNING_LINES.iter().find_map(|line| {
            let [(r0, c0), (r1, c1), (r2, c2)] = *line;
            let first = cells[r0][c0];
            if first == cells[r1][c1] && first == cells[r2][c2] {
                first.mark().map(|mark| (mark, *line))
            } else {
                None
            }
        })
    }
}
