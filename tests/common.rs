//! Common helpers for the integration tests.

use std::collections::HashSet;

use tictactoe_minimax::tictactoe::{Board, Move};

/// Parse a board, panicking on malformed test input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad test board '{s}': {e}"))
}

/// Build a move, panicking on out-of-range test input.
pub fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

/// Every distinct board reachable from the empty board by legal play.
pub fn reachable_boards() -> Vec<Board> {
    fn walk(board: Board, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(board) {
            return;
        }
        out.push(board);
        if board.is_terminal() {
            return;
        }
        for m in board.legal_moves() {
            let next = board.apply_move(m).expect("generated move must be legal");
            walk(next, seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), &mut seen, &mut out);
    out
}
