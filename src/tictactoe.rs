//! Tic-Tac-Toe board model

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Mark, Move, SIZE};
pub use game::{Game, Outcome, Ply};
pub use lines::{LineAnalyzer, WINNING_LINES};
