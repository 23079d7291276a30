//! Whole-tree analysis of Tic-Tac-Toe
//!
//! Exhaustively walks the game tree from the empty board to count games,
//! outcomes, and reachable positions, and cross-checks the search engine's
//! value of the opening position.

pub mod census;

pub use census::{GameCensus, OutcomeDistribution};
