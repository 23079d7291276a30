//! Exhaustive minimax solver for Tic-Tac-Toe
//!
//! This crate provides:
//! - A value-semantics 3x3 board model with turn derived from piece counts
//! - Exhaustive minimax search that picks the optimal move for the side to move
//! - A match pipeline with pluggable agents and observers
//! - A game-tree census used to cross-check the engine
//! - The `tictactoe` command-line driver

pub mod analysis;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{ActionValues, SearchReport, analyze, choose_move, recursive_search};
pub use tictactoe::{Board, Cell, Game, Mark, Move, Outcome};
