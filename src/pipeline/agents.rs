//! Agent implementations

use std::collections::VecDeque;

use crate::{
    Error, Result,
    ports::Agent,
    search,
    tictactoe::{Board, Move},
};

/// Exhaustive minimax player
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    name: String,
}

impl MinimaxAgent {
    /// Create a new minimax agent
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        search::choose_move(board).ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays a fixed list of moves in order
#[derive(Debug, Clone)]
pub struct ScriptedAgent {
    name: String,
    moves: VecDeque<Move>,
}

impl ScriptedAgent {
    /// Create a scripted agent that will play `moves` one per turn
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Agent for ScriptedAgent {
    fn select_move(&mut self, _board: &Board) -> Result<Move> {
        self.moves.pop_front().ok_or_else(|| Error::ScriptExhausted {
            name: self.name.clone(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
