//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark, Move};

/// A move together with the mark that played it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ply {
    #[serde(rename = "move")]
    pub mv: Move,
    pub mark: Mark,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

impl Outcome {
    /// Outcome of a terminal board, `None` while the game is running
    pub fn of(board: &Board) -> Option<Self> {
        if let Some(mark) = board.winner() {
            Some(Outcome::Win(mark))
        } else if board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Numeric value of the outcome from X's perspective
    pub fn utility(self) -> i32 {
        match self {
            Outcome::Win(mark) => mark.utility(),
            Outcome::Draw => 0,
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub plies: Vec<Ply>,
    pub outcome: Option<Outcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Continue a game from an arbitrary starting position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            plies: Vec::new(),
            outcome: Outcome::of(&initial),
        }
    }

    /// Play a move for whichever mark is on turn
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has finished, and the
    /// board's move errors for illegal coordinates.
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_board()?;
        let next = current.apply_move(mv)?;

        self.plies.push(Ply {
            mv,
            mark: current.current_player(),
        });
        self.outcome = Outcome::of(&next);

        Ok(())
    }

    /// Replay plies up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is illegal, which means the
    /// game data was edited by hand.
    fn replay_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut board = self.initial;
        for ply in self.plies.iter().take(end_index) {
            board = board.apply_move(ply.mv)?;
        }
        Ok(board)
    }

    /// Get current board
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is illegal.
    pub fn current_board(&self) -> Result<Board, crate::Error> {
        self.replay_until(self.plies.len())
    }

    /// Get the sequence of boards, starting with the initial one
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is illegal.
    pub fn board_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut boards = Vec::with_capacity(self.plies.len() + 1);
        let mut board = self.initial;
        boards.push(board);
        for ply in &self.plies {
            board = board.apply_move(ply.mv)?;
            boards.push(board);
        }
        Ok(boards)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
