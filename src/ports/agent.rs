//! Agent port - anything that can pick a move on a board
//!
//! Implemented by:
//! - the exhaustive minimax engine
//! - scripted move lists (replays, tests)
//! - interactive human input in the CLI

use crate::{
    Result,
    tictactoe::{Board, Move},
};

/// Agent trait - unified interface for every kind of player
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::{
///     ports::Agent,
///     pipeline::MinimaxAgent,
///     tictactoe::Board,
/// };
///
/// let mut agent = MinimaxAgent::new("engine");
/// let mv = agent.select_move(&Board::new()).unwrap();
/// assert!(mv.is_corner() || mv.is_center());
/// ```
pub trait Agent {
    /// Select a move for the given board.
    ///
    /// The board is never terminal when the match driver calls this.
    ///
    /// # Errors
    ///
    /// Returns an error if the agent cannot produce a move, for example
    /// [`crate::Error::NoValidMoves`] on a finished board or
    /// [`crate::Error::ScriptExhausted`] for a scripted agent.
    fn select_move(&mut self, board: &Board) -> Result<Move>;

    /// Get the agent's name.
    ///
    /// Used in logs and match summaries.
    fn name(&self) -> &str;
}
