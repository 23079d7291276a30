//! Observer port - watching a match as it is played
//!
//! The methods are called in this order:
//! 1. `on_game_start(board)` - once, with the starting board
//! 2. `on_move(ply, board)` - after every move, with the resulting board
//! 3. `on_game_end(game)` - once, with the finished game

use crate::{
    Result,
    tictactoe::{Board, Game, Ply},
};

/// Observer trait for monitoring a match
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::{ports::Observer, tictactoe::{Board, Ply}};
///
/// struct MoveCounter {
///     moves: usize,
/// }
///
/// impl Observer for MoveCounter {
///     fn on_move(&mut self, _ply: &Ply, _board: &Board) -> tictactoe_minimax::Result<()> {
///         self.moves += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Called before the first move.
    fn on_game_start(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called after each move with the board it produced.
    fn on_move(&mut self, _ply: &Ply, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called once the game has an outcome.
    fn on_game_end(&mut self, _game: &Game) -> Result<()> {
        Ok(())
    }
}
