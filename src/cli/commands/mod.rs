//! Subcommands of the `tictactoe` binary

pub mod best;
pub mod census;
pub mod play;
pub mod selfplay;
