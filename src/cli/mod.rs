//! CLI infrastructure for the `tictactoe` binary
//!
//! This module provides the command-line driver around the solver: asking
//! for the best move, playing against the engine, engine self-play, and the
//! game-tree census.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used. Logs go to
/// stderr so command output on stdout stays parseable.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
