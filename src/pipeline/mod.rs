//! Match pipeline
//!
//! This module provides:
//! - Agent implementations (minimax engine, scripted moves)
//! - A match driver that alternates agents until the game ends
//! - Observers that print or log the match as it unfolds

pub mod agents;
pub mod observers;
pub mod play;

pub use agents::{MinimaxAgent, ScriptedAgent};
pub use observers::{BoardPrinter, RecordingObserver, TracingObserver};
pub use play::{play_from, play_match};

pub use crate::ports::{Agent, Observer};
