//! Ports (trait boundaries) between the solver core and its drivers.
//!
//! The core owns these traits; the match pipeline and the CLI provide the
//! implementations.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
