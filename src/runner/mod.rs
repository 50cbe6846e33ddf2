//! Endless-runner game engine.
//!
//! The player stands at a fixed column and jumps over obstacles that spawn
//! on a wall-clock interval at the right edge and scroll left. Each obstacle
//! that leaves the playfield scores a point; touching one ends the round
//! until the primary action restarts it.

pub mod logic;
pub mod snapshot;
pub mod types;

pub use snapshot::*;
pub use types::*;
