//! Hurdle - a terminal endless runner.
//!
//! This module exposes the game engine for testing and for the headless
//! simulator.

pub mod app;
pub mod autopilot;
pub mod build_info;
pub mod config;
pub mod error;
pub mod frame_loop;
pub mod input;
pub mod logging;
pub mod runner;

pub use app::{App, AppControl};
pub use config::GameConfig;
pub use error::{HurdleError, Result};
pub use frame_loop::{FrameClock, FrameLoop, FrameSource, ManualClock};
pub use runner::{FrameControl, FrameOutcome, GameSession, PrimaryAction, RenderState};

// UI module is not exposed as it's tightly coupled to the terminal
