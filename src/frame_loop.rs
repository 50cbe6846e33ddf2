//! Frame scheduling.
//!
//! A frame runs only when one has been requested, and running it consumes
//! the request. The session asks for the next frame through the returned
//! `FrameControl`; after game over nothing asks, so the loop goes idle
//! until a restart requests a frame again.

use crate::runner::{FrameControl, FrameOutcome, GameSession};
use std::time::Instant;

/// Source of frame timestamps in milliseconds.
///
/// Timestamps never decrease except across `rebase`, which starts a new
/// timeline at zero for a fresh round.
pub trait FrameSource {
    fn now_ms(&self) -> f64;
    fn rebase(&mut self);
}

/// Monotonic wall clock measured from an origin.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl FrameSource for FrameClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    /// Move the origin to now, so a new round's first spawn comes one full
    /// interval in.
    fn rebase(&mut self) {
        self.origin = Instant::now();
    }
}

/// Clock advanced by hand, for tests and the headless simulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, ms: f64) {
        debug_assert!(ms >= 0.0, "clock must not run backwards");
        self.now_ms += ms.max(0.0);
    }
}

impl FrameSource for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn rebase(&mut self) {
        self.now_ms = 0.0;
    }
}

/// Holds at most one pending frame request.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    pending: bool,
    frames_run: u64,
}

impl FrameLoop {
    /// A loop with its first frame already requested: the game starts as
    /// soon as the host starts pumping frames.
    pub fn new() -> Self {
        Self {
            pending: true,
            frames_run: 0,
        }
    }

    /// Request the next frame. Requesting twice still runs one frame.
    pub fn request_frame(&mut self) {
        self.pending = true;
    }

    pub fn is_running(&self) -> bool {
        self.pending
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Run the pending frame, if any, and re-request unless the session
    /// halted. Returns `None` when no frame was pending.
    pub fn run_frame(
        &mut self,
        session: &mut GameSession,
        timestamp_ms: f64,
    ) -> Option<FrameOutcome> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.frames_run += 1;

        let outcome = session.advance(timestamp_ms);
        if outcome.control == FrameControl::Continue {
            self.pending = true;
        }
        Some(outcome)
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::Obstacle;

    #[test]
    fn test_new_loop_has_first_frame_pending() {
        let frames = FrameLoop::new();
        assert!(frames.is_running());
        assert_eq!(frames.frames_run(), 0);
    }

    #[test]
    fn test_frame_rerequested_while_playing() {
        let mut frames = FrameLoop::new();
        let mut session = GameSession::default();

        for i in 0..10 {
            let outcome = frames.run_frame(&mut session, i as f64 * 16.0);
            assert!(outcome.is_some());
            assert!(frames.is_running());
        }
        assert_eq!(frames.frames_run(), 10);
        assert_eq!(session.frames_advanced, 10);
    }

    #[test]
    fn test_loop_idles_after_game_over() {
        let mut frames = FrameLoop::new();
        let mut session = GameSession::default();
        session.obstacles.push(Obstacle {
            horizontal_offset: 496.0,
        });

        let outcome = frames.run_frame(&mut session, 0.0).unwrap();
        assert!(outcome.collided);
        assert!(!frames.is_running());

        // No pending request: the session is not touched again.
        assert!(frames.run_frame(&mut session, 16.0).is_none());
        assert!(frames.run_frame(&mut session, 32.0).is_none());
        assert_eq!(session.frames_advanced, 1);
    }

    #[test]
    fn test_double_request_runs_one_frame() {
        let mut frames = FrameLoop::new();
        let mut session = GameSession::default();
        session.phase = crate::runner::SessionPhase::GameOver;

        frames.request_frame();
        frames.request_frame();
        assert!(frames.run_frame(&mut session, 0.0).is_some());
        assert!(frames.run_frame(&mut session, 0.0).is_none());
    }

    #[test]
    fn test_manual_clock() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0.0);
        clock.advance(16.0);
        clock.advance(16.0);
        assert_eq!(clock.now_ms(), 32.0);
        clock.rebase();
        assert_eq!(clock.now_ms(), 0.0);
    }

    #[test]
    fn test_frame_clock_is_monotonic() {
        let clock = FrameClock::start();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
