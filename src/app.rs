//! Application state shared by the terminal game and the simulator.

use crate::config::GameConfig;
use crate::frame_loop::{FrameLoop, FrameSource};
use crate::input::InputAction;
use crate::runner::{FrameOutcome, GameSession, PrimaryAction, RenderState};

/// Whether the host should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Quit,
}

/// A session plus everything that drives it: the frame loop, its clock, and
/// per-process stats that outlive a single round.
pub struct App<C: FrameSource> {
    session: GameSession,
    frames: FrameLoop,
    clock: C,
    /// Best score this process has seen. Never persisted.
    best_score: u32,
    /// Rounds started, including the current one.
    rounds_played: u32,
}

impl<C: FrameSource> App<C> {
    pub fn new(config: GameConfig, clock: C) -> Self {
        Self {
            session: GameSession::new(config),
            frames: FrameLoop::new(),
            clock,
            best_score: 0,
            rounds_played: 1,
        }
    }

    /// Apply one input. Restarting resumes the frame loop on a fresh timeline.
    pub fn handle_input(&mut self, action: InputAction) -> AppControl {
        match action {
            InputAction::Primary => {
                if self.session.primary_action() == PrimaryAction::Restart {
                    self.clock.rebase();
                    self.frames.request_frame();
                    self.rounds_played += 1;
                }
                AppControl::Continue
            }
            InputAction::Quit => AppControl::Quit,
            InputAction::None => AppControl::Continue,
        }
    }

    /// Run the pending frame, if any, at the clock's current time.
    pub fn tick(&mut self) -> Option<FrameOutcome> {
        let now = self.clock.now_ms();
        let outcome = self.frames.run_frame(&mut self.session, now)?;
        self.best_score = self.best_score.max(self.session.score);
        Some(outcome)
    }

    pub fn render_state(&self) -> RenderState {
        self.session.render_state()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.session.config
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_loop::ManualClock;
    use crate::runner::Obstacle;

    fn app() -> App<ManualClock> {
        App::new(GameConfig::default(), ManualClock::new())
    }

    /// Put an obstacle right in front of the grounded player and run a frame.
    fn crash(app: &mut App<ManualClock>) {
        app.session.obstacles.push(Obstacle {
            horizontal_offset: 496.0,
        });
        app.clock_mut().advance(16.0);
        let outcome = app.tick().expect("frame should run");
        assert!(outcome.collided);
    }

    #[test]
    fn test_new_app_is_running() {
        let app = app();
        assert!(app.is_running());
        assert_eq!(app.rounds_played(), 1);
        assert_eq!(app.best_score(), 0);
    }

    #[test]
    fn test_primary_jumps_while_playing() {
        let mut app = app();
        assert_eq!(app.handle_input(InputAction::Primary), AppControl::Continue);
        assert!(app.session().player.is_airborne);
        assert_eq!(app.rounds_played(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert_eq!(app.handle_input(InputAction::Quit), AppControl::Quit);
        assert_eq!(app.handle_input(InputAction::None), AppControl::Continue);
    }

    #[test]
    fn test_ticks_stop_after_game_over() {
        let mut app = app();
        crash(&mut app);
        assert!(!app.is_running());
        assert!(app.render_state().game_over_visible);

        app.clock_mut().advance(16.0);
        assert!(app.tick().is_none());
    }

    #[test]
    fn test_restart_resumes_frames_on_fresh_timeline() {
        let mut app = app();
        app.clock_mut().advance(5000.0);
        crash(&mut app);

        app.handle_input(InputAction::Primary);

        assert!(app.is_running());
        assert_eq!(app.rounds_played(), 2);
        assert!(!app.session().is_over());
        assert_eq!(app.clock_mut().now_ms(), 0.0);
        // Restart does not also jump.
        assert!(!app.session().player.is_airborne);

        // First frame of the new round does not spawn immediately.
        app.clock_mut().advance(16.0);
        let outcome = app.tick().expect("frame should run");
        assert!(!outcome.spawned);
    }

    #[test]
    fn test_best_score_survives_restart() {
        let mut app = app();
        app.session.score = 6;
        crash(&mut app);
        assert_eq!(app.best_score(), 6);

        app.handle_input(InputAction::Primary);
        assert_eq!(app.session().score, 0);
        assert_eq!(app.best_score(), 6);
    }
}
