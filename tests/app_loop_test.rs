//! Integration test: the app's frame loop across rounds
//!
//! Pumps `App<ManualClock>` the way the terminal host does: advance the
//! clock, deliver input, tick. Covers the loop stopping at game over, the
//! primary action restarting it, and a long autopilot run.

use hurdle::autopilot::Autopilot;
use hurdle::input::InputAction;
use hurdle::{App, AppControl, FrameSource, GameConfig, ManualClock};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FRAME_MS: f64 = 16.0;

fn new_app() -> App<ManualClock> {
    App::new(GameConfig::default(), ManualClock::new())
}

/// Tick until the round ends, returning the number of frames that ran.
fn play_until_game_over(app: &mut App<ManualClock>) -> u32 {
    let mut frames = 0;
    while app.is_running() {
        app.clock_mut().advance(FRAME_MS);
        if app.tick().is_some() {
            frames += 1;
        }
        assert!(frames < 10_000, "round never ended");
    }
    frames
}

#[test]
fn test_round_ends_without_input() {
    let mut app = new_app();
    let frames = play_until_game_over(&mut app);

    // Spawn on frame 94, contact 122 frames later.
    assert_eq!(frames, 216);
    assert!(app.render_state().game_over_visible);
    assert_eq!(app.session().score, 0);

    // The loop stays idle no matter how long the host keeps pumping.
    for _ in 0..100 {
        app.clock_mut().advance(FRAME_MS);
        assert!(app.tick().is_none());
    }
    assert_eq!(app.session().frames_advanced, 216);
}

#[test]
fn test_second_round_matches_the_first() {
    let mut app = new_app();
    let first = play_until_game_over(&mut app);

    assert_eq!(app.handle_input(InputAction::Primary), AppControl::Continue);
    assert!(app.is_running());
    assert_eq!(app.clock_mut().now_ms(), 0.0);

    let second = play_until_game_over(&mut app);
    assert_eq!(first, second);
    assert_eq!(app.rounds_played(), 2);
}

#[test]
fn test_quit_from_either_phase() {
    let mut app = new_app();
    assert_eq!(app.handle_input(InputAction::Quit), AppControl::Quit);

    play_until_game_over(&mut app);
    assert_eq!(app.handle_input(InputAction::Quit), AppControl::Quit);
    assert!(!app.is_running());
}

#[test]
fn test_autopilot_minute_without_crashing() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut pilot = Autopilot::new(&config, &mut rng).expect("default config is jumpable");
    let mut app = App::new(config, ManualClock::new());

    for _ in 0..3750 {
        if pilot.should_jump(app.session(), &mut rng) {
            app.handle_input(InputAction::Primary);
        }
        app.clock_mut().advance(FRAME_MS);
        let outcome = app.tick().expect("loop should keep running");
        assert!(!outcome.collided);
    }

    // 39 spawns at 94-frame spacing; all but the last have scrolled off.
    assert_eq!(app.session().score, 38);
    assert_eq!(app.best_score(), 38);
    assert_eq!(app.rounds_played(), 1);
}
