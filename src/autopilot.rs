//! Scripted player for headless runs.
//!
//! Replays the jump arc the engine would produce for a config and works out
//! which gaps to the next obstacle are safe to jump from. Each jump fires
//! at a trigger gap drawn at random from the safe range, so seeded runs
//! differ without ever mistiming.

use crate::config::GameConfig;
use crate::runner::GameSession;
use rand::Rng;

/// Heights after each frame of a jump from the ground, up to and including
/// the landing frame.
pub fn jump_arc(config: &GameConfig) -> Vec<f64> {
    let mut session = GameSession::new(GameConfig {
        // Keep the spawner out of the way.
        spawn_interval_ms: f64::MAX,
        ..*config
    });
    session.jump();

    let mut arc = Vec::new();
    // A zero-gravity jump never lands; stop once the player is clear of
    // anything on the playfield.
    let ceiling = config.playfield_height.max(config.obstacle_height) * 4.0;
    loop {
        session.advance(0.0);
        arc.push(session.player.vertical_position);
        if !session.player.is_airborne || session.player.vertical_position > ceiling {
            return arc;
        }
    }
}

/// Whether jumping now clears an obstacle whose left edge is `gap` units
/// ahead of the player's right edge.
fn gap_is_safe(config: &GameConfig, arc: &[f64], gap: f64) -> bool {
    let span = config.player_width + config.obstacle_width;
    let landed = arc.last().map_or(true, |h| *h <= 0.0);
    let mut frame = 1usize;
    loop {
        let ahead = gap - frame as f64 * config.scroll_speed;
        if ahead + span <= 0.0 {
            return true;
        }
        if ahead < 0.0 {
            let height = match arc.get(frame - 1) {
                Some(h) => *h,
                None if landed => 0.0,
                // Still climbing past the recorded arc.
                None => f64::MAX,
            };
            if height < config.obstacle_height {
                return false;
            }
        }
        frame += 1;
    }
}

/// First contiguous range of safe jump gaps, in whole units.
pub fn safe_gap_range(config: &GameConfig) -> Option<(f64, f64)> {
    let arc = jump_arc(config);
    let mut range: Option<(f64, f64)> = None;
    let mut gap = 0.0;
    while gap <= config.playfield_width {
        if gap_is_safe(config, &arc, gap) {
            range = Some(match range {
                Some((lo, _)) => (lo, gap),
                None => (gap, gap),
            });
        } else if range.is_some() {
            break;
        }
        gap += 1.0;
    }
    range
}

pub struct Autopilot {
    min_trigger: f64,
    max_trigger: f64,
    trigger: f64,
    jumps: u64,
}

impl Autopilot {
    /// Returns `None` when no jump timing can clear an obstacle.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Option<Self> {
        let (lo, hi) = safe_gap_range(config)?;
        // The gap shrinks by a full scroll step between checks, so the
        // trigger must leave that much room above the safe minimum.
        let min_trigger = (lo + config.scroll_speed).min(hi);
        let mut pilot = Self {
            min_trigger,
            max_trigger: hi,
            trigger: hi,
            jumps: 0,
        };
        pilot.resample(rng);
        Some(pilot)
    }

    fn resample<R: Rng>(&mut self, rng: &mut R) {
        self.trigger = if self.max_trigger > self.min_trigger {
            rng.gen_range(self.min_trigger..=self.max_trigger)
        } else {
            self.max_trigger
        };
    }

    /// Decide whether to press the primary action before the next frame.
    pub fn should_jump<R: Rng>(&mut self, session: &GameSession, rng: &mut R) -> bool {
        if session.is_over() || session.player.is_airborne {
            return false;
        }

        let player = session.player_bounds();
        let nearest_gap = session
            .obstacles
            .iter()
            .map(|o| session.obstacle_bounds(o).left - player.right)
            .filter(|gap| *gap >= 0.0)
            .fold(f64::INFINITY, f64::min);

        if nearest_gap <= self.trigger {
            self.jumps += 1;
            self.resample(rng);
            true
        } else {
            false
        }
    }

    pub fn trigger_range(&self) -> (f64, f64) {
        (self.min_trigger, self.max_trigger)
    }

    pub fn jumps(&self) -> u64 {
        self.jumps
    }
}
