//! Tunable physics and geometry for a session.
//!
//! All values are in playfield units: x grows rightwards from the left edge
//! of the playfield, y grows upwards from the ground line. Velocities and
//! speeds are per frame, the spawn interval is in milliseconds.

use crate::error::{HurdleError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default gravity (velocity lost per frame).
pub const DEFAULT_GRAVITY: f64 = 0.5;
/// Default jump impulse (velocity set on takeoff).
pub const DEFAULT_JUMP_IMPULSE: f64 = 10.0;
/// Default obstacle scroll speed (offset gained per frame).
pub const DEFAULT_SCROLL_SPEED: f64 = 4.0;
/// Default time between obstacle spawns.
pub const DEFAULT_SPAWN_INTERVAL_MS: f64 = 1500.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub gravity: f64,
    pub jump_impulse: f64,
    pub scroll_speed: f64,
    pub spawn_interval_ms: f64,
    pub playfield_width: f64,
    pub playfield_height: f64,
    /// Left edge of the player, measured from the playfield's left edge.
    pub player_x: f64,
    pub player_width: f64,
    pub player_height: f64,
    pub obstacle_width: f64,
    pub obstacle_height: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            playfield_width: 600.0,
            playfield_height: 200.0,
            player_x: 50.0,
            player_width: 40.0,
            player_height: 40.0,
            obstacle_width: 20.0,
            obstacle_height: 40.0,
        }
    }
}

impl GameConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json).map_err(|source| HurdleError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("scroll_speed", self.scroll_speed),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("player_x", self.player_x),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be finite, got {}", name, value)));
            }
        }

        // Zero gravity is allowed (a jump then never lands); negative is not.
        if self.gravity < 0.0 {
            return Err(invalid(format!(
                "gravity must not be negative, got {}",
                self.gravity
            )));
        }
        if self.player_x < 0.0 {
            return Err(invalid(format!(
                "player_x must not be negative, got {}",
                self.player_x
            )));
        }

        for (name, value) in &fields[1..] {
            if *name == "player_x" {
                continue;
            }
            if *value <= 0.0 {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        if self.player_x + self.player_width > self.playfield_width {
            return Err(invalid(format!(
                "player (x {} + width {}) does not fit in playfield width {}",
                self.player_x, self.player_width, self.playfield_width
            )));
        }

        Ok(())
    }

    /// Frames an obstacle stays alive: it is removed on the first frame its
    /// offset exceeds the playfield width.
    pub fn frames_to_clear(&self) -> u64 {
        (self.playfield_width / self.scroll_speed).floor() as u64 + 1
    }
}

fn invalid(msg: String) -> HurdleError {
    HurdleError::InvalidConfig(msg)
}
