//! Runner data structures.
//!
//! A single-screen endless runner: the player stands at a fixed column and
//! jumps over obstacles that scroll in from the right edge of the playfield.

use crate::config::GameConfig;

/// Vertical state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerState {
    /// Height above the ground line. Never negative.
    pub vertical_position: f64,
    /// Signed rate of change of `vertical_position` (positive = upward).
    pub vertical_velocity: f64,
    /// True between takeoff and landing.
    pub is_airborne: bool,
}

/// A single obstacle scrolling across the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Distance travelled from the spawn edge (the playfield's right edge).
    pub horizontal_offset: f64,
}

impl Obstacle {
    pub fn spawned() -> Self {
        Self {
            horizontal_offset: 0.0,
        }
    }

    /// Obstacles sit on the ground; the right edge is `horizontal_offset`
    /// in from the playfield's right edge.
    pub fn bounds(&self, config: &GameConfig) -> Bounds {
        let right = config.playfield_width - self.horizontal_offset;
        Bounds {
            left: right - config.obstacle_width,
            right,
            bottom: 0.0,
            top: config.obstacle_height,
        }
    }
}

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Playing,
    GameOver,
}

/// What the primary input resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Jump,
    Restart,
}

impl PrimaryAction {
    /// The action the primary input performs in `phase`.
    pub fn for_phase(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::Playing => PrimaryAction::Jump,
            SessionPhase::GameOver => PrimaryAction::Restart,
        }
    }
}

/// Whether the frame loop should request another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Halt,
}

/// What happened during one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutcome {
    /// An obstacle was spawned this frame.
    pub spawned: bool,
    /// Obstacles that scrolled off the far edge (each scored one point).
    pub cleared: u32,
    /// The player overlapped an obstacle this frame.
    pub collided: bool,
    pub control: FrameControl,
}

impl FrameOutcome {
    /// Outcome of a frame that did nothing because the session is over.
    pub fn halted() -> Self {
        Self {
            spawned: false,
            cleared: 0,
            collided: false,
            control: FrameControl::Halt,
        }
    }
}

/// Axis-aligned rectangle in playfield coordinates (y grows upwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Bounds {
    /// Strict overlap: edges that only touch do not count.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.bottom < other.top
            && other.bottom < self.top
    }
}

/// Complete state of one play session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub player: PlayerState,
    /// Live obstacles in spawn order.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub phase: SessionPhase,
    /// Frame timestamp (ms) of the most recent spawn.
    pub last_spawn_ms: f64,
    /// Frames advanced since the last (re)start.
    pub frames_advanced: u64,

    // -- Cached parameters --
    pub config: GameConfig,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            player: PlayerState::default(),
            obstacles: Vec::new(),
            score: 0,
            phase: SessionPhase::Playing,
            last_spawn_ms: 0.0,
            frames_advanced: 0,
            config,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Player rectangle at its current height.
    pub fn player_bounds(&self) -> Bounds {
        let c = &self.config;
        let bottom = self.player.vertical_position;
        Bounds {
            left: c.player_x,
            right: c.player_x + c.player_width,
            bottom,
            top: bottom + c.player_height,
        }
    }

    pub fn obstacle_bounds(&self, obstacle: &Obstacle) -> Bounds {
        obstacle.bounds(&self.config)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
