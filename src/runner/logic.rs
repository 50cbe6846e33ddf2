//! Runner game loop: physics, spawning, collision, scoring, restart.

use super::types::*;

impl GameSession {
    /// Advance the session by one frame.
    ///
    /// `timestamp_ms` comes from the frame source and must not decrease
    /// between calls. Does nothing once the session is over; the returned
    /// outcome's `control` tells the frame loop whether to request another
    /// frame.
    pub fn advance(&mut self, timestamp_ms: f64) -> FrameOutcome {
        if self.is_over() {
            return FrameOutcome::halted();
        }

        self.frames_advanced += 1;

        // 1. Player physics
        step_player(&mut self.player, self.config.gravity);

        // 2. Spawning (wall-clock driven, at most one per frame)
        let spawned = timestamp_ms - self.last_spawn_ms > self.config.spawn_interval_ms;
        if spawned {
            self.obstacles.push(Obstacle::spawned());
            self.last_spawn_ms = timestamp_ms;
            log::debug!(
                "spawned obstacle at {:.0}ms ({} live)",
                timestamp_ms,
                self.obstacles.len()
            );
        }

        // 3. Scroll, collide and clean up, all against the post-scroll offset
        let player = self.player_bounds();
        let config = self.config;
        let mut collided = false;
        let mut cleared = 0;
        self.obstacles.retain_mut(|obstacle| {
            obstacle.horizontal_offset += config.scroll_speed;

            if player.overlaps(&obstacle.bounds(&config)) {
                collided = true;
            }

            if obstacle.horizontal_offset > config.playfield_width {
                cleared += 1;
                false
            } else {
                true
            }
        });

        if cleared > 0 {
            self.score += cleared;
            log::debug!("cleared {} obstacle(s), score {}", cleared, self.score);
        }

        if collided {
            self.phase = SessionPhase::GameOver;
            log::info!(
                "game over after {} frames with score {}",
                self.frames_advanced,
                self.score
            );
        }

        FrameOutcome {
            spawned,
            cleared,
            collided,
            control: if collided {
                FrameControl::Halt
            } else {
                FrameControl::Continue
            },
        }
    }

    /// Start a jump if grounded. After game over this restarts instead.
    pub fn jump(&mut self) {
        if self.is_over() {
            self.restart();
            return;
        }
        // No double jump and no buffering.
        if self.player.is_airborne {
            return;
        }
        self.player.is_airborne = true;
        self.player.vertical_velocity = self.config.jump_impulse;
    }

    /// Reset everything but the config to its initial value.
    ///
    /// The caller is responsible for resuming frame requests.
    pub fn restart(&mut self) {
        log::info!("restarting (previous score {})", self.score);
        *self = GameSession::new(self.config);
    }

    /// Dispatch the primary input through the state machine: jump while
    /// playing, restart after game over. Returns what was performed.
    pub fn primary_action(&mut self) -> PrimaryAction {
        let action = PrimaryAction::for_phase(self.phase);
        match action {
            PrimaryAction::Jump => self.jump(),
            PrimaryAction::Restart => self.restart(),
        }
        action
    }
}

/// Single physics step. Position moves by the velocity from before this
/// step's gravity is applied.
fn step_player(player: &mut PlayerState, gravity: f64) {
    player.vertical_position += player.vertical_velocity;
    player.vertical_velocity -= gravity;

    if player.vertical_position <= 0.0 {
        player.vertical_position = 0.0;
        player.vertical_velocity = 0.0;
        player.is_airborne = false;
    }
}
