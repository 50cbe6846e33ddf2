//! Read-only mirror of a session for the display layer.

use super::types::GameSession;

/// Everything a renderer needs for one frame. Cloned out of the session so
/// the display side never holds a reference into game state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Player height above the ground line.
    pub player_bottom: f64,
    /// Offset of each live obstacle from the right edge, in spawn order.
    pub obstacle_offsets: Vec<f64>,
    pub score: u32,
    /// Whether the game-over indicator should be shown.
    pub game_over_visible: bool,
}

impl GameSession {
    pub fn render_state(&self) -> RenderState {
        RenderState {
            player_bottom: self.player.vertical_position,
            obstacle_offsets: self
                .obstacles
                .iter()
                .map(|o| o.horizontal_offset)
                .collect(),
            score: self.score,
            game_over_visible: self.is_over(),
        }
    }
}
