pub mod game_common;
pub mod runner_scene;

use hurdle::{App, FrameSource};
use ratatui::Frame;

/// Draw the whole screen for one frame.
pub fn draw_ui<C: FrameSource>(frame: &mut Frame, app: &App<C>) {
    let area = frame.size();
    runner_scene::render_runner_scene(frame, area, app);
}
