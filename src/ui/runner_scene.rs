//! Runner game UI rendering.
//!
//! Uses a cell buffer for per-character color control. Playfield units are
//! scaled to terminal cells, the player and obstacles are stamped into the
//! grid, and the grid is emitted row by row as Paragraph widgets.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use hurdle::{App, FrameSource, GameConfig, RenderState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Rendering characters ─────────────────────────────────────────────
const GROUND_CHAR: char = '▓';
const PLAYER_CHAR: char = '█';
const OBSTACLE_CHAR: char = '#';

const PLAYER_COLOR: Color = Color::LightYellow;
const OBSTACLE_COLOR: Color = Color::Rgb(140, 110, 80);

const PRIMARY_KEYS: &str = "[Space/Up/Click]";

/// Render the runner game scene.
pub fn render_runner_scene<C: FrameSource>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let state = app.render_state();

    let layout = create_game_layout(frame, area, " Hurdle ", Color::LightYellow, 8, 20);

    render_play_field(frame, layout.content, &state, app.config());
    render_status_bar_content(frame, layout.status_bar, &state);
    render_info_panel(
        frame,
        layout.info_panel,
        &state,
        app.best_score(),
        app.rounds_played(),
    );

    if state.game_over_visible {
        render_game_over_banner(
            frame,
            layout.content,
            "GAME OVER",
            &format!("Cleared {} obstacles", state.score),
            &format!("{} to run again", PRIMARY_KEYS),
        );
    }
}

/// Cell in the render buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Maps playfield units onto a `width` x `height` grid whose last row is
/// the ground.
struct Projection {
    x_scale: f64,
    y_scale: f64,
    ground_row: i32,
}

impl Projection {
    fn new(width: u16, height: u16, config: &GameConfig) -> Self {
        Self {
            x_scale: width as f64 / config.playfield_width,
            y_scale: (height.saturating_sub(1)) as f64 / config.playfield_height,
            ground_row: height as i32 - 1,
        }
    }

    /// Half-open column span covering `[left, right)`, at least one column wide.
    fn columns(&self, left: f64, right: f64) -> (i32, i32) {
        let start = (left * self.x_scale).floor() as i32;
        let end = ((right * self.x_scale).ceil() as i32).max(start + 1);
        (start, end)
    }

    /// Rows (top, bottom inclusive) for something `height` tall standing
    /// `bottom` units above the ground.
    fn rows(&self, bottom: f64, height: f64) -> (i32, i32) {
        let lowest = self.ground_row - 1 - (bottom * self.y_scale).floor() as i32;
        let tall = ((height * self.y_scale).ceil() as i32).max(1);
        (lowest - tall + 1, lowest)
    }
}

/// Draw the play field into a cell grid.
pub fn build_play_field(
    width: u16,
    height: u16,
    state: &RenderState,
    config: &GameConfig,
) -> Vec<Vec<Cell>> {
    let mut buffer = vec![vec![Cell::default(); width as usize]; height as usize];
    if width == 0 || height < 2 {
        return buffer;
    }

    let projection = Projection::new(width, height, config);

    // ── Ground ────────────────────────────────────────────────────────
    let ground = projection.ground_row as usize;
    for cell in buffer[ground].iter_mut() {
        *cell = Cell {
            ch: GROUND_CHAR,
            fg: Color::Rgb(90, 70, 50),
            bg: Color::Rgb(50, 40, 30),
        };
    }

    // ── Obstacles ─────────────────────────────────────────────────────
    let obstacle = Cell {
        ch: OBSTACLE_CHAR,
        fg: OBSTACLE_COLOR,
        bg: Color::Reset,
    };
    for offset in &state.obstacle_offsets {
        let right = config.playfield_width - offset;
        let cols = projection.columns(right - config.obstacle_width, right);
        let rows = projection.rows(0.0, config.obstacle_height);
        stamp(&mut buffer, cols, rows, obstacle);
    }

    // ── Player (drawn last so it stays visible on a collision) ────────
    let player = Cell {
        ch: PLAYER_CHAR,
        fg: if state.game_over_visible {
            Color::Red
        } else {
            PLAYER_COLOR
        },
        bg: Color::Reset,
    };
    let cols = projection.columns(config.player_x, config.player_x + config.player_width);
    let rows = projection.rows(state.player_bottom, config.player_height);
    stamp(&mut buffer, cols, rows, player);

    // ── Score (top-right) ─────────────────────────────────────────────
    let score_text = format!("Score: {}", state.score);
    let start = (width as usize).saturating_sub(score_text.len() + 1);
    for (i, ch) in score_text.chars().enumerate() {
        if let Some(cell) = buffer[0].get_mut(start + i) {
            *cell = Cell {
                ch,
                fg: Color::White,
                bg: Color::Reset,
            };
        }
    }

    buffer
}

/// Fill the cells in `cols` x `rows`, clipped to the area above the ground.
fn stamp(buffer: &mut [Vec<Cell>], cols: (i32, i32), rows: (i32, i32), cell: Cell) {
    let ground_row = buffer.len() as i32 - 1;
    for row in rows.0.max(0)..=rows.1.min(ground_row - 1) {
        let line = &mut buffer[row as usize];
        let width = line.len() as i32;
        for col in cols.0.max(0)..cols.1.min(width) {
            line[col as usize] = cell;
        }
    }
}

/// Render the main play field.
fn render_play_field(frame: &mut Frame, area: Rect, state: &RenderState, config: &GameConfig) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let buffer = build_play_field(area.width, area.height, state, config);

    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

/// Render the status bar below the play field.
fn render_status_bar_content(frame: &mut Frame, area: Rect, state: &RenderState) {
    if state.game_over_visible {
        render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[(PRIMARY_KEYS, "Restart"), ("[Esc/q]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            "Run!",
            Color::LightYellow,
            &[(PRIMARY_KEYS, "Jump"), ("[Esc/q]", "Quit")],
        );
    }
}

/// Render the info panel on the right side.
fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    state: &RenderState,
    best_score: u32,
    rounds_played: u32,
) {
    let inner = render_info_panel_frame(frame, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                state.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best: ", label),
            Span::styled(best_score.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Round: ", label),
            Span::styled(rounds_played.to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("On screen: ", label),
            Span::styled(state.obstacle_offsets.len().to_string(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" {} ", PLAYER_CHAR), Style::default().fg(PLAYER_COLOR)),
            Span::styled("Runner", label),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {} ", OBSTACLE_CHAR),
                Style::default().fg(OBSTACLE_COLOR),
            ),
            Span::styled("Obstacle", label),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
