use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{Theme, TICK_INTERVAL_MS};
use crate::game::GameState;

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub high_score: u32,
    /// Seed given on the command line, shown for reproducible sessions.
    pub seed: Option<u64>,
}

/// Renders the single-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    theme: &Theme,
    info: &HudInfo,
) -> Rect {
    let [play_area, hud_row] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    if hud_row.height == 0 {
        return play_area;
    }

    let left = format!(
        " score {}   best {}   length {}",
        state.score,
        info.high_score,
        state.snake.len(),
    );
    let right = match info.seed {
        Some(seed) => format!("seed {seed} · {TICK_INTERVAL_MS} ms/tick "),
        None => format!("{TICK_INTERVAL_MS} ms/tick "),
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(hud_row.x, hud_row.y, &left, Style::new().fg(theme.hud_fg));

    // Right-align by display width; skip on terminals too narrow for both halves.
    let left_width = u16::try_from(left.width()).unwrap_or(u16::MAX);
    let right_width = u16::try_from(right.width()).unwrap_or(u16::MAX);
    if left_width.saturating_add(right_width) < hud_row.width {
        let x = hud_row.right().saturating_sub(right_width);
        buffer.set_string(x, hud_row.y, &right, Style::new().fg(theme.menu_footer));
    }

    play_area
}
