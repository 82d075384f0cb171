use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Theme, GLYPH_CELL};
use crate::game::{GameState, Phase};
use crate::snake::Position;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{
    render_defeat_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Host-owned screen layered over the simulation state.
///
/// Start and pause live in the host, not in [`Phase`], so the renderer is
/// told about them explicitly.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Overlay {
    None,
    Start,
    Paused,
}

/// Renders the full game frame from immutable state.
pub fn render(
    frame: &mut Frame<'_>,
    state: &GameState,
    theme: &Theme,
    info: &HudInfo,
    overlay: Overlay,
) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme, info);
    let board = board_rect(play_area, state.grid_size());

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match overlay {
        Overlay::Start => {
            render_start_menu(frame, play_area, info.high_score, theme);
            return;
        }
        Overlay::Paused => {
            render_pause_menu(frame, play_area, theme);
            return;
        }
        Overlay::None => {}
    }

    match state.phase {
        Phase::Victory => render_victory_menu(frame, play_area, state.score, theme),
        Phase::Defeat => render_defeat_menu(frame, play_area, state.score, info.high_score, theme),
        Phase::Playing => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = cell_to_screen(inner, state.food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();

    // Tail to head, so the head glyph wins on the frozen defeat frame.
    let segments: Vec<Position> = state.snake.segments().copied().collect();
    for (index, segment) in segments.iter().enumerate().rev() {
        let Some((x, y)) = cell_to_screen(inner, *segment) else {
            continue;
        };

        let color = if index == 0 {
            theme.snake_head
        } else {
            theme.snake_body
        };
        buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(color));
    }
}

/// Centers the bordered board inside `area`, two terminal columns per cell.
fn board_rect(area: Rect, grid_size: i32) -> Rect {
    let cells = u16::try_from(grid_size).unwrap_or(u16::MAX);
    let width = cells.saturating_mul(2).saturating_add(2).min(area.width);
    let height = cells.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps a logical cell to its terminal column/row, clipping to `inner`.
fn cell_to_screen(inner: Rect, cell: Position) -> Option<(u16, u16)> {
    let cell_x = u16::try_from(cell.x).ok()?;
    let cell_y = u16::try_from(cell.y).ok()?;

    let x = inner.x.checked_add(cell_x.checked_mul(2)?)?;
    let y = inner.y.checked_add(cell_y)?;
    (x.saturating_add(1) < inner.right() && y < inner.bottom()).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::snake::Position;

    use super::{board_rect, cell_to_screen};

    #[test]
    fn board_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 80, 24);
        let board = board_rect(area, 20);

        assert_eq!(board.width, 42);
        assert_eq!(board.height, 22);
        assert_eq!(board.x, 19);
        assert_eq!(board.y, 1);

        let tiny = board_rect(Rect::new(0, 0, 10, 5), 20);
        assert!(tiny.width <= 10 && tiny.height <= 5);
    }

    #[test]
    fn cells_outside_the_inner_area_are_clipped() {
        let inner = Rect::new(1, 1, 40, 20);

        assert_eq!(cell_to_screen(inner, Position { x: 0, y: 0 }), Some((1, 1)));
        assert_eq!(
            cell_to_screen(inner, Position { x: 19, y: 19 }),
            Some((39, 20))
        );
        assert_eq!(cell_to_screen(inner, Position { x: 20, y: 0 }), None);
        assert_eq!(cell_to_screen(inner, Position { x: -1, y: 0 }), None);
    }
}
