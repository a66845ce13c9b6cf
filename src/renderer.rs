use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    Theme, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, GLYPH_WALL,
};
use crate::game::GameRound;
use crate::grid::{GridSize, Position};
use crate::input::Direction;
use crate::ui::hud::{render_hud, HudInfo};

/// Renders the play field and HUD from immutable round state.
///
/// Scene overlays (start, pause, game over) are drawn by the caller on
/// top of this.
pub fn render(frame: &mut Frame<'_>, round: &GameRound, info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, round, info);

    let block = Block::bordered().border_style(Style::new().fg(info.theme.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_walls(frame, inner, round, info.theme);
    render_food(frame, inner, round, info.theme);
    render_snake(frame, inner, round, info.theme);
}

fn render_walls(frame: &mut Frame<'_>, inner: Rect, round: &GameRound, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for wall in round.levels.walls() {
        let Some((x, y)) = logical_to_terminal(inner, round.bounds(), *wall) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_WALL, Style::new().fg(theme.wall));
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, round: &GameRound, theme: &Theme) {
    if !round.food.is_active() {
        return;
    }
    let Some((x, y)) = logical_to_terminal(inner, round.bounds(), round.food.position()) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, round: &GameRound, theme: &Theme) {
    let head = round.snake.head();
    let tail = round.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in round.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, round.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            let glyph = head_glyph(round.snake.direction());
            buffer.set_string(
                x,
                y,
                glyph,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
