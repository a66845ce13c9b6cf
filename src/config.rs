use std::time::Duration;

use ratatui::style::Color;

/// Logical play-field width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Logical play-field height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Named speed tiers, as tick intervals.
pub const SPEED_VERY_SLOW: Duration = Duration::from_millis(250);
pub const SPEED_SLOW: Duration = Duration::from_millis(200);
pub const SPEED_NORMAL: Duration = Duration::from_millis(150);
pub const SPEED_FAST: Duration = Duration::from_millis(100);
pub const SPEED_VERY_FAST: Duration = Duration::from_millis(75);

/// Sleep between render frames; input polling and tick checks run at this
/// cadence, independent of the simulation speed.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Snake head glyphs by travel direction.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Body, tail, food and wall glyphs.
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_WALL: &str = "▒";

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub wall: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green-garden palette close to the original arcade look.
pub const THEME_GARDEN: Theme = Theme {
    name: "Garden",
    snake_head: Color::Green,
    snake_body: Color::LightGreen,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    wall: Color::Yellow,
    border_fg: Color::Green,
    hud_text: Color::White,
    hud_accent: Color::LightGreen,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Classic blue snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Blue,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    wall: Color::Gray,
    border_fg: Color::White,
    hud_text: Color::White,
    hud_accent: Color::Blue,
    menu_title: Color::Blue,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    wall: Color::Cyan,
    border_fg: Color::Magenta,
    hud_text: Color::Magenta,
    hud_accent: Color::Yellow,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_GARDEN, THEME_CLASSIC, THEME_NEON];

/// Looks a theme up by case-insensitive name; `None` when unknown.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}
