use std::time::{Duration, Instant};

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameRound;

/// How long the "Level N!" banner stays on the HUD after advancing.
pub const LEVEL_FLASH_DURATION: Duration = Duration::from_secs(2);

/// Supplemental values displayed by the HUD rows.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
    /// Best score of this process lifetime; never persisted.
    pub session_best: u32,
    /// Wall-clock instant of this frame render.
    pub now: Instant,
    /// When the last level advancement happened, for the banner flash.
    pub level_flash_started_at: Option<Instant>,
}

impl HudInfo<'_> {
    fn level_flash_active(&self) -> bool {
        self.level_flash_started_at
            .is_some_and(|started| self.now.duration_since(started) < LEVEL_FLASH_DURATION)
    }
}

/// Renders the two-line HUD below the play field and returns the
/// remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    round: &GameRound,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, score_area, status_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_score_row(frame, score_area, round, info);
    render_status_row(frame, status_area, round, info);

    play_area
}

fn render_score_row(frame: &mut Frame<'_>, area: Rect, round: &GameRound, info: &HudInfo<'_>) {
    let text_style = Style::new().fg(info.theme.hud_text);
    let accent_style = Style::new().fg(info.theme.hud_accent);

    let line = Line::from(vec![
        Span::styled(" Score: ", text_style),
        Span::styled(round.score().to_string(), accent_style),
        Span::styled("   Best: ", text_style),
        Span::styled(info.session_best.to_string(), accent_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if info.level_flash_active() {
        let banner = format!("Level {}! ", round.levels.level_number());
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                banner,
                accent_style.add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Right),
            area,
        );
    }
}

/// Level label on the left, threshold progress bar filling the rest.
fn render_status_row(frame: &mut Frame<'_>, area: Rect, round: &GameRound, info: &HudInfo<'_>) {
    let label = format!(
        " Level {} \u{2013} {} ",
        round.levels.level_number(),
        round.levels.name()
    );
    // Level names are free-form text; measure display columns, not bytes.
    let label_width = u16::try_from(label.width()).unwrap_or(area.width);

    let required = round.levels.required_score();
    let progress = if required == 0 {
        1.0
    } else {
        (f64::from(round.score()) / f64::from(required)).min(1.0)
    };

    let bar_width = area.width.saturating_sub(label_width).saturating_sub(1);
    let filled = (f64::from(bar_width) * progress).round() as u16;
    let filled = filled.min(bar_width);

    let line = Line::from(vec![
        Span::styled(label, Style::new().fg(info.theme.hud_text)),
        Span::styled(
            "█".repeat(usize::from(filled)),
            Style::new().fg(info.theme.hud_accent),
        ),
        Span::styled(
            "░".repeat(usize::from(bar_width - filled)),
            Style::new().fg(info.theme.menu_footer),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
