pub mod layout;
mod menu;
mod quiz;
mod summary;

use crate::app::{App, StatusKind, StatusMessage};
use crate::models::Screen;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub use layout::{calculate_menu_chunks, calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::{draw_home, draw_level_select, draw_mode_select};
pub use quiz::draw_quiz;
pub use summary::draw_summary;

pub const GOLD: Color = Color::Rgb(253, 209, 67);
pub const BRONZE: Color = Color::Rgb(139, 69, 19);

pub fn draw(f: &mut Frame, app: &App) {
    match app.session.screen() {
        Screen::Home => draw_home(f),
        Screen::LevelSelect => draw_level_select(f, app),
        Screen::ModeSelect => draw_mode_select(f, app),
        Screen::Quiz => draw_quiz(f, app),
        Screen::Result => draw_summary(f, app),
    }
}

/// One help line of `key description` pairs.
pub(crate) fn help_line(keys: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, description)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::from("  "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::from(format!(" {}", description)));
    }
    Line::from(spans)
}

pub(crate) fn status_line(status: &StatusMessage) -> Line<'static> {
    let color = match status.kind {
        StatusKind::Info => Color::Yellow,
        StatusKind::Error => Color::Red,
    };
    Line::from(Span::styled(
        status.text.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}
