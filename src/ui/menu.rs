use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::layout::calculate_menu_chunks;
use super::{help_line, status_line, BRONZE, GOLD};
use crate::app::App;
use crate::models::Difficulty;

fn draw_title(f: &mut Frame, area: Rect, subtitle: &str) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "🏛  Greek Mythology Quiz",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::Cyan),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: Option<&App>, keys: &[(&str, &str)]) {
    let mut lines = vec![help_line(keys)];
    if let Some(status) = app.and_then(|app| app.status.as_ref()) {
        lines.push(status_line(status));
    }
    let help = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

fn cursor_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub fn draw_home(f: &mut Frame) {
    let layout = calculate_menu_chunks(f.area());
    draw_title(f, layout.header_area, "Test your knowledge of gods, heroes and myths");

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from("Answer questions about the legends of ancient Greece."),
        Line::from(""),
        Line::from("Choose a level, then play at your own pace or against the clock."),
        Line::from("Stuck? Ask the oracle for a hint, but hints are limited."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to begin",
            Style::default().fg(BRONZE).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.content_area);

    draw_footer(f, layout.footer_area, None, &[("Enter", "Start"), ("q/Esc", "Quit")]);
}

pub fn draw_level_select(f: &mut Frame, app: &App) {
    let layout = calculate_menu_chunks(f.area());
    draw_title(f, layout.header_area, "Choose your level");

    let bank = app.session.bank();
    let items: Vec<ListItem> = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, difficulty)| {
            let selected = i == app.level_cursor;
            let marker = if selected { "> " } else { "  " };
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{}{}. {}", marker, i + 1, difficulty.label()),
                    cursor_style(selected),
                )),
                Line::from(Span::styled(
                    format!(
                        "     {} ({} questions)",
                        difficulty.description(),
                        bank.count_for(*difficulty)
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Levels"),
    );
    f.render_widget(list, layout.content_area);

    draw_footer(
        f,
        layout.footer_area,
        Some(app),
        &[("↑/↓", "Navigate"), ("1-3/Enter", "Select"), ("Esc", "Back")],
    );
}

pub fn draw_mode_select(f: &mut Frame, app: &App) {
    let layout = calculate_menu_chunks(f.area());
    let subtitle = match app.session.selected_difficulty() {
        Some(difficulty) => format!("Level: {}", difficulty.label()),
        None => "Choose a mode".to_string(),
    };
    draw_title(f, layout.header_area, &subtitle);

    let seconds = app.session.rules().seconds_per_question;
    let modes = [
        ("Untimed", "Take as long as you need on each question".to_string()),
        ("Timed", format!("{} seconds per question", seconds)),
    ];
    let items: Vec<ListItem> = modes
        .iter()
        .enumerate()
        .map(|(i, (name, description))| {
            let selected = i == app.mode_cursor;
            let marker = if selected { "> " } else { "  " };
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{}{}", marker, name),
                    cursor_style(selected),
                )),
                Line::from(Span::styled(
                    format!("    {}", description),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Mode"),
    );
    f.render_widget(list, layout.content_area);

    draw_footer(
        f,
        layout.footer_area,
        Some(app),
        &[("↑/↓", "Navigate"), ("Enter", "Play"), ("Esc", "Back")],
    );
}
