use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::layout::calculate_summary_chunks;
use super::{help_line, status_line, GOLD};
use crate::app::App;
use crate::results::{Rank, ResultSummary};

fn rank_color(rank: Rank) -> Color {
    match rank {
        Rank::LegendaryHero => GOLD,
        Rank::BraveHero => Color::Green,
        Rank::Apprentice => Color::Yellow,
        Rank::MereMortal => Color::Red,
    }
}

pub fn draw_summary(f: &mut Frame, app: &App) {
    let layout = calculate_summary_chunks(f.area());
    let summary = ResultSummary::from_session(&app.session);

    let title = Paragraph::new("Quiz Complete!")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            summary.rank.title(),
            Style::default()
                .fg(rank_color(summary.rank))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::from("Score: "),
            Span::styled(
                format!("{}/{}", summary.score, summary.total),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::from(format!("  ({}%)", summary.percentage)),
        ]),
        Line::from(""),
        Line::from(summary.rank.message()),
    ];
    if let Some(difficulty) = app.session.selected_difficulty() {
        lines.push(Line::from(Span::styled(
            format!(
                "Level: {}  ·  {}",
                difficulty.label(),
                if app.session.is_timed_mode() {
                    "Timed"
                } else {
                    "Untimed"
                }
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if summary.is_perfect() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "⚡ Perfect score! Zeus himself salutes you.",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(hints) = summary.hints_line() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::Magenta),
        )));
    }
    if let Some(status) = &app.status {
        lines.push(Line::from(""));
        lines.push(status_line(status));
    }

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(content, layout.content_area);

    let help = Paragraph::new(help_line(&[
        ("r/Enter", "Play again"),
        ("Esc", "Levels"),
        ("q", "Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
