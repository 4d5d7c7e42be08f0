use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::layout::calculate_quiz_chunks;
use super::{help_line, status_line, GOLD};
use crate::app::App;
use crate::models::AnswerOutcome;
use crate::utils::{format_time, truncate_string, TimerUrgency};

pub fn draw_quiz(f: &mut Frame, app: &App) {
    let session = &app.session;
    let Some(question) = session.current_question() else {
        return;
    };
    let layout = calculate_quiz_chunks(f.area());

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(layout.header_area);

    let level = session
        .selected_difficulty()
        .map(|difficulty| difficulty.label())
        .unwrap_or("");
    let progress = format!(
        "Question {}/{}  ·  {}  ·  Score {}",
        session.current_index() + 1,
        session.active_questions().len(),
        level,
        session.score()
    );
    let title = Paragraph::new(truncate_string(
        &progress,
        header_chunks[0].width.saturating_sub(2) as usize,
    ))
    .style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Left)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, header_chunks[0]);

    let timer = if session.is_timed_mode() {
        let time_left = session.time_left();
        let color = match TimerUrgency::for_time_left(time_left) {
            TimerUrgency::Calm => Color::Green,
            TimerUrgency::Warning => Color::Yellow,
            TimerUrgency::Danger => Color::Red,
        };
        Paragraph::new(format!("⏳ {}", format_time(time_left)))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
    } else {
        Paragraph::new("🏛 Untimed").style(Style::default().fg(Color::DarkGray))
    };
    f.render_widget(
        timer
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        header_chunks[1],
    );

    let question_block = Paragraph::new(Text::from(question.text.as_str()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Question"),
        );
    f.render_widget(question_block, layout.question_area);

    let finished = session.answers_locked() || session.is_time_up();
    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_selected = session.selected_option() == Some(option.as_str());
            let (marker, style) = if finished && question.is_correct(option) {
                ("✓ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            } else if finished && is_selected {
                ("✗ ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            } else if finished {
                ("  ", Style::default().fg(Color::DarkGray))
            } else if i == app.option_cursor {
                ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default())
            };
            ListItem::new(format!("{}{}. {}", marker, i + 1, option)).style(style)
        })
        .collect();
    let options = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if finished {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Cyan)
            })
            .title("Options"),
    );
    f.render_widget(options, layout.options_area);

    let mut feedback = Vec::new();
    match app.last_outcome {
        Some(AnswerOutcome::Correct) => feedback.push(Line::from(Span::styled(
            "✓ Correct! The gods smile upon you.",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))),
        Some(AnswerOutcome::Incorrect) => feedback.push(Line::from(vec![
            Span::styled(
                "✗ Wrong. ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::from(format!("The answer was: {}", question.correct_answer)),
        ])),
        _ => {}
    }
    if let Some(hint) = session.revealed_hint() {
        feedback.push(Line::from(vec![
            Span::styled(
                "💡 Hint: ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(hint.to_string()),
        ]));
    }
    if let Some(status) = &app.status {
        feedback.push(status_line(status));
    }
    let feedback_block = Paragraph::new(feedback)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback_block, layout.feedback_area);

    let enter_label = if !finished {
        "Answer"
    } else if session.is_last_question() {
        "See results"
    } else {
        "Next"
    };
    let rules = session.rules();
    let help = Paragraph::new(vec![
        help_line(&[
            ("↑/↓", "Navigate"),
            ("1-9", "Answer"),
            ("Enter", enter_label),
        ]),
        help_line(&[("h", "Hint"), ("Esc", "Leave quiz")]),
        Line::from(Span::styled(
            format!(
                "Hints: {}/{}",
                session.hints_remaining(),
                rules.max_hints
            ),
            Style::default().fg(Color::Magenta),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
