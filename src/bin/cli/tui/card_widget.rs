use std::path::Path;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::TuiState;

/// Stimulus, video and vocab panels side by side
pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    draw_stimulus(f, panels[0], state);
    draw_video(f, panels[1], state);
    draw_vocab(f, panels[2], state);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn dim(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(Color::DarkGray)))
}

fn path_line(path: &Path) -> Line<'static> {
    Line::from(Span::styled(
        path.display().to_string(),
        Style::default().fg(Color::Cyan),
    ))
}

fn draw_stimulus(f: &mut Frame, area: Rect, state: &TuiState) {
    let block = panel(" Character ");

    let Some(question) = state.question() else {
        let paragraph = Paragraph::new(vec![Line::from(""), dim("  No question")]).block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let catalog = state.session.engine().catalog();
    let stimulus = catalog.stimulus(&question.target, question.direction);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            stimulus,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(question.direction.prompt()),
        dim("p: play sound"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_video(f: &mut Frame, area: Rect, state: &TuiState) {
    let lines = match state.stimulus_video() {
        Some(path) => vec![Line::from(""), path_line(&path)],
        None if state.question().is_some() => vec![Line::from(""), dim("Video hidden in reverse mode")],
        None => vec![],
    };

    let paragraph = Paragraph::new(lines)
        .block(panel(" Video "))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_vocab(f: &mut Frame, area: Rect, state: &TuiState) {
    let lines = if !state.session.show_vocab_images() {
        vec![Line::from(""), dim("Images off (v)")]
    } else {
        match state.vocab_image() {
            Some(path) => {
                let cycling = if state.media_cycle.is_running() { "cycling" } else { "fixed" };
                vec![
                    Line::from(""),
                    path_line(&path),
                    dim(format!("image {} ({})", state.media_cycle.slot() + 1, cycling)),
                    dim("a: play word"),
                ]
            }
            None => vec![],
        }
    };

    let paragraph = Paragraph::new(lines)
        .block(panel(" Vocabulary "))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
