use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let status = state.session.status();

    let block = Block::default()
        .title(" Hiragana ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let score_line = Line::from(vec![
        Span::raw(" Points: "),
        Span::styled(
            status.score.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   Penalty per mistake: {} points", status.penalty_preview),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(score_line), rows[0]);

    let mut level_spans = vec![Span::raw(format!(
        " Level {} of {}",
        status.level, status.max_level
    ))];
    if status.mixed_mode {
        level_spans.push(Span::styled(
            "  Mixed mode",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(level_spans)), rows[1]);

    let percent = status.progress_percent.round().clamp(0.0, 100.0) as u16;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(percent)
        .label(format!("{}%", percent));
    f.render_widget(gauge, rows[2]);
}
