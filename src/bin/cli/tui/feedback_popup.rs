use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Centered result box drawn over `area`
pub fn draw(f: &mut Frame, area: Rect, correct: bool, message: &str) {
    let width = (message.chars().count() as u16 + 6).min(area.width);
    let height = 3.min(area.height);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    // Clear the area behind the popup
    f.render_widget(Clear, popup);

    let color = if correct { Color::Green } else { Color::Red };
    let paragraph = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
    f.render_widget(paragraph, popup);
}
