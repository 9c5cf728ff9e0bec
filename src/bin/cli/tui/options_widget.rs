use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &mut TuiState) {
    let block = Block::default()
        .title(" Answer ")
        .borders(Borders::ALL)
        .border_style(if state.mode == Mode::Quiz {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    let Some(question) = state.question() else {
        state.options_area = None;
        return;
    };

    let catalog = state.session.engine().catalog();
    let count = question.options.len() as u32;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(rows[0]);

    for (idx, (token, cell)) in question.options.iter().zip(cells.iter()).enumerate() {
        let selected = state.selected == Some(idx);
        let label = format!("{}  {}", idx + 1, catalog.option_label(token, question.direction));
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let option = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        f.render_widget(option, *cell);
    }

    if let Some(ref line) = state.result_line {
        let result = Paragraph::new(format!(" {}", line)).style(Style::default().fg(Color::Yellow));
        f.render_widget(result, rows[1]);
    }

    // Save area for mouse hit-testing
    state.options_area = Some(rows[0]);
}
