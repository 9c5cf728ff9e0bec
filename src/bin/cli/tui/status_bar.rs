use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    let mut text = match state.mode {
        Mode::Quiz => {
            " 1-4/arrows: select  Enter: answer  p: sound  v: images  R: reset  q: quit ".to_string()
        }
        Mode::Feedback { .. } => " Next question coming up...  q: quit ".to_string(),
    };
    if let Some(ref path) = state.last_media_request {
        text.push_str(&format!(" | playing {}", path.display()));
    }

    let status = Paragraph::new(text)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}
