use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;

use super::app_state::{Mode, TuiState};
use super::{card_widget, feedback_popup, header_widget, options_widget, status_bar};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Header, media row, quiz panel, status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(7),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(size);

    let header_area = outer[0];
    let card_area = outer[1];
    let quiz_area = outer[2];
    let status_area = outer[3];

    header_widget::draw(f, header_area, state);
    card_widget::draw(f, card_area, state);
    options_widget::draw(f, quiz_area, state);
    status_bar::draw(f, status_area, state);

    if let Mode::Feedback { correct, ref message, .. } = state.mode {
        feedback_popup::draw(f, card_area, correct, message);
    }
}
