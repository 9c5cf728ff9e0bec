use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::app_state::{Mode, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent, now: Instant) {
    // Clear flash message on any keypress
    state.flash_message = None;

    match state.mode {
        Mode::Quiz => handle_quiz_key(state, key, now),
        Mode::Feedback { .. } => handle_feedback_key(state, key),
    }
}

fn handle_quiz_key(state: &mut TuiState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                state.select(digit as usize - 1);
            }
        }
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
            state.select_next();
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
            state.select_prev();
        }
        KeyCode::Enter | KeyCode::Char(' ') => state.submit(now),
        KeyCode::Char('v') => state.toggle_vocab_images(now),
        KeyCode::Char('p') => state.play_stimulus(),
        KeyCode::Char('a') => state.play_vocab(),
        KeyCode::Char('R') => state.reset_score(now),
        _ => {}
    }
}

// Answers are locked while feedback is up; the next question arrives on tick
fn handle_feedback_key(state: &mut TuiState, key: KeyEvent) {
    if let KeyCode::Char('q') | KeyCode::Esc = key.code {
        state.quit = true;
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent, now: Instant) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || state.mode != Mode::Quiz {
        return;
    }

    let (col, row) = (mouse.column, mouse.row);
    let Some(area) = state.options_area else {
        return;
    };
    if col < area.x || col >= area.x + area.width || row < area.y || row >= area.y + area.height {
        return;
    }

    let count = state.option_count();
    if count == 0 || area.width == 0 {
        return;
    }
    let clicked_idx = ((col - area.x) as usize * count) / area.width as usize;

    if state.selected == Some(clicked_idx) {
        // Click the selected option again: submit it
        state.submit(now);
    } else {
        state.select(clicked_idx);
    }
}
