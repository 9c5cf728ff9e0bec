use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use rand::rngs::ThreadRng;
use ratatui::prelude::Rect;

use kana_lib::quiz::{AnswerOutcome, MediaCycle, MediaKind, MediaLibrary, Question, RngSource, Session, Token};

use crate::app::{App, CliStore};

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Choosing an option
    Quiz,
    /// Showing the result of the last answer until `until`
    Feedback { correct: bool, message: String, until: Instant },
}

pub struct TuiState {
    pub session: Session<CliStore>,
    rng: RngSource<ThreadRng>,
    pub mode: Mode,

    pub media: MediaLibrary,
    /// The session's only periodic timer; restarted with every question
    pub media_cycle: MediaCycle,
    /// Last media path handed to the player
    pub last_media_request: Option<PathBuf>,

    pub selected: Option<usize>,
    /// Inline result line under the options (e.g. "Select an option.")
    pub result_line: Option<String>,
    pub feedback_delay: Duration,

    // Option row area for mouse hit-testing (updated each draw)
    pub options_area: Option<Rect>,

    pub flash_message: Option<String>,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Result<Self> {
        let session = app.open_session();
        let config = session.engine().config();
        let feedback_delay = Duration::from_millis(config.feedback_delay_ms);
        let media = session.engine().media_library();
        let media_cycle = session.engine().media_cycle();

        let mut state = Self {
            session,
            rng: RngSource::thread(),
            mode: Mode::Quiz,
            media,
            media_cycle,
            last_media_request: None,
            selected: None,
            result_line: None,
            feedback_delay,
            options_area: None,
            flash_message: None,
            quit: false,
        };

        state.next_question(Instant::now());
        Ok(state)
    }

    pub fn question(&self) -> Option<&Question> {
        self.session.question()
    }

    /// Draw a fresh question and restart the media cycle for it
    pub fn next_question(&mut self, now: Instant) {
        if self.session.next_question(&mut self.rng).is_none() {
            self.flash_message = Some("No characters available for this level".to_string());
        }
        self.selected = None;
        self.result_line = None;
        self.last_media_request = None;
        self.mode = Mode::Quiz;
        self.media_cycle
            .restart(self.session.media_cycle_enabled(), now);
    }

    /// Advance timers: end feedback after its delay and cycle vocab images
    pub fn tick(&mut self, now: Instant) {
        if let Mode::Feedback { until, .. } = self.mode {
            if now >= until {
                self.next_question(now);
                return;
            }
        }
        self.media_cycle.tick(now);
    }

    pub fn option_count(&self) -> usize {
        self.question().map(|q| q.options.len()).unwrap_or(0)
    }

    pub fn select(&mut self, idx: usize) {
        if self.mode == Mode::Quiz && idx < self.option_count() {
            self.selected = Some(idx);
            self.result_line = None;
            if let Some(token) = self.selected_token() {
                self.request_media(self.media.primary(&token, MediaKind::Audio));
            }
        }
    }

    pub fn select_next(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        let idx = self.selected.map(|i| (i + 1) % count).unwrap_or(0);
        self.select(idx);
    }

    pub fn select_prev(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        let idx = self
            .selected
            .map(|i| (i + count - 1) % count)
            .unwrap_or(count - 1);
        self.select(idx);
    }

    fn selected_token(&self) -> Option<Token> {
        let question = self.question()?;
        self.selected.and_then(|i| question.options.get(i)).cloned()
    }

    /// Score the selected option and show feedback
    pub fn submit(&mut self, now: Instant) {
        if self.mode != Mode::Quiz {
            return;
        }

        let choice = self.selected_token();
        match self.session.submit(choice.as_ref()) {
            Ok(AnswerOutcome::NoSelection) => {
                self.result_line = Some(AnswerOutcome::NoSelection.message());
            }
            Ok(outcome) => {
                let correct = matches!(outcome, AnswerOutcome::Correct { .. });
                self.mode = Mode::Feedback {
                    correct,
                    message: outcome.message(),
                    until: now + self.feedback_delay,
                };
            }
            Err(e) => {
                self.flash_message = Some(format!("Error saving score: {}", e));
            }
        }
    }

    pub fn toggle_vocab_images(&mut self, now: Instant) {
        let show = !self.session.show_vocab_images();
        self.session.set_show_vocab_images(show);
        self.media_cycle
            .restart(self.session.media_cycle_enabled(), now);
    }

    /// Reset to zero; the image cycle follows the new progress
    pub fn reset_score(&mut self, now: Instant) {
        match self.session.reset_score() {
            Ok(()) => self.flash_message = Some("Score reset".to_string()),
            Err(e) => self.flash_message = Some(format!("Error saving score: {}", e)),
        }
        self.media_cycle
            .restart(self.session.media_cycle_enabled(), now);
    }

    /// Request the stimulus pronunciation
    pub fn play_stimulus(&mut self) {
        if let Some(target) = self.question().map(|q| q.target.clone()) {
            self.request_media(self.media.primary(&target, MediaKind::Audio));
        }
    }

    /// Request the audio for the vocab image on screen
    pub fn play_vocab(&mut self) {
        if !self.session.show_vocab_images() {
            return;
        }
        if let Some(target) = self.question().map(|q| q.target.clone()) {
            let slot = self.media_cycle.slot();
            self.request_media(self.media.vocab_audio(&target, slot));
        }
    }

    /// Hand a path to the player. Playback itself is not wired in the
    /// terminal, so the request is only recorded and logged.
    fn request_media(&mut self, path: PathBuf) {
        log::debug!("Media request: {:?}", path);
        self.last_media_request = Some(path);
    }

    /// Vocab image path for the current slot, if images are shown
    pub fn vocab_image(&self) -> Option<PathBuf> {
        let question = self.question()?;
        self.media.vocab_image(
            &question.target,
            self.media_cycle.slot(),
            self.session.show_vocab_images(),
        )
    }

    pub fn stimulus_video(&self) -> Option<PathBuf> {
        let question = self.question()?;
        self.media.stimulus_video(&question.target, question.direction)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use kana_lib::config::QuizConfig;
    use kana_lib::quiz::QuizEngine;

    use super::*;

    fn test_state() -> TuiState {
        let app = App {
            engine: QuizEngine::hiragana(QuizConfig::default()).unwrap(),
            data_dir: PathBuf::from("unused"),
            ephemeral: true,
        };
        TuiState::new(app).unwrap()
    }

    fn correct_index(state: &TuiState) -> usize {
        let question = state.question().unwrap();
        question
            .options
            .iter()
            .position(|t| *t == question.target)
            .unwrap()
    }

    #[test]
    fn test_opens_with_a_question() {
        let state = test_state();
        assert_eq!(state.option_count(), 4);
        assert_eq!(state.mode, Mode::Quiz);
        assert!(state.media_cycle.is_running());
    }

    #[test]
    fn test_submit_without_selection_shows_prompt() {
        let mut state = test_state();
        state.submit(Instant::now());
        assert_eq!(state.mode, Mode::Quiz);
        assert_eq!(state.result_line.as_deref(), Some("Select an option."));
        assert_eq!(state.session.score(), 0);
    }

    #[test]
    fn test_feedback_then_next_question() {
        let mut state = test_state();
        let start = Instant::now();
        let first = state.question().unwrap().target.clone();

        let idx = correct_index(&state);
        state.select(idx);
        state.submit(start);
        assert!(matches!(state.mode, Mode::Feedback { correct: true, .. }));
        assert_eq!(state.session.score(), 10);

        // Locked until the delay passes
        state.select(0);
        state.tick(start + Duration::from_millis(999));
        assert!(matches!(state.mode, Mode::Feedback { .. }));

        state.tick(start + Duration::from_millis(1000));
        assert_eq!(state.mode, Mode::Quiz);
        assert_eq!(state.selected, None);
        assert_ne!(state.question().unwrap().target, first);
    }

    #[test]
    fn test_toggle_stops_image_cycle() {
        let mut state = test_state();
        state.toggle_vocab_images(Instant::now());
        assert!(!state.media_cycle.is_running());
        assert_eq!(state.vocab_image(), None);
    }

    #[test]
    fn test_reset_restarts_image_cycle() {
        let mut state = test_state();
        let mut now = Instant::now();

        // Three correct answers: 30 points is 60% through level 1
        for _ in 0..3 {
            let idx = correct_index(&state);
            state.select(idx);
            state.submit(now);
            now += state.feedback_delay;
            state.tick(now);
        }
        assert_eq!(state.session.score(), 30);
        assert!(!state.media_cycle.is_running());

        state.reset_score(now);
        assert_eq!(state.session.score(), 0);
        assert!(state.media_cycle.is_running());
        assert_eq!(state.media_cycle.slot(), 0);
    }
}
