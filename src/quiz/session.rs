//! Quiz session: explicit state plus persistence
//!
//! `SessionState` is a plain value. The transitions on it are pure and
//! return the next state; `Session` threads that value through them and
//! writes the score back to its store after every change.

use serde::{Deserialize, Serialize};

use super::engine::QuizEngine;
use super::models::{AnswerOutcome, Question, Score, ScoreStatus, Token};
use super::random::RandomSource;
use crate::storage::{load_score, save_score, KeyValueStore, StorageError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub score: Score,
    pub question: Option<Question>,
    /// Set once the current question has been scored
    pub answered: bool,
}

impl SessionState {
    pub fn new(score: Score) -> Self {
        Self {
            score,
            question: None,
            answered: false,
        }
    }

    /// Replace the question wholesale, never repeating the current target
    pub fn with_next_question<R: RandomSource>(self, engine: &QuizEngine, rng: &mut R) -> Self {
        let previous = self.question.as_ref().map(|q| &q.target);
        let question = engine.select_next(self.score, previous, rng);
        if question.is_none() {
            log::warn!("No eligible token at score {}", self.score);
        }

        Self {
            score: self.score,
            question,
            answered: false,
        }
    }

    /// Score `selection` against the current question.
    ///
    /// No selection, no question, or a question already answered yields
    /// `NoSelection` and leaves the state untouched.
    pub fn answer(self, engine: &QuizEngine, selection: Option<&Token>) -> (Self, AnswerOutcome) {
        let Some(choice) = selection.filter(|_| !self.answered) else {
            return (self, AnswerOutcome::NoSelection);
        };
        let Some(question) = self.question.as_ref() else {
            return (self, AnswerOutcome::NoSelection);
        };

        let is_correct = question.is_correct(choice);
        let new_score = engine.apply_answer(self.score, is_correct);
        let outcome = if is_correct {
            AnswerOutcome::Correct {
                reward: new_score - self.score,
                new_score,
            }
        } else {
            AnswerOutcome::Incorrect {
                expected: question.target.clone(),
                penalty: self.score - new_score,
                new_score,
            }
        };

        let next = Self {
            score: new_score,
            question: self.question,
            answered: true,
        };
        (next, outcome)
    }
}

/// A learner's running session against a score store
pub struct Session<S: KeyValueStore> {
    engine: QuizEngine,
    store: S,
    state: SessionState,
    show_vocab_images: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Start a session from the persisted score (zero if missing or corrupt)
    pub fn open(engine: QuizEngine, store: S) -> Self {
        let score = load_score(&store);
        log::info!("Opened session at score {} (level {})", score, engine.level(score));
        let show_vocab_images = engine.config().media.show_vocab_images;

        Self {
            engine,
            store,
            state: SessionState::new(score),
            show_vocab_images,
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn question(&self) -> Option<&Question> {
        self.state.question.as_ref()
    }

    pub fn is_answered(&self) -> bool {
        self.state.answered
    }

    /// Select the next question. The presentation layer calls this after
    /// its feedback delay.
    pub fn next_question<R: RandomSource>(&mut self, rng: &mut R) -> Option<&Question> {
        let state = std::mem::take(&mut self.state);
        self.state = state.with_next_question(&self.engine, rng);
        self.state.question.as_ref()
    }

    /// Score the learner's choice and persist the new score.
    ///
    /// The state only moves on once the save succeeds; on a storage error
    /// the question stays unanswered and can be submitted again.
    pub fn submit(&mut self, selection: Option<&Token>) -> Result<AnswerOutcome, StorageError> {
        let before = self.state.score;
        let (state, outcome) = self.state.clone().answer(&self.engine, selection);

        if let Some(new_score) = outcome.new_score() {
            save_score(&self.store, new_score)?;
            self.log_level_change(before, new_score);
        }
        self.state = state;
        Ok(outcome)
    }

    /// Set the score back to zero and persist it
    pub fn reset_score(&mut self) -> Result<(), StorageError> {
        save_score(&self.store, 0)?;
        let before = std::mem::replace(&mut self.state.score, 0);
        self.log_level_change(before, 0);
        Ok(())
    }

    pub fn status(&self) -> ScoreStatus {
        self.engine.status(self.state.score)
    }

    pub fn show_vocab_images(&self) -> bool {
        self.show_vocab_images
    }

    pub fn set_show_vocab_images(&mut self, show: bool) {
        self.show_vocab_images = show;
    }

    /// Whether secondary images should cycle for the current question
    pub fn media_cycle_enabled(&self) -> bool {
        self.engine
            .should_cycle_media(self.state.score, self.show_vocab_images)
    }

    fn log_level_change(&self, before: Score, after: Score) {
        let (old, new) = (self.engine.level(before), self.engine.level(after));
        if old != new {
            log::info!("Level changed from {} to {} at score {}", old, new, after);
        }
    }
}
