//! Data models for the quiz engine

use std::fmt;

use serde::{Deserialize, Serialize};

/// Points accumulated by the learner. Never negative.
pub type Score = u32;

/// A learnable unit, identified by its romanized syllable (e.g. "ka")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(romaji: impl Into<String>) -> Self {
        Self(romaji.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Difficulty tier, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "usize", try_from = "usize")]
pub struct Level(usize);

impl Level {
    pub const FIRST: Level = Level(1);

    /// Build a level from its 1-based number. Zero is bumped to the first level.
    pub fn new(number: usize) -> Self {
        Self(number.max(1))
    }

    pub fn number(self) -> usize {
        self.0
    }

    /// 0-based index into per-level tables
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl TryFrom<usize> for Level {
    type Error = String;

    fn try_from(number: usize) -> Result<Self, Self::Error> {
        if number == 0 {
            return Err("level numbers start at 1".to_string());
        }
        Ok(Self(number))
    }
}

impl From<Level> for usize {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position between the current level's threshold and the next one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Raw fraction; may exceed 1.0 past the last threshold
    pub fraction: f64,
}

impl Progress {
    pub fn new(fraction: f64) -> Self {
        Self { fraction }
    }

    /// Progress as a percentage clamped to [0, 100]
    pub fn percent(self) -> f64 {
        (self.fraction * 100.0).clamp(0.0, 100.0)
    }
}

/// Which side of the card is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Glyph shown, romanization chosen
    #[default]
    Normal,
    /// Romanization shown, glyph chosen
    Reverse,
}

impl Direction {
    pub fn is_reverse(self) -> bool {
        self == Direction::Reverse
    }

    /// Question text shown above the options
    pub fn prompt(self) -> &'static str {
        match self {
            Direction::Normal => "How is this character read?",
            Direction::Reverse => "Which symbol makes this sound?",
        }
    }
}

/// One multiple-choice question. Built fresh for every draw and replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub target: Token,
    /// Exactly four distinct tokens, `target` among them once
    pub options: Vec<Token>,
    pub direction: Direction,
}

impl Question {
    pub fn is_correct(&self, choice: &Token) -> bool {
        *choice == self.target
    }
}

/// Result of submitting an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnswerOutcome {
    /// Submitted without choosing an option; nothing changes
    NoSelection,
    Correct {
        reward: Score,
        new_score: Score,
    },
    Incorrect {
        expected: Token,
        penalty: Score,
        new_score: Score,
    },
}

impl AnswerOutcome {
    /// Feedback line shown to the learner
    pub fn message(&self) -> String {
        match self {
            AnswerOutcome::NoSelection => "Select an option.".to_string(),
            AnswerOutcome::Correct { .. } => "Correct!".to_string(),
            AnswerOutcome::Incorrect { expected, .. } => format!("Incorrect. It was: {}", expected),
        }
    }

    pub fn new_score(&self) -> Option<Score> {
        match self {
            AnswerOutcome::NoSelection => None,
            AnswerOutcome::Correct { new_score, .. } | AnswerOutcome::Incorrect { new_score, .. } => {
                Some(*new_score)
            }
        }
    }
}

/// Snapshot of where the learner stands, for headers and `status` output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreStatus {
    pub score: Score,
    pub level: Level,
    pub max_level: Level,
    pub progress_percent: f64,
    /// What a wrong answer would cost right now
    pub penalty_preview: Score,
    pub mixed_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent_is_clamped() {
        assert_eq!(Progress::new(-0.2).percent(), 0.0);
        assert_eq!(Progress::new(0.4).percent(), 40.0);
        assert_eq!(Progress::new(1.7).percent(), 100.0);
    }

    #[test]
    fn test_level_zero_becomes_first() {
        assert_eq!(Level::new(0), Level::FIRST);
        assert_eq!(Level::new(3).index(), 2);
    }

    #[test]
    fn test_level_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Level::new(3)).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Level>("2").unwrap(), Level::new(2));
        assert!(serde_json::from_str::<Level>("0").is_err());
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(AnswerOutcome::NoSelection.message(), "Select an option.");
        let wrong = AnswerOutcome::Incorrect {
            expected: Token::from("shi"),
            penalty: 10,
            new_score: 0,
        };
        assert_eq!(wrong.message(), "Incorrect. It was: shi");
        assert_eq!(wrong.new_score(), Some(0));
        assert_eq!(AnswerOutcome::NoSelection.new_score(), None);
    }
}
