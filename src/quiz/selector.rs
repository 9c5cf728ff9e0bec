//! Next-question selection: direction, review draws and reinforcement bias
//!
//! The previous target is removed from the candidate list before sampling,
//! so a question never repeats the one before it and no retry loop is
//! needed.

use super::catalog::Catalog;
use super::models::{Direction, Level, Progress, Token};
use super::random::RandomSource;
use crate::config::QuizConfig;

/// Probabilities that drive selection
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRules {
    /// Progress fraction from which reverse questions may appear
    pub reverse_trigger: f64,
    pub reverse_probability: f64,
    /// Chance of a review draw from earlier levels
    pub surprise_probability: f64,
    /// Secondary images cycle below this progress percent
    pub media_cycle_percent: f64,
}

impl From<&QuizConfig> for SelectionRules {
    fn from(config: &QuizConfig) -> Self {
        Self {
            reverse_trigger: config.reverse_trigger,
            reverse_probability: config.reverse_probability,
            surprise_probability: config.surprise_probability,
            media_cycle_percent: config.media_cycle_percent,
        }
    }
}

impl Default for SelectionRules {
    fn default() -> Self {
        Self::from(&QuizConfig::default())
    }
}

/// Independent per-question draw; never reverse below the trigger
pub fn choose_direction<R: RandomSource>(
    progress: Progress,
    rules: &SelectionRules,
    rng: &mut R,
) -> Direction {
    if progress.fraction >= rules.reverse_trigger && rng.chance(rules.reverse_probability) {
        Direction::Reverse
    } else {
        Direction::Normal
    }
}

/// Pick the next target token at `level`, never equal to `previous`.
///
/// Above level 1 a review draw takes a token from any earlier level;
/// otherwise the level's weighted draw pool is used. Returns `None` only
/// when every candidate equals `previous`, which validated catalogs rule out.
pub fn draw_target<R: RandomSource>(
    catalog: &Catalog,
    level: Level,
    previous: Option<&Token>,
    rules: &SelectionRules,
    rng: &mut R,
) -> Option<Token> {
    let review = level > Level::FIRST && rng.chance(rules.surprise_probability);
    let candidates = if review {
        catalog.tokens_below(level)
    } else {
        catalog.draw_pool(level)
    };

    let eligible: Vec<Token> = candidates
        .into_iter()
        .filter(|t| Some(t) != previous)
        .collect();

    let picked = rng.pick(&eligible).cloned();
    if review {
        log::debug!("Review draw at level {}: {:?}", level, picked);
    }
    picked
}

/// Whether secondary images should cycle for the next question
pub fn should_cycle_media(progress: Progress, rules: &SelectionRules, show_images: bool) -> bool {
    show_images && progress.fraction * 100.0 < rules.media_cycle_percent
}
