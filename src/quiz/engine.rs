//! Validated bundle of configuration and catalog
//!
//! A `QuizEngine` can only be built from a configuration that passed
//! validation, so every selection and scoring call downstream runs on
//! well-formed thresholds and pools.

use super::catalog::Catalog;
use super::distractors::build_options;
use super::levels::{progress, resolve_level};
use super::media::{MediaCycle, MediaLibrary};
use super::models::{Level, Progress, Question, Score, ScoreStatus, Token};
use super::random::RandomSource;
use super::scoring::ScoringRules;
use super::selector::{choose_direction, draw_target, should_cycle_media, SelectionRules};
use crate::config::{ConfigError, QuizConfig};

#[derive(Debug, Clone)]
pub struct QuizEngine {
    config: QuizConfig,
    catalog: Catalog,
    selection: SelectionRules,
    scoring: ScoringRules,
}

impl QuizEngine {
    /// Validate `config` against `catalog` and build the engine
    pub fn new(config: QuizConfig, catalog: Catalog) -> Result<Self, ConfigError> {
        config.validate(&catalog)?;
        let catalog = catalog.with_reinforcement(config.reinforcement.clone());

        Ok(Self {
            selection: SelectionRules::from(&config),
            scoring: ScoringRules::from(&config),
            config,
            catalog,
        })
    }

    /// Stock hiragana catalog with the given configuration
    pub fn hiragana(config: QuizConfig) -> Result<Self, ConfigError> {
        Self::new(config, Catalog::hiragana())
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scoring(&self) -> &ScoringRules {
        &self.scoring
    }

    pub fn level(&self, score: Score) -> Level {
        resolve_level(score, &self.config.thresholds)
    }

    pub fn progress(&self, score: Score) -> Progress {
        progress(score, self.level(score), &self.config.thresholds)
    }

    /// Pick the next question for `score`, never targeting `previous`.
    ///
    /// Draw order: direction, review chance, target, then option shuffles.
    pub fn select_next<R: RandomSource>(
        &self,
        score: Score,
        previous: Option<&Token>,
        rng: &mut R,
    ) -> Option<Question> {
        let level = self.level(score);
        let direction = choose_direction(self.progress(score), &self.selection, rng);
        let target = draw_target(&self.catalog, level, previous, &self.selection, rng)?;
        let options = build_options(&self.catalog, &target, level, rng);

        Some(Question {
            target,
            options,
            direction,
        })
    }

    /// The option set for `target` at `score`
    pub fn build_options<R: RandomSource>(&self, target: &Token, score: Score, rng: &mut R) -> Vec<Token> {
        build_options(&self.catalog, target, self.level(score), rng)
    }

    /// Score after an answer given at `score`
    pub fn apply_answer(&self, score: Score, is_correct: bool) -> Score {
        self.scoring
            .apply_answer(score, is_correct, self.progress(score).percent())
    }

    pub fn penalty_preview(&self, score: Score) -> Score {
        self.scoring.penalty(score, self.progress(score).percent())
    }

    pub fn should_cycle_media(&self, score: Score, show_images: bool) -> bool {
        should_cycle_media(self.progress(score), &self.selection, show_images)
    }

    pub fn status(&self, score: Score) -> ScoreStatus {
        let percent = self.progress(score).percent();
        ScoreStatus {
            score,
            level: self.level(score),
            max_level: self.catalog.max_level(),
            progress_percent: percent,
            penalty_preview: self.scoring.penalty(score, percent),
            mixed_mode: percent >= self.config.mixed_mode_percent,
        }
    }

    pub fn media_library(&self) -> MediaLibrary {
        MediaLibrary::from(&self.config.media)
    }

    pub fn media_cycle(&self) -> MediaCycle {
        MediaCycle::from(&self.config.media)
    }
}
