//! Quiz configuration
//!
//! Loaded from an optional TOML file. Every field has a default, so an
//! empty or partial file yields the stock hiragana rules. Validation runs
//! once at startup; a rejected configuration is fatal.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz::catalog::Catalog;
use crate::quiz::models::{Level, Score, Token};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Extra draw weight for a set of tokens at one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Reinforcement {
    /// 1-based level whose draw pool gets the extra copies
    pub level: usize,
    pub tokens: Vec<Token>,
    /// How many additional times each token is listed
    #[serde(default = "default_extra_copies")]
    pub extra_copies: usize,
}

fn default_extra_copies() -> usize {
    3
}

/// Penalty schedule for wrong answers, tiered by progress percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyConfig {
    /// At or above this progress percent the penalty scales with the score
    pub high_tier_percent: f64,
    /// At or above this progress percent the flat mid penalty applies
    pub mid_tier_percent: f64,
    /// Share of the score taken in the high tier, rounded to a multiple of 10
    pub high_tier_rate: f64,
    pub mid_tier_penalty: Score,
    pub low_tier_penalty: Score,
    /// Used when the high-tier share rounds to zero
    pub minimum_penalty: Score,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            high_tier_percent: 80.0,
            mid_tier_percent: 50.0,
            high_tier_rate: 0.15,
            mid_tier_penalty: 30,
            low_tier_penalty: 10,
            minimum_penalty: 10,
        }
    }
}

/// Media path and cycling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Directory holding `{token}/{token}.{ext}` assets
    pub root: PathBuf,
    /// How long each secondary image stays up
    pub cycle_ms: u64,
    /// Number of secondary images per token
    pub slots: usize,
    /// Initial state of the vocab image toggle
    pub show_vocab_images: bool,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("hiragana"),
            cycle_ms: 5000,
            slots: 2,
            show_vocab_images: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Minimum score for each level; the first entry must be 0
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<Score>,

    /// Progress fraction from which reverse questions may appear
    #[serde(default = "default_reverse_trigger")]
    pub reverse_trigger: f64,

    /// Chance of a reverse question once the trigger is reached
    #[serde(default = "default_reverse_probability")]
    pub reverse_probability: f64,

    /// Chance of drawing a review token from an earlier level
    #[serde(default = "default_surprise_probability")]
    pub surprise_probability: f64,

    #[serde(default = "default_correct_reward")]
    pub correct_reward: Score,

    #[serde(default)]
    pub penalty: PenaltyConfig,

    /// Progress percent at which the level is shown as "mixed mode"
    #[serde(default = "default_mixed_mode_percent")]
    pub mixed_mode_percent: f64,

    /// Secondary images cycle only below this progress percent
    #[serde(default = "default_media_cycle_percent")]
    pub media_cycle_percent: f64,

    /// Pause between answer feedback and the next question
    #[serde(default = "default_feedback_delay_ms")]
    pub feedback_delay_ms: u64,

    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default = "default_reinforcement")]
    pub reinforcement: Vec<Reinforcement>,
}

fn default_thresholds() -> Vec<Score> {
    vec![0, 50, 5000, 6000, 12000]
}

fn default_reverse_trigger() -> f64 {
    0.2
}

fn default_reverse_probability() -> f64 {
    0.7
}

fn default_surprise_probability() -> f64 {
    0.1
}

fn default_correct_reward() -> Score {
    10
}

fn default_mixed_mode_percent() -> f64 {
    50.0
}

fn default_media_cycle_percent() -> f64 {
    50.0
}

fn default_feedback_delay_ms() -> u64 {
    1000
}

fn default_reinforcement() -> Vec<Reinforcement> {
    vec![Reinforcement {
        level: 2,
        tokens: ["sa", "ke", "ko", "i", "se", "so"]
            .iter()
            .map(|t| Token::from(*t))
            .collect(),
        extra_copies: default_extra_copies(),
    }]
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            thresholds: default_thresholds(),
            reverse_trigger: default_reverse_trigger(),
            reverse_probability: default_reverse_probability(),
            surprise_probability: default_surprise_probability(),
            correct_reward: default_correct_reward(),
            penalty: PenaltyConfig::default(),
            mixed_mode_percent: default_mixed_mode_percent(),
            media_cycle_percent: default_media_cycle_percent(),
            feedback_delay_ms: default_feedback_delay_ms(),
            media: MediaConfig::default(),
            reinforcement: default_reinforcement(),
        }
    }
}

impl QuizConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            log::info!("Loading quiz config from {:?}", path);
            Self::from_file(path)
        } else {
            log::debug!("No quiz config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Default config location (e.g., ~/.config/kana/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kana").join("config.toml"))
    }

    /// Check the configuration against a catalog. Any failure here is a
    /// startup fault: the quiz must not run with these settings.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        self.validate_thresholds(catalog)?;

        for (name, value) in [
            ("reverse_trigger", self.reverse_trigger),
            ("reverse_probability", self.reverse_probability),
            ("surprise_probability", self.surprise_probability),
            ("penalty.high_tier_rate", self.penalty.high_tier_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{} must be within [0, 1], got {}", name, value)));
            }
        }

        for (name, value) in [
            ("penalty.high_tier_percent", self.penalty.high_tier_percent),
            ("penalty.mid_tier_percent", self.penalty.mid_tier_percent),
            ("mixed_mode_percent", self.mixed_mode_percent),
            ("media_cycle_percent", self.media_cycle_percent),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(invalid(format!("{} must be within [0, 100], got {}", name, value)));
            }
        }

        if self.penalty.mid_tier_percent > self.penalty.high_tier_percent {
            return Err(invalid("penalty.mid_tier_percent exceeds penalty.high_tier_percent"));
        }

        if self.media.slots == 0 {
            return Err(invalid("media.slots must be at least 1"));
        }

        self.validate_pools(catalog)?;
        self.validate_reinforcement(catalog)
    }

    fn validate_thresholds(&self, catalog: &Catalog) -> Result<()> {
        match self.thresholds.first() {
            None => return Err(invalid("thresholds must not be empty")),
            Some(&first) if first != 0 => {
                return Err(invalid(format!("first threshold must be 0, got {}", first)))
            }
            _ => {}
        }

        // Equal neighbours would make a zero-width level and divide by zero
        // when computing progress.
        if let Some(pair) = self.thresholds.windows(2).find(|w| w[0] >= w[1]) {
            return Err(invalid(format!(
                "thresholds must be strictly ascending ({} is followed by {})",
                pair[0], pair[1]
            )));
        }

        if self.thresholds.len() != catalog.level_count() {
            return Err(invalid(format!(
                "{} thresholds configured for {} levels",
                self.thresholds.len(),
                catalog.level_count()
            )));
        }

        Ok(())
    }

    fn validate_pools(&self, catalog: &Catalog) -> Result<()> {
        for number in 1..=catalog.level_count() {
            let level = Level::new(number);
            let distinct: HashSet<&Token> = catalog.tokens_at(level).iter().collect();
            if distinct.len() < 2 {
                return Err(invalid(format!(
                    "level {} needs at least 2 distinct tokens",
                    level
                )));
            }
        }

        // One correct answer plus three distractors from the first level alone
        if catalog.tokens_up_to(Level::FIRST).len() < 4 {
            return Err(invalid("level 1 needs at least 4 distinct tokens"));
        }

        Ok(())
    }

    fn validate_reinforcement(&self, catalog: &Catalog) -> Result<()> {
        for entry in &self.reinforcement {
            if entry.level == 0 || entry.level > catalog.level_count() {
                return Err(invalid(format!(
                    "reinforcement names level {}, which does not exist",
                    entry.level
                )));
            }
            if let Some(unknown) = entry.tokens.iter().find(|t| !catalog.contains(t)) {
                return Err(invalid(format!(
                    "reinforcement token '{}' is not in the catalog",
                    unknown
                )));
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}
