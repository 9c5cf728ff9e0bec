//! Point rewards and the progress-tiered penalty schedule
//!
//! Tiers for a wrong answer, by progress percent within the level:
//! - at or above 80: 15% of the score, rounded to the nearest 10 (at least 10)
//! - at or above 50: a flat 30
//! - below 50: a flat 10
//!
//! The score never drops below zero.

use super::models::Score;
use crate::config::{PenaltyConfig, QuizConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRules {
    pub reward: Score,
    pub penalty: PenaltyConfig,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::from(&QuizConfig::default())
    }
}

impl From<&QuizConfig> for ScoringRules {
    fn from(config: &QuizConfig) -> Self {
        Self {
            reward: config.correct_reward,
            penalty: config.penalty.clone(),
        }
    }
}

impl ScoringRules {
    /// Points a wrong answer costs at `score` and `progress_percent`
    pub fn penalty(&self, score: Score, progress_percent: f64) -> Score {
        let rules = &self.penalty;
        if progress_percent >= rules.high_tier_percent {
            let scaled = ((score as f64 * rules.high_tier_rate) / 10.0).round() * 10.0;
            match scaled as Score {
                0 => rules.minimum_penalty,
                penalty => penalty,
            }
        } else if progress_percent >= rules.mid_tier_percent {
            rules.mid_tier_penalty
        } else {
            rules.low_tier_penalty
        }
    }

    /// New score after an answer. Correct answers add a flat reward;
    /// wrong ones subtract the tiered penalty, clamped at zero.
    pub fn apply_answer(&self, score: Score, is_correct: bool, progress_percent: f64) -> Score {
        if is_correct {
            score.saturating_add(self.reward)
        } else {
            score.saturating_sub(self.penalty(score, progress_percent))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ScoringRules {
        ScoringRules::default()
    }

    #[test]
    fn test_correct_adds_flat_reward() {
        let rules = rules();
        for score in [0, 5, 49, 6000, 100_000] {
            for percent in [0.0, 49.9, 50.0, 85.0, 100.0] {
                assert_eq!(rules.apply_answer(score, true, percent), score + 10);
            }
        }
    }

    #[test]
    fn test_crossing_into_second_level() {
        assert_eq!(rules().apply_answer(49, true, 98.0), 59);
    }

    #[test]
    fn test_high_tier_takes_share_of_score() {
        let rules = rules();
        assert_eq!(rules.penalty(6000, 85.0), 900);
        assert_eq!(rules.apply_answer(6000, false, 85.0), 5100);
    }

    #[test]
    fn test_high_tier_rounds_to_nearest_ten() {
        let rules = rules();
        // 50 * 0.15 = 7.5 -> 10
        assert_eq!(rules.penalty(50, 90.0), 10);
        // 130 * 0.15 = 19.5 -> 20
        assert_eq!(rules.penalty(130, 90.0), 20);
        // 1000 * 0.15 = 150
        assert_eq!(rules.penalty(1000, 80.0), 150);
    }

    #[test]
    fn test_high_tier_floor_applies_when_share_rounds_to_zero() {
        let rules = rules();
        assert_eq!(rules.penalty(3, 85.0), 10);
        assert_eq!(rules.penalty(0, 100.0), 10);
        assert_eq!(rules.apply_answer(5, false, 85.0), 0);
    }

    #[test]
    fn test_mid_tier_is_flat() {
        let rules = rules();
        assert_eq!(rules.penalty(10_000, 50.0), 30);
        assert_eq!(rules.penalty(10_000, 79.9), 30);
        assert_eq!(rules.apply_answer(100, false, 60.0), 70);
    }

    #[test]
    fn test_low_tier_is_flat() {
        let rules = rules();
        for score in [0, 7, 40, 5000, 99_999] {
            assert_eq!(rules.penalty(score, 40.0), 10);
        }
        assert_eq!(rules.apply_answer(40, false, 40.0), 30);
    }

    #[test]
    fn test_score_never_negative() {
        let rules = rules();
        for score in 0..200 {
            for percent in [0.0, 25.0, 50.0, 75.0, 80.0, 100.0] {
                let new_score = rules.apply_answer(score, false, percent);
                assert!(new_score <= score);
            }
        }
        assert_eq!(rules.apply_answer(20, false, 60.0), 0);
    }

    #[test]
    fn test_reward_saturates() {
        assert_eq!(rules().apply_answer(Score::MAX, true, 0.0), Score::MAX);
    }
}
