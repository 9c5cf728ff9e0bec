//! Multiple-choice option building

use super::catalog::Catalog;
use super::models::{Level, Token};
use super::random::RandomSource;

/// Number of options shown per question
pub const OPTION_COUNT: usize = 4;

/// Build the shuffled option set for `target`: three distinct distractors
/// drawn from every token unlocked up to `level`, plus the target once.
///
/// Validated catalogs always hold at least three tokens besides the target.
pub fn build_options<R: RandomSource>(
    catalog: &Catalog,
    target: &Token,
    level: Level,
    rng: &mut R,
) -> Vec<Token> {
    let mut pool: Vec<Token> = catalog
        .tokens_up_to(level)
        .into_iter()
        .filter(|t| t != target)
        .collect();
    rng.shuffle(&mut pool);

    let mut options: Vec<Token> = pool.into_iter().take(OPTION_COUNT - 1).collect();
    options.push(target.clone());
    rng.shuffle(&mut options);
    options
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::quiz::random::{RngSource, SequenceSource};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_options_are_four_distinct_with_target_once() {
        let catalog = Catalog::hiragana();
        let mut rng = RngSource::new(StdRng::seed_from_u64(11));

        for level in 1..=catalog.level_count() {
            let level = Level::new(level);
            for target in catalog.tokens_up_to(level) {
                let options = build_options(&catalog, &target, level, &mut rng);
                assert_eq!(options.len(), OPTION_COUNT);
                let distinct: HashSet<&Token> = options.iter().collect();
                assert_eq!(distinct.len(), OPTION_COUNT);
                assert_eq!(options.iter().filter(|t| **t == target).count(), 1);
            }
        }
    }

    #[test]
    fn test_first_level_uses_remaining_vowels() {
        let catalog = Catalog::hiragana();
        let mut rng = RngSource::new(StdRng::seed_from_u64(3));
        let target = Token::from("a");
        let options = build_options(&catalog, &target, Level::FIRST, &mut rng);
        for option in &options {
            assert!(catalog.tokens_at(Level::FIRST).contains(option));
        }
    }

    #[test]
    fn test_distractors_never_come_from_locked_levels() {
        let catalog = Catalog::hiragana();
        let mut rng = RngSource::new(StdRng::seed_from_u64(5));
        let target = Token::from("ka");
        for _ in 0..200 {
            let options = build_options(&catalog, &target, Level::new(2), &mut rng);
            for option in &options {
                assert!(catalog.level_of(option).unwrap() <= Level::new(2));
            }
        }
    }

    #[test]
    fn test_scripted_order() {
        let catalog = Catalog::hiragana();
        // Scripted indices of 0 rotate each slice left by one
        let mut rng = SequenceSource::default();
        let options = build_options(&catalog, &Token::from("u"), Level::FIRST, &mut rng);
        // Pool [a, i, e, o] -> [i, e, o, a]; take [i, e, o] + u -> [e, o, u, i]
        let expected: Vec<Token> = ["e", "o", "u", "i"].iter().map(|t| Token::from(*t)).collect();
        assert_eq!(options, expected);
    }

    #[test]
    fn test_target_position_is_spread() {
        let catalog = Catalog::hiragana();
        let mut rng = RngSource::new(StdRng::seed_from_u64(99));
        let target = Token::from("i");
        let mut positions = [0usize; OPTION_COUNT];
        for _ in 0..4000 {
            let options = build_options(&catalog, &target, Level::FIRST, &mut rng);
            let idx = options.iter().position(|t| *t == target).unwrap();
            positions[idx] += 1;
        }
        for count in positions {
            assert!(count > 800, "target position skewed: {:?}", positions);
        }
    }
}
