//! Character catalog: which tokens each level introduces, their glyphs,
//! and the weighted draw pools built from them.

use std::collections::{HashMap, HashSet};

use super::models::{Direction, Level, Token};
use crate::config::Reinforcement;

/// Romanized syllables introduced per level, in order
const HIRAGANA_LEVELS: &[&[&str]] = &[
    &["a", "i", "u", "e", "o"],
    &["ka", "ki", "ku", "ke", "ko", "sa", "shi", "su", "se", "so"],
    &["ta", "chi", "tsu", "te", "to", "na", "ni", "nu", "ne", "no"],
    &["ha", "hi", "fu", "he", "ho", "ma", "mi", "mu", "me", "mo"],
    &["ya", "yu", "yo", "ra", "ri", "ru", "re", "ro", "wa", "wo", "n"],
];

const HIRAGANA_GLYPHS: &[(&str, &str)] = &[
    ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
    ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
    ("sa", "さ"), ("shi", "し"), ("su", "す"), ("se", "せ"), ("so", "そ"),
    ("ta", "た"), ("chi", "ち"), ("tsu", "つ"), ("te", "て"), ("to", "と"),
    ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
    ("ha", "は"), ("hi", "ひ"), ("fu", "ふ"), ("he", "へ"), ("ho", "ほ"),
    ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
    ("ya", "や"), ("yu", "ゆ"), ("yo", "よ"),
    ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
    ("wa", "わ"), ("wo", "を"), ("n", "ん"),
];

/// Fixed set of learnable tokens grouped by level
#[derive(Debug, Clone)]
pub struct Catalog {
    levels: Vec<Vec<Token>>,
    glyphs: HashMap<Token, String>,
    reinforcement: Vec<Reinforcement>,
}

impl Catalog {
    /// The five-level hiragana catalog
    pub fn hiragana() -> Self {
        let levels = HIRAGANA_LEVELS
            .iter()
            .map(|tokens| tokens.iter().map(|t| Token::from(*t)).collect())
            .collect();
        let glyphs = HIRAGANA_GLYPHS
            .iter()
            .map(|(romaji, glyph)| (Token::from(*romaji), glyph.to_string()))
            .collect();

        Self {
            levels,
            glyphs,
            reinforcement: Vec::new(),
        }
    }

    /// Build a catalog from explicit level lists, without glyphs
    pub fn from_levels(levels: Vec<Vec<Token>>) -> Self {
        Self {
            levels,
            glyphs: HashMap::new(),
            reinforcement: Vec::new(),
        }
    }

    /// Attach the per-level reinforcement weighting table
    pub fn with_reinforcement(mut self, reinforcement: Vec<Reinforcement>) -> Self {
        self.reinforcement = reinforcement;
        self
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn max_level(&self) -> Level {
        Level::new(self.levels.len())
    }

    /// Tokens introduced exactly at `level`
    pub fn tokens_at(&self, level: Level) -> &[Token] {
        self.levels
            .get(level.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Draw pool for new questions at `level`: `tokens_at` plus any
    /// reinforcement tokens repeated `extra_copies` times.
    pub fn draw_pool(&self, level: Level) -> Vec<Token> {
        let mut pool = self.tokens_at(level).to_vec();
        for entry in self.reinforcement.iter().filter(|r| r.level == level.number()) {
            for _ in 0..entry.extra_copies {
                pool.extend(entry.tokens.iter().cloned());
            }
        }
        pool
    }

    /// Union of every token from level 1 through `level`, without duplicates
    pub fn tokens_up_to(&self, level: Level) -> Vec<Token> {
        self.collect_unique(level.number())
    }

    /// Union of every token strictly below `level` (the review pool)
    pub fn tokens_below(&self, level: Level) -> Vec<Token> {
        self.collect_unique(level.number() - 1)
    }

    fn collect_unique(&self, through: usize) -> Vec<Token> {
        let mut seen = HashSet::new();
        self.levels
            .iter()
            .take(through)
            .flatten()
            .filter(|t| seen.insert(*t))
            .cloned()
            .collect()
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.levels.iter().any(|level| level.contains(token))
    }

    /// Level at which a token is introduced
    pub fn level_of(&self, token: &Token) -> Option<Level> {
        self.levels
            .iter()
            .position(|level| level.contains(token))
            .map(|idx| Level::new(idx + 1))
    }

    pub fn glyph(&self, token: &Token) -> Option<&str> {
        self.glyphs.get(token).map(String::as_str)
    }

    /// The stimulus shown for the target: glyph normally, uppercase romanization in reverse
    pub fn stimulus(&self, token: &Token, direction: Direction) -> String {
        match direction {
            Direction::Normal => self.glyph_or_romaji(token),
            Direction::Reverse => token.as_str().to_uppercase(),
        }
    }

    /// Label for an answer option: romanization normally, glyph in reverse
    pub fn option_label(&self, token: &Token, direction: Direction) -> String {
        match direction {
            Direction::Normal => token.to_string(),
            Direction::Reverse => self.glyph_or_romaji(token),
        }
    }

    fn glyph_or_romaji(&self, token: &Token) -> String {
        self.glyph(token)
            .map(str::to_string)
            .unwrap_or_else(|| token.to_string())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::hiragana()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<Token> {
        list.iter().map(|t| Token::from(*t)).collect()
    }

    #[test]
    fn test_first_level_pool() {
        let catalog = Catalog::hiragana();
        assert_eq!(catalog.tokens_up_to(Level::FIRST), tokens(&["a", "i", "u", "e", "o"]));
    }

    #[test]
    fn test_tokens_up_to_accumulates_earlier_levels() {
        let catalog = Catalog::hiragana();
        let pool = catalog.tokens_up_to(Level::new(3));
        assert_eq!(pool.len(), 25);
        assert!(pool.contains(&Token::from("a")));
        assert!(pool.contains(&Token::from("no")));
        assert!(!pool.contains(&Token::from("ha")));
    }

    #[test]
    fn test_tokens_below_excludes_current_level() {
        let catalog = Catalog::hiragana();
        assert!(catalog.tokens_below(Level::FIRST).is_empty());
        let below = catalog.tokens_below(Level::new(3));
        assert_eq!(below.len(), 15);
        assert!(!below.contains(&Token::from("ta")));
    }

    #[test]
    fn test_every_token_has_a_glyph() {
        let catalog = Catalog::hiragana();
        for token in catalog.tokens_up_to(catalog.max_level()) {
            assert!(catalog.glyph(&token).is_some(), "missing glyph for {}", token);
        }
    }

    #[test]
    fn test_reinforcement_repeats_tokens_in_draw_pool_only() {
        let catalog = Catalog::hiragana().with_reinforcement(vec![Reinforcement {
            level: 2,
            tokens: tokens(&["sa", "i"]),
            extra_copies: 3,
        }]);

        let pool = catalog.draw_pool(Level::new(2));
        assert_eq!(pool.len(), 10 + 2 * 3);
        assert_eq!(pool.iter().filter(|t| t.as_str() == "sa").count(), 4);
        assert_eq!(pool.iter().filter(|t| t.as_str() == "i").count(), 3);

        // Other levels and the distractor pool are untouched
        assert_eq!(catalog.draw_pool(Level::new(3)).len(), 10);
        let distractors = catalog.tokens_up_to(Level::new(2));
        assert_eq!(distractors.iter().filter(|t| t.as_str() == "sa").count(), 1);
    }

    #[test]
    fn test_stimulus_and_labels_follow_direction() {
        let catalog = Catalog::hiragana();
        let shi = Token::from("shi");
        assert_eq!(catalog.stimulus(&shi, Direction::Normal), "し");
        assert_eq!(catalog.stimulus(&shi, Direction::Reverse), "SHI");
        assert_eq!(catalog.option_label(&shi, Direction::Normal), "shi");
        assert_eq!(catalog.option_label(&shi, Direction::Reverse), "し");
    }

    #[test]
    fn test_missing_glyph_falls_back_to_romaji() {
        let catalog = Catalog::from_levels(vec![tokens(&["xa", "xi"])]);
        assert_eq!(catalog.stimulus(&Token::from("xa"), Direction::Normal), "xa");
    }

    #[test]
    fn test_level_of() {
        let catalog = Catalog::hiragana();
        assert_eq!(catalog.level_of(&Token::from("n")), Some(Level::new(5)));
        assert_eq!(catalog.level_of(&Token::from("zz")), None);
    }
}
