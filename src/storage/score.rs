//! The persisted score record: one decimal integer under a fixed key

use super::file_store::{KeyValueStore, Result};
use crate::quiz::models::Score;

/// Key the score is stored under
pub const SCORE_KEY: &str = "hiraganaPoints";

/// Read the saved score. Absent, unreadable, or malformed values start
/// the learner at zero.
pub fn load_score<S: KeyValueStore + ?Sized>(store: &S) -> Score {
    let raw = match store.get(SCORE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return 0,
        Err(e) => {
            log::warn!("Failed to read saved score, starting at 0: {}", e);
            return 0;
        }
    };

    match raw.trim().parse::<Score>() {
        Ok(score) => score,
        Err(e) => {
            log::warn!("Ignoring malformed saved score {:?}: {}", raw, e);
            0
        }
    }
}

pub fn save_score<S: KeyValueStore + ?Sized>(store: &S, score: Score) -> Result<()> {
    store.set(SCORE_KEY, &score.to_string())
}
