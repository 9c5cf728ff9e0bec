//! Persistence for the learner's score

mod file_store;
pub mod score;

pub use file_store::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use score::{load_score, save_score, SCORE_KEY};
