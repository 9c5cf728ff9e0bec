//! Adaptive hiragana quiz engine
//!
//! This module provides:
//! - Level resolution and within-level progress from the score
//! - The character catalog with per-level draw pools
//! - Question selection with review draws, reinforcement weighting and
//!   reverse-direction questions
//! - Multiple-choice option building
//! - Progress-tiered scoring
//! - Session state with score persistence
//! - Media path requests and the secondary-image cycle

pub mod catalog;
pub mod distractors;
pub mod engine;
pub mod levels;
pub mod media;
pub mod models;
pub mod random;
pub mod scoring;
pub mod selector;
pub mod session;

pub use catalog::Catalog;
pub use engine::QuizEngine;
pub use media::{MediaCycle, MediaKind, MediaLibrary};
pub use models::*;
pub use random::{RandomSource, RngSource, SequenceSource};
pub use session::{Session, SessionState};
