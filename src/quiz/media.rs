//! Media path requests and secondary-image cycling
//!
//! Layout under the media root:
//! ```text
//! {root}/{token}/{token}.mp3      # pronunciation
//! {root}/{token}/{token}.mp4      # looping stroke video
//! {root}/{token}/{token}_1.jpg    # vocab image, slot 0
//! {root}/{token}/{token}_1.mp3    # vocab word audio, slot 0
//! ```
//! Whether a file exists is the player's concern; a missing asset never
//! affects scoring or selection.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::models::{Direction, Token};
use crate::config::MediaConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    /// Looping, muted
    Video,
    Image,
}

impl MediaKind {
    pub fn extension(self) -> &'static str {
        match self {
            MediaKind::Audio => "mp3",
            MediaKind::Video => "mp4",
            MediaKind::Image => "jpg",
        }
    }
}

/// Builds asset paths for tokens
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    root: PathBuf,
}

impl MediaLibrary {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// `{root}/{token}/{token}.{ext}`
    pub fn primary(&self, token: &Token, kind: MediaKind) -> PathBuf {
        self.root
            .join(token.as_str())
            .join(format!("{}.{}", token, kind.extension()))
    }

    /// `{root}/{token}/{token}_{slot + 1}.{ext}`
    pub fn secondary(&self, token: &Token, slot: usize, kind: MediaKind) -> PathBuf {
        self.root
            .join(token.as_str())
            .join(format!("{}_{}.{}", token, slot + 1, kind.extension()))
    }

    /// Stroke video for the stimulus; hidden in reverse mode
    pub fn stimulus_video(&self, token: &Token, direction: Direction) -> Option<PathBuf> {
        match direction {
            Direction::Normal => Some(self.primary(token, MediaKind::Video)),
            Direction::Reverse => None,
        }
    }

    /// Vocab image for the current slot, when images are shown
    pub fn vocab_image(&self, token: &Token, slot: usize, show_images: bool) -> Option<PathBuf> {
        show_images.then(|| self.secondary(token, slot, MediaKind::Image))
    }

    /// Audio played when a vocab image is selected
    pub fn vocab_audio(&self, token: &Token, slot: usize) -> PathBuf {
        self.secondary(token, slot, MediaKind::Audio)
    }
}

impl From<&MediaConfig> for MediaLibrary {
    fn from(config: &MediaConfig) -> Self {
        Self::new(config.root.clone())
    }
}

/// The one periodic timer a session owns: alternates the vocab image slot.
///
/// `restart` cancels whatever cycle was running, so a new question never
/// inherits the previous one's cadence.
#[derive(Debug, Clone)]
pub struct MediaCycle {
    cadence: Duration,
    slots: usize,
    slot: usize,
    /// When the current slot went up; `None` while cancelled
    started: Option<Instant>,
}

impl MediaCycle {
    pub fn new(cadence: Duration, slots: usize) -> Self {
        Self {
            cadence,
            slots: slots.max(1),
            slot: 0,
            started: None,
        }
    }

    /// Cancel any running cycle and reset to slot 0; run again if `enabled`
    pub fn restart(&mut self, enabled: bool, now: Instant) {
        self.slot = 0;
        self.started = enabled.then_some(now);
    }

    pub fn cancel(&mut self) {
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Advance once per elapsed cadence. Returns true if the slot changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return false;
        };
        if self.cadence.is_zero() {
            return false;
        }

        let elapsed = now.saturating_duration_since(started);
        let steps = (elapsed.as_nanos() / self.cadence.as_nanos()) as usize;
        if steps == 0 {
            return false;
        }

        let before = self.slot;
        self.slot = (self.slot + steps) % self.slots;
        self.started = Some(started + self.cadence * steps as u32);
        self.slot != before
    }
}

impl From<&MediaConfig> for MediaCycle {
    fn from(config: &MediaConfig) -> Self {
        Self::new(Duration::from_millis(config.cycle_ms), config.slots)
    }
}
