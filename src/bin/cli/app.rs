use std::path::PathBuf;

use anyhow::{Context, Result};

use kana_lib::config::QuizConfig;
use kana_lib::quiz::{QuizEngine, Session};
use kana_lib::storage::{FileStore, KeyValueStore, MemoryStore};

/// Store behind a CLI session: the data directory, or memory for `--ephemeral`
pub type CliStore = Box<dyn KeyValueStore>;

/// Global flags shared by every command
pub struct AppOptions {
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub ephemeral: bool,
}

/// Shared application state for CLI commands
pub struct App {
    pub engine: QuizEngine,
    pub data_dir: PathBuf,
    pub ephemeral: bool,
}

impl App {
    /// Load and validate the quiz config, and resolve the data directory.
    /// An invalid config stops the program here.
    pub fn new(options: &AppOptions) -> Result<Self> {
        let config = match &options.config {
            Some(path) => QuizConfig::from_file(path)?,
            None => match QuizConfig::default_path() {
                Some(path) => QuizConfig::load_or_default(&path)?,
                None => QuizConfig::default(),
            },
        };

        let engine = QuizEngine::hiragana(config).context("Invalid quiz configuration")?;

        let data_dir = match &options.data_dir {
            Some(dir) => dir.clone(),
            None => FileStore::default_data_dir().context("Failed to get data directory")?,
        };

        Ok(Self {
            engine,
            data_dir,
            ephemeral: options.ephemeral,
        })
    }

    fn store(&self) -> CliStore {
        if self.ephemeral {
            Box::new(MemoryStore::new())
        } else {
            Box::new(FileStore::new(self.data_dir.clone()))
        }
    }

    /// Open a session on the saved score
    pub fn open_session(&self) -> Session<CliStore> {
        Session::open(self.engine.clone(), self.store())
    }
}
