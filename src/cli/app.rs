//! Application context shared by the prompt and the one-shot commands.

use std::path::PathBuf;

use crate::cli::config::{Config, ConfigError};
use crate::index::{BuildResult, IndexBuilder, IndexResult, NoteIndex, ProgressReporter};

/// Owns the configuration and the note index for one process.
pub struct App {
    config: Config,
    index: NoteIndex,
}

impl App {
    /// Creates the context with an empty index.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the notes directory or file extension
    /// is not configured.
    pub fn new(config: Config, cli_dir: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let notes_dir = config.notes_dir(cli_dir)?;
        let ext = config.file_ext()?.to_string();
        Ok(Self {
            index: NoteIndex::new(notes_dir, ext),
            config,
        })
    }

    /// Fills the index from the notes directory.
    pub fn bootstrap<P: ProgressReporter>(&mut self, progress: &mut P) -> IndexResult<BuildResult> {
        IndexBuilder::for_index(&self.index).bootstrap_with_progress(&mut self.index, progress)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> &NoteIndex {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut NoteIndex {
        &mut self.index
    }
}
