//! Configuration file support.

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::infra::expand_home;

/// Configuration written to the config path when none exists yet.
pub const DEFAULT_CONFIG: &str = include_str!("../../resources/default-config.yaml");

/// Prompt shown when `app.prompt` is not set.
pub const DEFAULT_PROMPT: &str = "quick-note> ";

/// Errors loading or reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("mandatory config {key} is not defined")]
    Missing { key: &'static str },

    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Application configuration loaded from a YAML file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppSettings,

    #[serde(default)]
    pub note: NoteSettings,

    /// Action code (first prompt character) to action.
    #[serde(default)]
    pub actions: BTreeMap<String, ActionConfig>,

    /// Search code (second prompt character) to search mode.
    #[serde(default)]
    pub search_by: BTreeMap<String, SearchByConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppSettings {
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NoteSettings {
    /// Notes directory; `~` is expanded.
    pub location: Option<String>,

    /// Note file extension, without the dot.
    pub file_ext: Option<String>,

    /// Scratch file used when creating a note without a name.
    pub tmp_file_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionConfig {
    pub name: String,

    #[serde(default)]
    pub hint: String,

    /// Command run with the note path appended.
    pub executor: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchByConfig {
    pub name: String,

    #[serde(default)]
    pub hint: String,
}

impl Config {
    /// Load configuration from `path`, or the default location if `None`.
    ///
    /// When the file doesn't exist, the bundled default configuration is
    /// written there first.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map_or_else(Self::config_path, Path::to_path_buf);

        if !config_path.exists() {
            Self::write_default(&config_path)?;
            info!("default config created at {}", config_path.display());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Returns the bundled default configuration.
    pub fn bundled() -> Result<Self, serde_yaml::Error> {
        Self::from_yaml(DEFAULT_CONFIG)
    }

    fn write_default(path: &Path) -> Result<(), ConfigError> {
        let io_error = |e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(path, DEFAULT_CONFIG).map_err(io_error)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/quick-notes.yaml`
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quick-notes.yaml")
    }

    /// Resolve the notes directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `note.location` setting (mandatory otherwise)
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = cli_dir {
            return Ok(dir.clone());
        }
        self.note
            .location
            .as_deref()
            .map(expand_home)
            .ok_or(ConfigError::Missing {
                key: "note.location",
            })
    }

    /// Note file extension without a leading dot.
    pub fn file_ext(&self) -> Result<&str, ConfigError> {
        self.note
            .file_ext
            .as_deref()
            .map(|ext| ext.trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .ok_or(ConfigError::Missing {
                key: "note.file_ext",
            })
    }

    /// Scratch file for unnamed notes.
    pub fn tmp_file_path(&self) -> Result<PathBuf, ConfigError> {
        self.note
            .tmp_file_path
            .as_deref()
            .map(expand_home)
            .ok_or(ConfigError::Missing {
                key: "note.tmp_file_path",
            })
    }

    pub fn prompt(&self) -> &str {
        self.app.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// Looks up an action by its one-character code.
    pub fn action(&self, code: &str) -> Option<&ActionConfig> {
        self.actions.get(code)
    }

    /// Looks up an action by its name (`edit`, `view`, ...).
    pub fn action_by_name(&self, name: &str) -> Option<&ActionConfig> {
        self.actions.values().find(|a| a.name == name)
    }

    pub fn search_by(&self, code: &str) -> Option<&SearchByConfig> {
        self.search_by.get(code)
    }

    /// Resolve the command used to open a note for the named action.
    ///
    /// Precedence order:
    /// 1. The action's `executor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "vi" as fallback
    pub fn executor(&self, action_name: &str) -> String {
        self.action_by_name(action_name)
            .and_then(|a| a.executor.clone())
            .filter(|e| !e.trim().is_empty())
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| "vi".to_string())
    }
}
