//! Isolated test environment with temp directory.

use super::{QnCommand, TestNote};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a config file and a notes directory.
///
/// Every action's executor is `true`, so commands that would open an editor
/// leave the file as it is.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    notes_dir: PathBuf,
    config_path: PathBuf,
    scratch_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        std::fs::create_dir_all(&notes_dir).expect("Failed to create notes directory");
        let config_path = temp_dir.path().join("quick-notes.yaml");
        let scratch_path = temp_dir.path().join("scratch.md");

        let config = format!(
            r#"app:
  prompt: "qn> "
note:
  location: {notes}
  file_ext: md
  tmp_file_path: {scratch}
actions:
  c:
    name: create
    hint: "create note"
    executor: "true"
  e:
    name: edit
    hint: "edit note"
    executor: "true"
  v:
    name: view
    hint: "view note"
    executor: "true"
search_by:
  n:
    name: name
    hint: "search by name"
  t:
    name: tag
    hint: "search by tags, comma separated"
  c:
    name: content
    hint: "search by content, at least 2 characters"
"#,
            notes = notes_dir.display(),
            scratch = scratch_path.display(),
        );
        std::fs::write(&config_path, config).expect("Failed to write config");

        Self {
            _temp_dir: temp_dir,
            notes_dir,
            config_path,
            scratch_path,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Scratch file used by `new` without a name.
    pub fn scratch_path(&self) -> &Path {
        &self.scratch_path
    }

    pub fn deleted_dir(&self) -> PathBuf {
        self.notes_dir.join("deleted")
    }

    /// Adds a test note to the environment and returns its path.
    pub fn add_note(&self, note: &TestNote) -> PathBuf {
        self.write_file(&note.get_file_name(), &note.render())
    }

    /// Writes a file into the notes directory and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.notes_dir.join(name)).expect("Failed to read file")
    }

    /// Creates a QnCommand configured for this test environment.
    pub fn cmd(&self) -> QnCommand {
        QnCommand::new().config(&self.config_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_notes_directory_and_config() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir());
        assert!(env.config_path().is_file());
        assert!(!env.scratch_path().exists());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_uses_canonical_file_name() {
        let env = TestEnv::new();
        let path = env.add_note(&TestNote::new("Shopping List").tag("home"));
        assert_eq!(path, env.notes_dir().join("shopping_list.md"));
        assert_eq!(env.read_file("shopping_list.md"), "## Shopping List\n#home\n");
    }
}
