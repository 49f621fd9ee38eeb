//! Index builder for the startup scan of the notes directory.

use crate::index::{IndexError, IndexOutcome, IndexResult, NoteIndex};
use crate::infra::{ensure_dir, scan_notes_directory};
use log::{error, info};
use std::path::{Path, PathBuf};

// ===========================================
// BuildError Type
// ===========================================

/// Errors that can occur when indexing individual files.
#[derive(Debug)]
pub enum BuildError {
    /// The note's header lines are malformed.
    Format { path: PathBuf, message: String },
    /// Another note already uses the same name.
    Conflict { path: PathBuf, message: String },
    /// I/O error reading or moving the file.
    Io { path: PathBuf, message: String },
}

impl BuildError {
    fn from_index_error(error: IndexError, path: &Path) -> Self {
        let path = path.to_path_buf();
        match error {
            IndexError::Format { source, .. } => BuildError::Format {
                path,
                message: source.to_string(),
            },
            e @ IndexError::NameConflict { .. } => BuildError::Conflict {
                path,
                message: e.to_string(),
            },
            e => BuildError::Io {
                path,
                message: e.to_string(),
            },
        }
    }

    /// Returns the path of the file that caused the error.
    pub fn path(&self) -> &Path {
        match self {
            BuildError::Format { path, .. } => path,
            BuildError::Conflict { path, .. } => path,
            BuildError::Io { path, .. } => path,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        match self {
            BuildError::Format { message, .. } => message,
            BuildError::Conflict { message, .. } => message,
            BuildError::Io { message, .. } => message,
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path().display(), self.message())
    }
}

impl std::error::Error for BuildError {}

// ===========================================
// Result Types
// ===========================================

/// Result of a bootstrap scan.
#[derive(Debug, Default)]
pub struct BuildResult {
    /// Number of notes successfully indexed.
    pub indexed: usize,
    /// Number of indexed notes that were moved to their canonical path.
    pub renamed: usize,
    /// Errors that occurred during indexing.
    pub errors: Vec<BuildError>,
}

// ===========================================
// Progress Reporting
// ===========================================

/// Result of processing a single file.
#[derive(Debug, Clone)]
pub enum FileResult {
    /// File was indexed in place.
    Indexed,
    /// File was indexed and moved to the given path.
    Renamed(PathBuf),
    /// File vanished before it could be read.
    Missing,
    /// Error occurred while processing file.
    Error(String),
}

/// Trait for receiving progress updates during index operations.
pub trait ProgressReporter {
    /// Called when a file is processed.
    fn on_file(&mut self, path: &Path, result: FileResult);
    /// Called when the scan is complete.
    fn on_complete(&mut self, indexed: usize, errors: usize);
}

/// A no-op progress reporter.
#[derive(Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_file(&mut self, _path: &Path, _result: FileResult) {}
    fn on_complete(&mut self, _indexed: usize, _errors: usize) {}
}

// ===========================================
// IndexBuilder
// ===========================================

/// Fills a `NoteIndex` from the note files in a directory.
///
/// Only files directly inside the directory with the configured extension
/// are considered. Malformed files are reported and skipped; they never abort
/// the scan.
pub struct IndexBuilder {
    notes_dir: PathBuf,
    ext: String,
}

impl IndexBuilder {
    /// Creates a new IndexBuilder for the given notes directory and extension.
    pub fn new(notes_dir: PathBuf, ext: impl Into<String>) -> Self {
        Self {
            notes_dir,
            ext: ext.into(),
        }
    }

    /// Creates a builder scanning the same directory and extension as `index`.
    pub fn for_index(index: &NoteIndex) -> Self {
        Self::new(index.notes_dir().to_path_buf(), index.ext())
    }

    /// Returns the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Scans the notes directory and indexes every note file.
    ///
    /// # Errors
    ///
    /// Returns an error if the notes directory cannot be created or scanned.
    /// Individual file errors are collected in the returned `BuildResult`.
    pub fn bootstrap(&self, index: &mut NoteIndex) -> IndexResult<BuildResult> {
        self.bootstrap_with_progress(index, &mut NoopReporter)
    }

    /// Scans the notes directory with progress reporting.
    pub fn bootstrap_with_progress<P: ProgressReporter>(
        &self,
        index: &mut NoteIndex,
        progress: &mut P,
    ) -> IndexResult<BuildResult> {
        if ensure_dir(&self.notes_dir)? {
            info!(
                "created directory {} for note keeping",
                self.notes_dir.display()
            );
        }

        // Collected up front: indexing renames files inside the directory.
        let files: Vec<PathBuf> = scan_notes_directory(&self.notes_dir, &self.ext)?.collect();

        let mut result = BuildResult::default();

        for path in files {
            match index.index_note(&path) {
                Ok(IndexOutcome::Indexed { previous, resolved }) => {
                    result.indexed += 1;
                    if previous != resolved {
                        result.renamed += 1;
                        progress.on_file(&path, FileResult::Renamed(resolved));
                    } else {
                        progress.on_file(&path, FileResult::Indexed);
                    }
                }
                Ok(IndexOutcome::Missing { .. }) => {
                    progress.on_file(&path, FileResult::Missing);
                }
                Err(e) => {
                    let build_error = BuildError::from_index_error(e, &path);
                    error!("failed to load {}", build_error);
                    progress.on_file(&path, FileResult::Error(build_error.message().to_string()));
                    result.errors.push(build_error);
                }
            }
        }

        progress.on_complete(result.indexed, result.errors.len());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    // ===========================================
    // Test Helpers
    // ===========================================

    fn create_note_file(dir: &Path, filename: &str, name: &str, tags: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, format!("## {name}\n{tags}\nBody content.\n")).unwrap();
        path
    }

    #[derive(Default)]
    struct RecordingReporter {
        files: Vec<(PathBuf, String)>,
        completed: Option<(usize, usize)>,
    }

    impl ProgressReporter for RecordingReporter {
        fn on_file(&mut self, path: &Path, result: FileResult) {
            self.files.push((path.to_path_buf(), format!("{result:?}")));
        }

        fn on_complete(&mut self, indexed: usize, errors: usize) {
            self.completed = Some((indexed, errors));
        }
    }

    // ===========================================
    // IndexBuilder Tests
    // ===========================================

    #[test]
    fn new_creates_builder_with_notes_dir() {
        let dir = PathBuf::from("/some/path");
        let builder = IndexBuilder::new(dir.clone(), "md");
        assert_eq!(builder.notes_dir(), dir.as_path());
    }

    #[test]
    fn bootstrap_empty_directory_produces_empty_index() {
        let dir = TempDir::new().unwrap();
        let mut index = NoteIndex::new(dir.path(), "md");

        let result = IndexBuilder::for_index(&index).bootstrap(&mut index).unwrap();

        assert_eq!(result.indexed, 0);
        assert!(result.errors.is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn bootstrap_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let notes_dir = dir.path().join("notes");

        let (index, result) = NoteIndex::load(&notes_dir, "md").unwrap();

        assert!(notes_dir.is_dir());
        assert!(index.is_empty());
        assert_eq!(result.indexed, 0);
    }

    #[test]
    fn bootstrap_indexes_all_notes() {
        let dir = TempDir::new().unwrap();
        create_note_file(dir.path(), "alpha.md", "Alpha", "#one");
        create_note_file(dir.path(), "beta.md", "Beta", "#one #two");

        let (index, result) = NoteIndex::load(dir.path(), "md").unwrap();

        assert_eq!(result.indexed, 2);
        assert_eq!(result.renamed, 0);
        assert_eq!(index.len(), 2);
        assert_eq!(index.paths_for_tag("one").unwrap().len(), 2);
    }

    #[test]
    fn bootstrap_skips_malformed_and_continues() {
        let dir = TempDir::new().unwrap();
        create_note_file(dir.path(), "good.md", "Good", "#ok");
        fs::write(dir.path().join("bad.md"), "no marker here\n").unwrap();

        let (index, result) = NoteIndex::load(dir.path(), "md").unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(result.indexed, 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path(), dir.path().join("bad.md"));
        assert!(matches!(result.errors[0], BuildError::Format { .. }));
        assert!(result.errors[0].message().contains("missing name marker"));
    }

    #[test]
    fn bootstrap_renames_non_canonical_files() {
        let dir = TempDir::new().unwrap();
        create_note_file(dir.path(), "foo.md", "Bar Baz", "#x");

        let (index, result) = NoteIndex::load(dir.path(), "md").unwrap();

        assert_eq!(result.renamed, 1);
        assert!(index.contains(&dir.path().join("bar_baz.md")));
        assert!(!dir.path().join("foo.md").exists());
    }

    #[test]
    fn bootstrap_reports_name_conflicts() {
        let dir = TempDir::new().unwrap();
        create_note_file(dir.path(), "a_copy.md", "Same Name", "#copy");
        create_note_file(dir.path(), "same_name.md", "Same Name", "#orig");

        let (index, result) = NoteIndex::load(dir.path(), "md").unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(result.errors[0], BuildError::Conflict { .. }));
        assert!(dir.path().join("a_copy.md").exists());
    }

    #[test]
    fn bootstrap_ignores_other_extensions_and_deleted_dir() {
        let dir = TempDir::new().unwrap();
        create_note_file(dir.path(), "kept.md", "Kept", "#");
        create_note_file(dir.path(), "readme.txt", "Readme", "#");
        let deleted = dir.path().join("deleted");
        fs::create_dir(&deleted).unwrap();
        create_note_file(&deleted, "trashed.md", "Trashed", "#");

        let (index, _) = NoteIndex::load(dir.path(), "md").unwrap();

        assert_eq!(index.len(), 1);
        assert!(index.path_for_name("Kept").is_some());
    }

    #[test]
    fn bootstrap_reports_progress() {
        let dir = TempDir::new().unwrap();
        create_note_file(dir.path(), "good.md", "Good", "#ok");
        create_note_file(dir.path(), "moved.md", "Elsewhere", "#ok");
        fs::write(dir.path().join("zzz.md"), "bad").unwrap();

        let mut index = NoteIndex::new(dir.path(), "md");
        let mut reporter = RecordingReporter::default();
        IndexBuilder::for_index(&index)
            .bootstrap_with_progress(&mut index, &mut reporter)
            .unwrap();

        assert_eq!(reporter.completed, Some((2, 1)));
        assert_eq!(reporter.files.len(), 3);
        assert_eq!(reporter.files[0].1, "Indexed");
        assert!(reporter.files[1].1.starts_with("Renamed"));
        assert!(reporter.files[2].1.starts_with("Error"));
    }

    #[test]
    fn bootstrap_on_file_path_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not_a_dir");
        fs::write(&file, "").unwrap();

        let result = NoteIndex::load(&file, "md");
        assert!(matches!(result, Err(IndexError::Fs(_))));
    }
}
