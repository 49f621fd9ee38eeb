//! In-memory note index: path, name, and tag mappings kept in sync.

use crate::index::builder::{BuildResult, IndexBuilder};
use crate::index::{IndexError, IndexResult};
use crate::infra::{FsError, canonical_path, read_note_header, rename_file};
use log::{debug, info};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// A note as stored in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedNote {
    name: String,
    tags: Vec<String>,
}

impl IndexedNote {
    pub fn new(name: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Result of indexing a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    /// The note was parsed and registered.
    ///
    /// `previous` is the path that was indexed; `resolved` is where the note
    /// lives now. They differ when the file was moved to its canonical path.
    Indexed { previous: PathBuf, resolved: PathBuf },
    /// The file no longer exists; any entry for it was removed.
    Missing { path: PathBuf },
}

impl IndexOutcome {
    /// Returns the note's current path, or `None` if it was missing.
    pub fn resolved(&self) -> Option<&Path> {
        match self {
            IndexOutcome::Indexed { resolved, .. } => Some(resolved),
            IndexOutcome::Missing { .. } => None,
        }
    }

    /// Returns true if indexing moved the file.
    pub fn was_renamed(&self) -> bool {
        matches!(self, IndexOutcome::Indexed { previous, resolved } if previous != resolved)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, IndexOutcome::Missing { .. })
    }
}

/// In-memory index over a flat directory of note files.
///
/// Holds three views that are always updated together:
///
/// - `notes`: path → name and tags
/// - `names`: name → path (inverse of `notes`)
/// - `tags`: tag → paths (transpose of `notes`)
///
/// The index never watches the filesystem; callers re-index a path after
/// every change they make to it. Every operation either applies all of its
/// map updates or, on error, none of them.
#[derive(Debug)]
pub struct NoteIndex {
    notes_dir: PathBuf,
    ext: String,
    notes: BTreeMap<PathBuf, IndexedNote>,
    names: BTreeMap<String, PathBuf>,
    tags: BTreeMap<String, BTreeSet<PathBuf>>,
}

impl NoteIndex {
    /// Creates an empty index for notes stored in `notes_dir` with extension `ext`.
    pub fn new(notes_dir: impl Into<PathBuf>, ext: impl Into<String>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
            ext: ext.into(),
            notes: BTreeMap::new(),
            names: BTreeMap::new(),
            tags: BTreeMap::new(),
        }
    }

    /// Creates an index and fills it by scanning `notes_dir`.
    ///
    /// Malformed files are skipped and reported in the returned `BuildResult`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the directory itself cannot be created or read.
    pub fn load(
        notes_dir: impl Into<PathBuf>,
        ext: impl Into<String>,
    ) -> IndexResult<(Self, BuildResult)> {
        let mut index = Self::new(notes_dir, ext);
        let result = IndexBuilder::for_index(&index).bootstrap(&mut index)?;
        Ok((index, result))
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// Returns where a note named `name` belongs. Pure; no I/O.
    pub fn canonical_path(&self, name: &str) -> PathBuf {
        canonical_path(&self.notes_dir, name, &self.ext)
    }

    // ===========================================
    // Mutation
    // ===========================================

    /// Parses the note at `path` and registers it.
    ///
    /// If the file is gone, the path is removed from the index and
    /// `IndexOutcome::Missing` is returned. If the name in the file maps to a
    /// different canonical path, the file is renamed there first and the old
    /// path's entry is dropped.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Format` for malformed content,
    /// `IndexError::NameConflict` if another file already occupies the
    /// canonical path, and `IndexError::Fs`/`IndexError::Rename` for I/O
    /// failures. The index is unchanged on error.
    pub fn index_note(&mut self, path: &Path) -> IndexResult<IndexOutcome> {
        let header = match read_note_header(path) {
            Ok(header) => header,
            Err(FsError::NotFound { .. }) => {
                if self.remove(path) {
                    debug!("removed missing note {}", path.display());
                }
                return Ok(IndexOutcome::Missing {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let (name, tags) = header.into_parts();
        let resolved = self.canonical_path(&name);

        if resolved != path {
            if resolved.exists() && !is_same_file(path, &resolved) {
                return Err(IndexError::NameConflict {
                    name,
                    path: resolved,
                });
            }
            rename_file(path, &resolved).map_err(|e| IndexError::Rename {
                from: path.to_path_buf(),
                to: resolved.clone(),
                source: e,
            })?;
            self.remove(path);
            info!("moved {} to {}", path.display(), resolved.display());
        }

        self.register(resolved.clone(), name, tags);
        debug!("indexed {}", resolved.display());

        Ok(IndexOutcome::Indexed {
            previous: path.to_path_buf(),
            resolved,
        })
    }

    /// Removes `path` and all of its name and tag associations.
    ///
    /// Returns `false` (and does nothing) if the path isn't indexed. Safe to
    /// call repeatedly.
    pub fn remove(&mut self, path: &Path) -> bool {
        let Some(entry) = self.notes.remove(path) else {
            return false;
        };

        if self.names.get(&entry.name).is_some_and(|p| p == path) {
            self.names.remove(&entry.name);
        }
        for tag in &entry.tags {
            self.unlink_tag(tag, path);
        }
        true
    }

    fn register(&mut self, path: PathBuf, name: String, tags: Vec<String>) {
        // An older entry under another path claiming the same name is stale.
        if let Some(other) = self.names.get(&name).cloned()
            && other != path
        {
            self.remove(&other);
        }

        if let Some(previous) = self.notes.get(&path).cloned() {
            if previous.name != name && self.names.get(&previous.name) == Some(&path) {
                self.names.remove(&previous.name);
            }
            for tag in previous.tags.iter().filter(|t| !tags.contains(t)) {
                self.unlink_tag(tag, &path);
            }
        }

        for tag in &tags {
            self.tags
                .entry(tag.clone())
                .or_default()
                .insert(path.clone());
        }
        self.names.insert(name.clone(), path.clone());
        self.notes.insert(path, IndexedNote::new(name, tags));
    }

    fn unlink_tag(&mut self, tag: &str, path: &Path) {
        if let Some(paths) = self.tags.get_mut(tag) {
            paths.remove(path);
            if paths.is_empty() {
                self.tags.remove(tag);
            }
        }
    }

    // ===========================================
    // Lookups
    // ===========================================

    /// All indexed notes by path.
    pub fn notes(&self) -> &BTreeMap<PathBuf, IndexedNote> {
        &self.notes
    }

    /// Note paths by name.
    pub fn names(&self) -> &BTreeMap<String, PathBuf> {
        &self.names
    }

    /// Note paths by tag.
    pub fn tags(&self) -> &BTreeMap<String, BTreeSet<PathBuf>> {
        &self.tags
    }

    pub fn get(&self, path: &Path) -> Option<&IndexedNote> {
        self.notes.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.notes.contains_key(path)
    }

    pub fn path_for_name(&self, name: &str) -> Option<&Path> {
        self.names.get(name).map(PathBuf::as_path)
    }

    pub fn paths_for_tag(&self, tag: &str) -> Option<&BTreeSet<PathBuf>> {
        self.tags.get(tag)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
