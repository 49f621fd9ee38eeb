//! Note resolution utilities.

use std::path::{Path, PathBuf};

use crate::index::NoteIndex;
use crate::infra::{canonical_file_name, deleted_dir};

/// Resolves a note name or path to an indexed note's path.
///
/// Resolution order:
/// 1. Exact name match
/// 2. Case-insensitive name match (only if unique)
/// 3. Indexed path
/// 4. Canonical path for the input taken as a name
/// 5. Any existing file (so unindexed notes can be re-indexed)
pub fn resolve_note(index: &NoteIndex, identifier: &str) -> Option<PathBuf> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }

    if let Some(path) = index.path_for_name(identifier) {
        return Some(path.to_path_buf());
    }

    let lower = identifier.to_lowercase();
    let mut matches = index
        .names()
        .iter()
        .filter(|(name, _)| name.to_lowercase() == lower);
    if let (Some((_, path)), None) = (matches.next(), matches.next()) {
        return Some(path.clone());
    }

    let as_path = Path::new(identifier);
    if index.contains(as_path) {
        return Some(as_path.to_path_buf());
    }

    let canonical = index.canonical_path(identifier);
    if index.contains(&canonical) {
        return Some(canonical);
    }

    as_path.is_file().then(|| as_path.to_path_buf())
}

/// Resolves a deleted note by path, file name, or note name.
pub fn resolve_deleted(index: &NoteIndex, identifier: &str) -> Option<PathBuf> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }

    let as_path = Path::new(identifier);
    if as_path.is_file() {
        return Some(as_path.to_path_buf());
    }

    let deleted = deleted_dir(index.notes_dir());
    [
        deleted.join(identifier),
        deleted.join(canonical_file_name(identifier, index.ext())),
    ]
    .into_iter()
    .find(|p| p.is_file())
}
