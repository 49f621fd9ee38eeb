//! Delete and restore handlers.
//!
//! Deleting moves a note into `<notes dir>/deleted/`, which the startup scan
//! never looks at; restoring moves it back and indexes it again.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::app::App;
use crate::index::IndexOutcome;
use crate::infra::{deleted_dir, move_note};

/// Moves `path` to the deleted directory and drops it from the index.
///
/// Returns the note's new location.
pub fn delete_note(app: &mut App, path: &Path) -> Result<PathBuf> {
    let target = deleted_dir(app.index().notes_dir());
    let moved = move_note(path, &target)
        .with_context(|| format!("failed to delete {}", path.display()))?;

    // The file is gone from `path`, so this removes its entry.
    app.index_mut()
        .index_note(path)
        .with_context(|| format!("failed to update index for {}", path.display()))?;

    Ok(moved)
}

/// Moves a deleted note back into the notes directory and indexes it.
///
/// Returns where the note ended up, which may differ from its file name if
/// its name line no longer matches.
pub fn restore_note(app: &mut App, path: &Path) -> Result<PathBuf> {
    let notes_dir = app.index().notes_dir().to_path_buf();
    let restored = move_note(path, &notes_dir)
        .with_context(|| format!("failed to restore {}", path.display()))?;

    let outcome = app
        .index_mut()
        .index_note(&restored)
        .with_context(|| format!("restored {} but could not index it", restored.display()))?;

    match outcome {
        IndexOutcome::Indexed { resolved, .. } => Ok(resolved),
        IndexOutcome::Missing { path } => Ok(path),
    }
}
