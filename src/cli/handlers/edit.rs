//! Configured action handler (edit, view, ...).

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use super::EditorLauncher;
use super::new::rejection_reason;
use crate::cli::app::App;
use crate::index::IndexOutcome;

/// Result of running an action on a note.
#[derive(Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The note was re-indexed; `previous != resolved` if it was renamed.
    Updated { previous: PathBuf, resolved: PathBuf },
    /// The note no longer exists and was dropped from the index.
    Removed(PathBuf),
    /// The note could not be re-indexed; its old index entry is kept.
    Rejected { path: PathBuf, reason: String },
}

/// Runs the named action's executor on `path`, then re-indexes the note.
///
/// # Errors
///
/// Returns an error if no action has that name or the executor fails.
pub fn run_action<E: EditorLauncher>(
    app: &mut App,
    action: &str,
    path: &Path,
    editor: &E,
) -> Result<ActionOutcome> {
    if app.config().action_by_name(action).is_none() {
        bail!("unknown action '{}'", action);
    }

    let executor = app.config().executor(action);
    editor.open(&executor, path)?;

    match app.index_mut().index_note(path) {
        Ok(IndexOutcome::Indexed { previous, resolved }) => {
            Ok(ActionOutcome::Updated { previous, resolved })
        }
        Ok(IndexOutcome::Missing { path }) => Ok(ActionOutcome::Removed(path)),
        Err(e) => match rejection_reason(&e) {
            Some(reason) => Ok(ActionOutcome::Rejected {
                path: path.to_path_buf(),
                reason,
            }),
            None => Err(e).with_context(|| format!("failed to index {}", path.display())),
        },
    }
}
