//! Create note handler.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use super::EditorLauncher;
use crate::cli::app::App;
use crate::cli::operation::CREATE_NAME;
use crate::domain::note_template;
use crate::index::{IndexError, IndexOutcome};
use crate::infra::{title_case, write_new_note};

/// Result of a create request.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The note was written, edited, and indexed at the given path.
    Created(PathBuf),
    /// A note with that name already exists; nothing was done.
    AlreadyExists(PathBuf),
    /// The edited file could not be indexed (bad format or name clash).
    Rejected { path: PathBuf, reason: String },
    /// The file was gone after editing.
    Discarded(PathBuf),
}

/// Creates a note and opens it in the `create` action's editor.
///
/// With a name, the note is written straight to its canonical path with the
/// name title-cased. Without one, the configured scratch file is edited and
/// then moved to the canonical path of whatever name the user gave it.
pub fn create_note<E: EditorLauncher>(
    app: &mut App,
    name: Option<&str>,
    editor: &E,
) -> Result<CreateOutcome> {
    let path = match name.map(str::trim) {
        Some(name) => {
            if name.is_empty() {
                bail!("note name cannot be empty");
            }
            let name = title_case(name);
            let path = app.index().canonical_path(&name);
            if path.exists() {
                return Ok(CreateOutcome::AlreadyExists(path));
            }
            write_new_note(&path, &note_template(&name))
                .with_context(|| format!("failed to create note {}", path.display()))?;
            path
        }
        None => {
            let path = app.config().tmp_file_path()?;
            if !path.exists() {
                write_new_note(&path, &note_template(""))
                    .with_context(|| format!("failed to create scratch file {}", path.display()))?;
            }
            path
        }
    };

    let executor = app.config().executor(CREATE_NAME);
    editor.open(&executor, &path)?;

    match app.index_mut().index_note(&path) {
        Ok(IndexOutcome::Indexed { resolved, .. }) => Ok(CreateOutcome::Created(resolved)),
        Ok(IndexOutcome::Missing { path }) => Ok(CreateOutcome::Discarded(path)),
        Err(e) => match rejection_reason(&e) {
            Some(reason) => Ok(CreateOutcome::Rejected { path, reason }),
            None => Err(e).with_context(|| format!("failed to index {}", path.display())),
        },
    }
}

/// Describes index errors the user can fix by editing the note again.
pub(crate) fn rejection_reason(error: &IndexError) -> Option<String> {
    match error {
        IndexError::Format { source, .. } => Some(source.to_string()),
        e @ IndexError::NameConflict { .. } => Some(e.to_string()),
        _ => None,
    }
}
