//! File I/O operations for notes.

use crate::domain::{NoteHeader, ParseNoteError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Name of the directory (inside the notes directory) holding deleted notes.
pub const DELETED_DIR: &str = "deleted";

/// Errors during file system operations on notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("note file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse note at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseNoteError,
    },

    #[error("file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid encoding in {path}: not valid UTF-8")]
    InvalidEncoding { path: PathBuf },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists { path: path.into() },
            io::ErrorKind::InvalidData => FsError::InvalidEncoding { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads and parses the header (first two lines) of a note file.
///
/// Only the header is read; the file handle is released before returning on
/// every path, including parse failures.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::InvalidEncoding` if the header is not valid UTF-8.
/// Returns `FsError::Parse` if the header lines are malformed.
pub fn read_note_header(path: &Path) -> Result<NoteHeader, FsError> {
    let (first, second) = {
        let file = File::open(path).map_err(|e| FsError::from_io(path, e))?;
        let mut reader = BufReader::new(file);
        let first = read_line(&mut reader, path)?;
        let second = match first {
            Some(_) => read_line(&mut reader, path)?,
            None => None,
        };
        (first, second)
    };

    NoteHeader::from_lines(first.as_deref(), second.as_deref()).map_err(|e| FsError::Parse {
        path: path.into(),
        source: e,
    })
}

fn read_line<R: BufRead>(reader: &mut R, path: &Path) -> Result<Option<String>, FsError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| FsError::from_io(path, e))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Reads the full content of a note file.
pub fn read_note_content(path: &Path) -> Result<String, FsError> {
    std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
}

/// Writes a new note file atomically, refusing to overwrite.
///
/// Uses a temporary file in the target directory and a no-clobber persist
/// so an existing note is never replaced.
///
/// # Errors
///
/// Returns `FsError::AlreadyExists` if a file is already at `path`.
pub fn write_new_note(path: &Path, content: &str) -> Result<(), FsError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| FsError::from_io(path, e))?;
    temp.persist_noclobber(path)
        .map_err(|e| FsError::from_io(path, e.error))?;

    Ok(())
}

/// Renames `from` to `to`, copying across filesystems when a plain rename
/// can't.
///
/// The scratch file for new notes usually sits in `/tmp`, which is often a
/// different mount than the notes directory.
///
/// # Errors
///
/// Returns the underlying I/O error. On failure `from` is left in place and
/// nothing is left behind at `to`.
pub fn rename_file(from: &Path, to: &Path) -> io::Result<()> {
    match std::fs::rename(from, to) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => copy_then_remove(from, to),
        other => other,
    }
}

/// Copies `from` to `to` through a temp file next to `to`, then removes
/// `from`. Refuses to replace an existing `to`.
pub(crate) fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    let parent = match to.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut source = File::open(from)?;
    let mut temp = NamedTempFile::new_in(parent)?;
    io::copy(&mut source, temp.as_file_mut())?;
    temp.as_file().sync_all()?;
    drop(source);
    temp.persist_noclobber(to).map_err(|e| e.error)?;

    if let Err(e) = std::fs::remove_file(from) {
        // Keep a single copy of the note.
        let _ = std::fs::remove_file(to);
        return Err(e);
    }
    Ok(())
}

/// Creates `dir` (and parents) if it doesn't exist.
///
/// Returns `true` when the directory was created.
///
/// # Errors
///
/// Returns `FsError::NotADirectory` if `dir` exists but is a file.
pub fn ensure_dir(dir: &Path) -> Result<bool, FsError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(FsError::NotADirectory { path: dir.into() });
        }
        return Ok(false);
    }
    std::fs::create_dir_all(dir).map_err(|e| FsError::from_io(dir, e))?;
    Ok(true)
}

/// Moves a note file into `target_dir`, keeping its file name.
///
/// The target directory is created if needed. Returns the new path.
///
/// # Errors
///
/// Returns `FsError::NotFound` if `path` doesn't exist and
/// `FsError::AlreadyExists` if the destination is taken.
pub fn move_note(path: &Path, target_dir: &Path) -> Result<PathBuf, FsError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| FsError::NotFound { path: path.into() })?;
    if !path.is_file() {
        return Err(FsError::NotFound { path: path.into() });
    }

    ensure_dir(target_dir)?;
    let destination = target_dir.join(file_name);
    if destination.exists() {
        return Err(FsError::AlreadyExists { path: destination });
    }

    rename_file(path, &destination).map_err(|e| FsError::from_io(path, e))?;
    Ok(destination)
}

/// Returns the directory deleted notes are moved into.
pub fn deleted_dir(notes_dir: &Path) -> PathBuf {
    notes_dir.join(DELETED_DIR)
}

/// Scans a directory (not recursively) for note files with extension `ext`.
///
/// Skips hidden files and anything that is not a regular file, so the
/// `deleted/` directory is never descended into.
///
/// Returns full paths, sorted by file name.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist.
/// Returns `FsError::NotADirectory` if the path is not a directory.
pub fn scan_notes_directory(
    dir: &Path,
    ext: &str,
) -> Result<impl Iterator<Item = PathBuf> + use<>, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound { path: dir.into() });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory { path: dir.into() });
    }

    let ext = ext.to_string();
    let iter = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| !is_hidden(e))
        .filter(|e| e.file_type().is_file())
        .filter(move |e| has_extension(e, &ext))
        .map(DirEntry::into_path);

    Ok(iter)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_extension(entry: &DirEntry, ext: &str) -> bool {
    entry.path().extension().is_some_and(|e| e == ext)
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
