//! Core types: note header format and parse errors

mod note;

pub use note::{NAME_MARKER, NoteHeader, ParseNoteError, TAG_MARKER, note_template};
