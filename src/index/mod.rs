//! In-memory note index and the startup scan that fills it

mod builder;
mod error;
mod note_index;

pub use builder::{BuildError, BuildResult, FileResult, IndexBuilder, NoopReporter, ProgressReporter};
pub use error::{IndexError, IndexResult};
pub use note_index::{IndexOutcome, IndexedNote, NoteIndex};
