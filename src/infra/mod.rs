//! File I/O and naming policy

mod fs;
mod naming;

pub use fs::{
    DELETED_DIR, FsError, deleted_dir, ensure_dir, expand_home, move_note, read_note_content,
    read_note_header, rename_file, scan_notes_directory, write_new_note,
};
pub use naming::{canonical_file_name, canonical_path, file_stem_for, title_case};
