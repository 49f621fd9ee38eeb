//! Canonical file naming for notes.

use std::path::{Path, PathBuf};

/// Converts a note name into its file stem.
///
/// - Converts to lowercase
/// - Joins whitespace-separated words with underscores
///
/// # Examples
///
/// ```
/// use quick_notes::infra::file_stem_for;
///
/// assert_eq!(file_stem_for("Shopping List"), "shopping_list");
/// assert_eq!(file_stem_for("  Bar   Baz "), "bar_baz");
/// ```
pub fn file_stem_for(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Generates a note filename from its name and extension.
///
/// Format: `{stem}.{ext}`
///
/// # Examples
///
/// ```
/// use quick_notes::infra::canonical_file_name;
///
/// assert_eq!(canonical_file_name("Bar Baz", "md"), "bar_baz.md");
/// ```
pub fn canonical_file_name(name: &str, ext: &str) -> String {
    format!("{}.{}", file_stem_for(name), ext)
}

/// Returns the path a note with `name` should live at inside `dir`.
///
/// Pure: the file does not need to exist.
pub fn canonical_path(dir: &Path, name: &str, ext: &str) -> PathBuf {
    dir.join(canonical_file_name(name, ext))
}

/// Capitalizes the first letter of every word and lowercases the rest.
///
/// Used for names typed at the prompt (`create shopping list`).
///
/// # Examples
///
/// ```
/// use quick_notes::infra::title_case;
///
/// assert_eq!(title_case("shopping LIST"), "Shopping List");
/// ```
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }
    result
}
