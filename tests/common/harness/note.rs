//! Builder for test notes with sensible defaults.

use quick_notes::domain::NoteHeader;
use quick_notes::infra::canonical_file_name;

/// Builder for creating test notes.
///
/// Renders a `## name` line, a `#tag` line and the body, the same layout
/// the application writes.
#[derive(Debug, Clone)]
pub struct TestNote {
    name: String,
    tags: Vec<String>,
    body: String,
    file_name: Option<String>,
}

#[allow(dead_code)]
impl TestNote {
    /// Creates a new untagged test note with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            body: String::new(),
            file_name: None,
        }
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the body text below the header.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Writes the note under `file_name` instead of its canonical name.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// File name the note is written under.
    pub fn get_file_name(&self) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| canonical_file_name(&self.name, "md"))
    }

    /// File name the application will move the note to.
    pub fn canonical_file_name(&self) -> String {
        canonical_file_name(&self.name, "md")
    }

    /// Renders the full file content.
    pub fn render(&self) -> String {
        NoteHeader::new(self.name.clone(), self.tags.clone()).render(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_renders_header() {
        let note = TestNote::new("Shopping List").tag("errands").body("milk\n");
        assert_eq!(note.render(), "## Shopping List\n#errands\nmilk\n");
    }

    #[test]
    fn test_note_without_tags_renders_bare_marker() {
        assert_eq!(TestNote::new("Plain").render(), "## Plain\n#\n");
    }

    #[test]
    fn test_note_file_name_defaults_to_canonical() {
        let note = TestNote::new("Shopping List");
        assert_eq!(note.get_file_name(), "shopping_list.md");
        let note = note.file_name("misc.md");
        assert_eq!(note.get_file_name(), "misc.md");
        assert_eq!(note.canonical_file_name(), "shopping_list.md");
    }
}
