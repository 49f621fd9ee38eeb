//! Note header: the name and tag lines at the top of every note file.

use serde::Serialize;
use thiserror::Error;

/// Marker that starts the name line.
pub const NAME_MARKER: &str = "##";

/// Marker that starts the tag line and prefixes each tag token.
pub const TAG_MARKER: char = '#';

/// Error returned when a note's header lines are malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNoteError {
    #[error("missing name marker: first line does not start with '##'")]
    MissingNameMarker,

    #[error("empty name: first line has nothing after '##'")]
    EmptyName,

    #[error("missing tag marker: second line does not start with '#', should be tags. e.g. '#python #101'")]
    MissingTagMarker,
}

/// The parsed header of a note file.
///
/// A note file looks like:
///
/// ```text
/// ## Shopping List
/// #errands #home
/// Buy milk
/// ```
///
/// Only the first two lines are interpreted; the body is free-form.
///
/// # Examples
///
/// ```
/// use quick_notes::domain::NoteHeader;
///
/// let header = NoteHeader::parse("## Shopping List\n#errands #home\nBuy milk\n").unwrap();
/// assert_eq!(header.name(), "Shopping List");
/// assert_eq!(header.tags(), ["errands", "home"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteHeader {
    name: String,
    tags: Vec<String>,
}

impl NoteHeader {
    /// Creates a header from already-extracted parts.
    pub fn new(name: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }

    /// Parses the header from note content.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the first line is not a `##` name line
    /// or the second line is not a `#` tag line.
    pub fn parse(content: &str) -> Result<Self, ParseNoteError> {
        let mut lines = content.lines();
        let name = parse_name_line(lines.next())?;
        let tags = parse_tag_line(lines.next())?;
        Ok(Self { name, tags })
    }

    /// Parses the header from its two lines, as read from a file.
    pub fn from_lines(first: Option<&str>, second: Option<&str>) -> Result<Self, ParseNoteError> {
        let name = parse_name_line(first)?;
        let tags = parse_tag_line(second)?;
        Ok(Self { name, tags })
    }

    /// Returns the note's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the note's tags in file order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Consumes the header, returning its parts.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.name, self.tags)
    }

    /// Renders the header followed by `body` as note file content.
    ///
    /// An empty tag list renders a bare `#` so the file still parses.
    pub fn render(&self, body: &str) -> String {
        let tag_line = if self.tags.is_empty() {
            TAG_MARKER.to_string()
        } else {
            self.tags
                .iter()
                .map(|t| format!("{TAG_MARKER}{t}"))
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!("{NAME_MARKER} {}\n{tag_line}\n{body}", self.name)
    }
}

/// Content written for a brand new note before the editor opens.
pub fn note_template(name: &str) -> String {
    NoteHeader::new(name, Vec::new()).render("")
}

fn parse_name_line(line: Option<&str>) -> Result<String, ParseNoteError> {
    let rest = line
        .map(str::trim)
        .and_then(|l| l.strip_prefix(NAME_MARKER))
        .ok_or(ParseNoteError::MissingNameMarker)?;

    let name = rest.trim_start_matches(TAG_MARKER).trim();
    if name.is_empty() {
        return Err(ParseNoteError::EmptyName);
    }
    Ok(name.to_string())
}

fn parse_tag_line(line: Option<&str>) -> Result<Vec<String>, ParseNoteError> {
    let line = line
        .map(str::trim)
        .filter(|l| l.starts_with(TAG_MARKER))
        .ok_or(ParseNoteError::MissingTagMarker)?;

    let tags = line
        .split_whitespace()
        .map(|token| token.strip_prefix(TAG_MARKER).unwrap_or(token).trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    Ok(tags)
}
