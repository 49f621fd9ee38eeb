//! Completion hints for prompt input.
//!
//! Input has the shape `<action><search_by> <keywords>`, e.g. `et rust` means
//! "edit a note found by the tag rust". Each completion's `text` is a
//! ready-to-run prompt line such as `edit /notes/rust_tips.md`.

use log::debug;
use regex::RegexBuilder;
use serde::Serialize;

use crate::cli::config::Config;
use crate::cli::operation::{CREATE_CODE, CREATE_NAME};
use crate::cli::output::hashtags;
use crate::index::NoteIndex;
use crate::infra::read_note_content;

/// Minimum keyword length before content is searched.
const MIN_CONTENT_KEYWORDS: usize = 2;

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Text that replaces the input when chosen.
    pub text: String,
    /// Label shown in the list.
    pub display: String,
    /// Extra context shown next to the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

impl Completion {
    fn hint(display: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            display: display.into(),
            meta: None,
        }
    }
}

/// Produces completions from the configuration and the current index.
pub struct Completer<'a> {
    config: &'a Config,
    index: &'a NoteIndex,
}

impl<'a> Completer<'a> {
    pub fn new(config: &'a Config, index: &'a NoteIndex) -> Self {
        Self { config, index }
    }

    pub fn complete(&self, input: &str) -> Vec<Completion> {
        let input = input.trim_start();
        let chars: Vec<char> = input.chars().collect();

        match chars.as_slice() {
            [] => Vec::new(),
            [action] => {
                let action = action.to_string();
                if action == CREATE_CODE {
                    vec![Completion {
                        text: CREATE_NAME.to_string(),
                        display: "create note (press enter)".to_string(),
                        meta: None,
                    }]
                } else {
                    vec![Completion::hint(self.action_hint(&action))]
                }
            }
            [action, search_by] => {
                let hint = format!(
                    "{}, {}",
                    self.action_hint(&action.to_string()),
                    self.search_by_hint(&search_by.to_string())
                );
                vec![Completion::hint(hint)]
            }
            [action, search_by, rest @ ..] => {
                let Some(action) = self.config.action(&action.to_string()) else {
                    return Vec::new();
                };
                let keywords: String = rest.iter().skip(1).collect();
                match *search_by {
                    't' => self.by_tag(&action.name, &keywords),
                    'n' => self.by_name(&action.name, &keywords),
                    'c' => self.by_content(&action.name, &keywords),
                    _ => Vec::new(),
                }
            }
        }
    }

    fn action_hint(&self, code: &str) -> String {
        if let Some(action) = self.config.action(code) {
            return action.hint.clone();
        }
        let options: Vec<String> = self
            .config
            .actions
            .iter()
            .map(|(key, a)| format!("{}({})", a.name, key))
            .collect();
        format!(
            "action '{code}' undefined, should be one of {}",
            options.join(", ")
        )
    }

    fn search_by_hint(&self, code: &str) -> String {
        if let Some(search_by) = self.config.search_by(code) {
            return search_by.hint.clone();
        }
        let options: Vec<String> = self
            .config
            .search_by
            .iter()
            .map(|(key, s)| format!("{}({})", s.name, key))
            .collect();
        format!(
            "search by '{code}' undefined, should be one of {}",
            options.join(", ")
        )
    }

    fn by_tag(&self, action_name: &str, keywords: &str) -> Vec<Completion> {
        let tags = self.index.tags();
        if keywords.trim().is_empty() {
            return tags
                .iter()
                .map(|(tag, paths)| Completion {
                    text: " ".to_string(),
                    display: format!("#{tag} ({} notes)", paths.len()),
                    meta: None,
                })
                .collect();
        }

        let wanted: Vec<String> = keywords
            .split(',')
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        let mut completions = Vec::new();
        for (tag, paths) in tags {
            let lower = tag.to_lowercase();
            if !wanted.iter().any(|k| lower.contains(k.as_str())) {
                continue;
            }
            for path in paths {
                let Some(note) = self.index.get(path) else {
                    continue;
                };
                completions.push(Completion {
                    text: format!("{action_name} {}", path.display()),
                    display: note.name().to_string(),
                    meta: Some(format!("#{tag}")),
                });
            }
        }
        completions
    }

    fn by_name(&self, action_name: &str, keywords: &str) -> Vec<Completion> {
        let needle = keywords.trim().to_lowercase();
        self.index
            .names()
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&needle))
            .map(|(name, path)| {
                let tags = self
                    .index
                    .get(path)
                    .map(|note| hashtags(note.tags()))
                    .filter(|t| !t.is_empty());
                Completion {
                    text: format!("{action_name} {}", path.display()),
                    display: name.clone(),
                    meta: tags,
                }
            })
            .collect()
    }

    fn by_content(&self, action_name: &str, keywords: &str) -> Vec<Completion> {
        let keywords = keywords.trim();
        if keywords.chars().count() < MIN_CONTENT_KEYWORDS {
            return Vec::new();
        }
        let Ok(pattern) = RegexBuilder::new(&regex::escape(keywords))
            .case_insensitive(true)
            .build()
        else {
            return Vec::new();
        };

        let mut completions = Vec::new();
        for (path, note) in self.index.notes() {
            let content = match read_note_content(path) {
                Ok(content) => content,
                Err(e) => {
                    debug!("skipping content search in {}: {}", path.display(), e);
                    continue;
                }
            };
            for (number, line) in content.lines().enumerate() {
                if pattern.is_match(line) {
                    completions.push(Completion {
                        text: format!("{action_name} {}", path.display()),
                        display: note.name().to_string(),
                        meta: Some(format!("{}: {}", number + 1, line.trim())),
                    });
                }
            }
        }
        completions
    }
}
