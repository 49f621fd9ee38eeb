//! Parsing of the lines typed at the interactive prompt.

use crate::cli::config::Config;

pub const CREATE_CODE: &str = "c";
pub const CREATE_NAME: &str = "create";
pub const QUIT_CODE: &str = "q";
pub const DELETE_NAME: &str = "delete";
pub const RESTORE_NAME: &str = "restore";

/// A single request entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Create a note, named or through the scratch file.
    Create { name: Option<String> },
    /// Leave the prompt.
    Quit,
    /// Move a note to the deleted directory.
    Delete(String),
    /// Move a deleted note back.
    Restore(String),
    /// Run a configured action (`edit`, `view`, ...) on a note.
    Action { action: String, target: String },
    /// Anything else: show completion hints for it.
    Query(String),
}

impl Operation {
    /// Parses a prompt line. Returns `None` for a blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// use quick_notes::cli::config::Config;
    /// use quick_notes::cli::operation::Operation;
    ///
    /// let config = Config::bundled().unwrap();
    /// assert_eq!(
    ///     Operation::parse("edit /notes/todo.md", &config),
    ///     Some(Operation::Action { action: "edit".into(), target: "/notes/todo.md".into() })
    /// );
    /// ```
    pub fn parse(input: &str, config: &Config) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if input == CREATE_CODE || input == CREATE_NAME {
            return Some(Operation::Create { name: None });
        }
        if input == QUIT_CODE {
            return Some(Operation::Quit);
        }

        if let Some((head, rest)) = input.split_once(char::is_whitespace) {
            let rest = rest.trim().to_string();
            match head {
                CREATE_NAME => return Some(Operation::Create { name: Some(rest) }),
                DELETE_NAME => return Some(Operation::Delete(rest)),
                RESTORE_NAME => return Some(Operation::Restore(rest)),
                action if config.action_by_name(action).is_some() => {
                    return Some(Operation::Action {
                        action: action.to_string(),
                        target: rest,
                    });
                }
                _ => {}
            }
        }

        Some(Operation::Query(input.to_string()))
    }
}
