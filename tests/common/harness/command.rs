//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `quick-notes` binary.
pub struct QnCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl QnCommand {
    /// Creates a new command for the `quick-notes` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--config` option.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets the `--dir` option to override the notes directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds `input` to the process's stdin.
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("quick-notes").expect("Failed to find quick-notes binary");
        cmd.args(&self.args).env_remove("RUST_LOG");
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    pub fn index(self) -> Self {
        self.args(["index"])
    }

    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    pub fn tags(self) -> Self {
        self.args(["tags"])
    }

    pub fn find(self, query: &str) -> Self {
        self.args(["find", query])
    }

    pub fn shell(self, input: &str) -> Self {
        self.args(["shell"]).stdin(input)
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for QnCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        QnCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_config_and_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = QnCommand::new().config(&temp.path().join("c.yaml")).dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--config");
        assert_eq!(args[2], "--dir");
        assert_eq!(args[3], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_output_success() {
        let output = QnCommand::new().args(["--help"]).output_success();
        assert!(output.contains("quick-notes") || output.contains("notes"));
    }
}
