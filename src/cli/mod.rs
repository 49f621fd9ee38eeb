//! CLI command definitions and handlers

pub mod app;
pub mod completer;
pub mod config;
pub mod handlers;
pub mod operation;
pub mod output;
pub mod shell;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// quick-notes - tagged text notes from an interactive prompt
#[derive(Parser, Debug)]
#[command(name = "quick-notes", version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ~/quick-notes.yaml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Notes directory (overrides note.location from the config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to the interactive prompt
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive prompt
    Shell,

    /// Scan the notes directory and report malformed notes
    Index,

    /// List notes, optionally filtered by tags
    #[command(name = "ls")]
    List(ListArgs),

    /// List all tags
    Tags(TagsArgs),

    /// Show prompt completions for a query (e.g. "en shop")
    Find(FindArgs),

    /// Create a new note and open it in the editor
    New(NewArgs),

    /// Edit a note in your editor
    Edit(NoteArgs),

    /// Move a note to the deleted directory
    Delete(NoteArgs),

    /// Move a deleted note back
    Restore(NoteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Filter by tag (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// List deleted notes instead
    #[arg(long)]
    pub deleted: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Show note counts for each tag
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `find` command
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Prompt input: action code, search code, then keywords
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note name; omit to start from the scratch file
    pub name: Vec<String>,
}

/// Arguments for commands taking a single note
#[derive(Parser, Debug)]
pub struct NoteArgs {
    /// Note name or path
    pub note: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
