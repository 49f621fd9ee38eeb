//! Command handlers for the CLI.

mod edit;
mod find;
mod index;
mod list;
mod new;
mod resolve;
mod trash;


use anyhow::{Context, Result, anyhow, bail};
use std::io::Write;
use std::path::Path;
use std::process::Command;

use crate::cli::app::App;
use crate::cli::completer::Completer;
use crate::cli::operation::Operation;
use crate::index::{FileResult, ProgressReporter};

// Re-export public items
pub use edit::{ActionOutcome, run_action};
pub use find::handle_find;
pub use index::handle_index;
pub use list::{handle_list, handle_tags};
pub use new::{CreateOutcome, create_note};
pub use resolve::{resolve_deleted, resolve_note};
pub use trash::{delete_note, restore_note};

pub(crate) use find::print_completions;

// ===========================================
// Editor Launching
// ===========================================

/// Trait for launching an editor (allows mocking in tests).
pub trait EditorLauncher {
    /// Runs `executor` with `path` appended and waits for it to exit.
    fn open(&self, executor: &str, path: &Path) -> Result<()>;
}

/// Launches executors as child processes.
pub struct SystemEditor;

impl EditorLauncher for SystemEditor {
    fn open(&self, executor: &str, path: &Path) -> Result<()> {
        // Executors may include args like "code --wait"
        let parts: Vec<&str> = executor.split_whitespace().collect();
        let Some((cmd, args)) = parts.split_first() else {
            bail!("editor command is empty");
        };

        let status = Command::new(cmd)
            .args(args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to launch editor '{}'", executor))?;

        if !status.success() {
            bail!("editor '{}' exited with non-zero status", executor);
        }

        Ok(())
    }
}

// ===========================================
// Operation Dispatch
// ===========================================

/// Runs one prompt operation, writing its report to `out`.
///
/// `Quit` is a no-op here; the caller decides when to stop.
pub fn execute<W: Write, E: EditorLauncher>(
    app: &mut App,
    operation: Operation,
    out: &mut W,
    editor: &E,
) -> Result<()> {
    match operation {
        Operation::Quit => {}
        Operation::Create { name } => match create_note(app, name.as_deref(), editor)? {
            CreateOutcome::Created(path) => {
                writeln!(out, "Created note cached as {}", path.display())?
            }
            CreateOutcome::AlreadyExists(path) => writeln!(
                out,
                "Aborted creating note, already exist: {}",
                path.display()
            )?,
            CreateOutcome::Rejected { path, reason } => {
                writeln!(out, "Failed to cache {}: {}", path.display(), reason)?
            }
            CreateOutcome::Discarded(path) => {
                writeln!(out, "Note {} was not saved", path.display())?
            }
        },
        Operation::Delete(target) => {
            let path = resolve_note(app.index(), &target)
                .ok_or_else(|| anyhow!("note not found: '{}'", target))?;
            delete_note(app, &path)?;
            writeln!(out, "Marked {} deleted", path.display())?;
        }
        Operation::Restore(target) => {
            let path = resolve_deleted(app.index(), &target)
                .ok_or_else(|| anyhow!("deleted note not found: '{}'", target))?;
            let restored = restore_note(app, &path)?;
            writeln!(out, "Restored {}", restored.display())?;
        }
        Operation::Action { action, target } => {
            let path = resolve_note(app.index(), &target)
                .ok_or_else(|| anyhow!("note not found: '{}'", target))?;
            match run_action(app, &action, &path, editor)? {
                ActionOutcome::Updated { previous, resolved } if previous != resolved => {
                    writeln!(
                        out,
                        "Moved {} to {}",
                        previous.display(),
                        resolved.display()
                    )?
                }
                ActionOutcome::Updated { .. } => {}
                ActionOutcome::Removed(path) => writeln!(
                    out,
                    "{} no longer exists, removed from index",
                    path.display()
                )?,
                ActionOutcome::Rejected { path, reason } => {
                    writeln!(out, "Failed to cache {}: {}", path.display(), reason)?
                }
            }
        }
        Operation::Query(input) => {
            let completions = Completer::new(app.config(), app.index()).complete(&input);
            print_completions(out, &completions)?;
        }
    }
    Ok(())
}

// ===========================================
// Shared Utilities
// ===========================================

/// Progress reporter that prints to stdout.
pub(crate) struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub(crate) fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn on_file(&mut self, path: &Path, result: FileResult) {
        if self.verbose {
            match result {
                FileResult::Indexed => println!("  indexed: {}", path.display()),
                FileResult::Renamed(to) => {
                    println!("  indexed: {} -> {}", path.display(), to.display())
                }
                FileResult::Missing => println!("  missing: {}", path.display()),
                FileResult::Error(msg) => eprintln!("  error: {}: {}", path.display(), msg),
            }
        }
    }

    fn on_complete(&mut self, indexed: usize, errors: usize) {
        if errors > 0 {
            eprintln!("Indexed {} notes with {} errors", indexed, errors);
        } else {
            println!("Indexed {} notes", indexed);
        }
    }
}
