//! Index command handler.

use anyhow::{Context, Result};

use super::ConsoleReporter;
use crate::cli::app::App;

/// Scans the notes directory and reports what was indexed.
///
/// Malformed notes are listed but don't make the command fail.
pub fn handle_index(app: &mut App, verbose: bool) -> Result<()> {
    println!("Indexing {}...", app.index().notes_dir().display());

    let mut reporter = ConsoleReporter::new(verbose);
    let result = app
        .bootstrap(&mut reporter)
        .with_context(|| "failed to index notes")?;

    if verbose && result.renamed > 0 {
        println!("  {} moved to their canonical path", result.renamed);
    }
    for error in &result.errors {
        eprintln!("  {}", error);
    }

    Ok(())
}
