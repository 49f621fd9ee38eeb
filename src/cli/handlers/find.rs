//! Find command handler: completion hints outside the prompt.

use anyhow::Result;
use std::io::Write;

use crate::cli::FindArgs;
use crate::cli::app::App;
use crate::cli::completer::{Completer, Completion};
use crate::cli::output::{Output, OutputFormat};

pub fn handle_find(args: &FindArgs, app: &App) -> Result<()> {
    let completions = Completer::new(app.config(), app.index()).complete(&args.query);

    match args.format {
        OutputFormat::Human => print_completions(&mut std::io::stdout(), &completions)?,
        OutputFormat::Json => {
            let out = Output::new(&completions);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Paths => {
            for completion in &completions {
                if let Some((_, path)) = completion.text.split_once(' ')
                    && !path.trim().is_empty()
                {
                    println!("{}", path);
                }
            }
        }
    }
    Ok(())
}

/// Writes completions as an aligned list.
pub(crate) fn print_completions<W: Write>(out: &mut W, completions: &[Completion]) -> Result<()> {
    if completions.is_empty() {
        writeln!(out, "No matches.")?;
        return Ok(());
    }

    for completion in completions {
        match &completion.meta {
            Some(meta) => writeln!(out, "  {:<30}  {}", completion.display, meta)?,
            None => writeln!(out, "  {}", completion.display)?,
        }
        if !completion.text.trim().is_empty() {
            writeln!(out, "      {}", completion.text)?;
        }
    }
    Ok(())
}
