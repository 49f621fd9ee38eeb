//! Interactive prompt loop.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::cli::app::App;
use crate::cli::handlers::{EditorLauncher, execute};
use crate::cli::operation::Operation;

/// Reads operations from `input` until `q` or end of input.
///
/// Errors from a single operation are reported and the loop continues; only
/// failures to read input or write output end it early.
pub fn run_shell<R: BufRead, W: Write, E: EditorLauncher>(
    app: &mut App,
    mut input: R,
    out: &mut W,
    editor: &E,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{}", app.config().prompt())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let Some(operation) = Operation::parse(&line, app.config()) else {
            continue;
        };
        if operation == Operation::Quit {
            break;
        }

        if let Err(e) = execute(app, operation, out, editor) {
            log::debug!("operation failed: {e:?}");
            writeln!(out, "error: {e:#}")?;
        }
    }

    writeln!(out, "quick-notes terminated")?;
    Ok(())
}
