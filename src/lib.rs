//! quick-notes - tagged text notes managed from an interactive prompt

pub mod cli;
pub mod domain;
pub mod index;
pub mod infra;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io;

use cli::{
    Cli, Command,
    app::App,
    config::Config,
    handlers::{SystemEditor, execute, handle_find, handle_index, handle_list, handle_tags},
    operation::Operation,
    shell::run_shell,
};
use index::NoopReporter;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Command::Completions(args)) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(args.shell, &mut cmd, "quick-notes", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let mut app = App::new(config, cli.dir.as_ref())?;
    let verbose = cli.verbose > 0;

    if let Some(Command::Index) = &cli.command {
        return handle_index(&mut app, verbose);
    }

    // Malformed notes are logged by the scan and skipped.
    app.bootstrap(&mut NoopReporter)
        .with_context(|| "failed to load notes")?;

    let mut stdout = io::stdout();
    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(&mut app, io::stdin().lock(), &mut stdout, &SystemEditor),
        Command::List(args) => handle_list(&args, &app),
        Command::Tags(args) => handle_tags(&args, &app),
        Command::Find(args) => handle_find(&args, &app),
        Command::New(args) => {
            let name = args.name.join(" ");
            let name = (!name.trim().is_empty()).then_some(name);
            execute(&mut app, Operation::Create { name }, &mut stdout, &SystemEditor)
        }
        Command::Edit(args) => {
            let operation = Operation::Action {
                action: "edit".to_string(),
                target: args.note,
            };
            execute(&mut app, operation, &mut stdout, &SystemEditor)
        }
        Command::Delete(args) => execute(
            &mut app,
            Operation::Delete(args.note),
            &mut stdout,
            &SystemEditor,
        ),
        Command::Restore(args) => execute(
            &mut app,
            Operation::Restore(args.note),
            &mut stdout,
            &SystemEditor,
        ),
        Command::Index | Command::Completions(_) => Ok(()),
    }
}

/// Sets up `env_logger`; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
