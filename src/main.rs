use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = quick_notes::run() {
        log::debug!("{err:?}");
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
