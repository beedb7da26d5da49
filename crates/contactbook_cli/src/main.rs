//! Console entry point.
//!
//! # Responsibility
//! - Resolve configuration from the working directory.
//! - Start file logging, open the session and run the menu on stdin/stdout.

use chrono::Local;
use contactbook_core::{init_logging, logging_status, run, AppConfig, Session};
use log::{error, info};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("cannot resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = AppConfig::from_working_dir(working_dir);

    // Logging is optional; the menu still works without it.
    match init_logging(config.log_level, &config.log_dir) {
        Ok(()) => {
            if let Some((level, log_dir)) = logging_status() {
                info!(
                    "event=cli_start module=cli status=ok level={} log_dir={}",
                    level,
                    log_dir.display()
                );
            }
        }
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    let mut session = Session::open(&config.data_file, Local::now().naive_local());
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&mut session, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=console_io module=cli status=error error={err}");
            eprintln!("console error: {err}");
            ExitCode::FAILURE
        }
    }
}
