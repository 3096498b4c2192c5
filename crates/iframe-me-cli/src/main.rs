use iframe_me_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Stdout carries the markup, so logs go to the state-dir file (stderr as fallback).
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("iframe-me error: {:#}", err);
        std::process::exit(1);
    }
}
