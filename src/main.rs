//! Herald: turn a push event's commits into a single chat webhook notification.
//!
//! This is the main entry point for the `herald` CLI. It parses arguments,
//! captures the environment once, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod delivery;
pub mod error;
pub mod event;
pub mod exit_codes;
pub mod logging;
pub mod pipeline;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use context::Environment;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let env = Environment::capture();
    logging::init(&env, cli.verbose);

    match commands::dispatch(cli.command, &env) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
