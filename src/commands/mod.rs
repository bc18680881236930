//! Command implementations for herald.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod payload;
mod render;
mod send;
mod templates;

use crate::cli::Command;
use crate::context::Environment;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// `env` is the environment captured at start-up; commands never read the
/// process environment themselves.
pub fn dispatch(command: Command, env: &Environment) -> Result<()> {
    match command {
        Command::Send(args) => send::cmd_send(&args, env),
        Command::Render(args) => render::cmd_render(&args, env),
        Command::Templates(args) => templates::cmd_templates(&args),
    }
}
