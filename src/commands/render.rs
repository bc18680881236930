//! Implementation of the `herald render` command.
//!
//! Builds the notification exactly as `send` would and prints it to stdout
//! as pretty JSON. Nothing is delivered.

use super::payload::{build_payload, load_options};
use crate::cli::PayloadArgs;
use crate::context::Environment;
use crate::error::{HeraldError, Result};
use crate::pipeline::Envelope;

/// Execute the `herald render` command.
pub fn cmd_render(args: &PayloadArgs, env: &Environment) -> Result<()> {
    let envelope = render_envelope(args, env)?;
    println!("{}", to_pretty_json(&envelope)?);
    Ok(())
}

pub(crate) fn render_envelope(args: &PayloadArgs, env: &Environment) -> Result<Envelope> {
    let options = load_options(args, &args.overrides())?;
    build_payload(args, &options, env)
}

fn to_pretty_json(envelope: &Envelope) -> Result<String> {
    serde_json::to_string_pretty(envelope)
        .map_err(|e| HeraldError::UserError(format!("failed to serialize notification: {}", e)))
}
