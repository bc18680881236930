//! CLI argument parsing for herald.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.
//!
//! Every run option can also be given through the `INPUT_<NAME>` variables a
//! CI runner sets for step inputs, so the binary works unchanged as a
//! workflow step.

use crate::config::InputOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Herald: turn a push event's commits into a single chat webhook notification.
///
/// Each selected commit becomes one embed rendered from a template; the
/// notification is delivered with exactly one POST.
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log at debug level (overridden by HERALD_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for herald.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the notification and deliver it to the webhook.
    ///
    /// Performs exactly one POST. A transport error or non-2xx response
    /// fails with exit code 3.
    Send(SendArgs),

    /// Build the notification and print it as JSON without delivering.
    Render(PayloadArgs),

    /// List the available templates.
    Templates(TemplatesArgs),
}

/// Options shared by `send` and `render`.
#[derive(Args, Debug, Clone, Default)]
pub struct PayloadArgs {
    /// Template name (default: plain).
    #[arg(long, env = "INPUT_TEMPLATE")]
    pub template: Option<String>,

    /// Message template, overriding the template's message.
    #[arg(long, env = "INPUT_MESSAGE")]
    pub message: Option<String>,

    /// Only notify about the last commit of the push.
    #[arg(
        long,
        env = "INPUT_LAST-COMMIT-ONLY",
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub last_commit_only: Option<String>,

    /// Append the template's extra embeds.
    #[arg(
        long,
        env = "INPUT_INCLUDE-EXTRAS",
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub include_extras: Option<String>,

    /// Regex patterns, one per line; commits must match at least one.
    #[arg(long, env = "INPUT_INCLUDE-COMMITS", value_name = "PATTERNS")]
    pub include_commits: Option<String>,

    /// Regex patterns, one per line; commits matching any are skipped.
    #[arg(long, env = "INPUT_EXCLUDE-COMMITS", value_name = "PATTERNS")]
    pub exclude_commits: Option<String>,

    /// Embed template as JSON, or 'false' to use the template's embed.
    #[arg(long, env = "INPUT_EMBED", value_name = "JSON")]
    pub embed: Option<String>,

    /// Push event JSON file.
    #[arg(long, env = "GITHUB_EVENT_PATH", value_name = "FILE")]
    pub event_path: Option<PathBuf>,

    /// YAML options file, applied beneath flags and INPUT_* variables.
    #[arg(long, env = "HERALD_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory of additional templates (*.yaml, *.yml, *.json).
    #[arg(long, env = "HERALD_TEMPLATES_DIR", value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,
}

impl PayloadArgs {
    /// The run options given on the command line or through `INPUT_*`.
    pub fn overrides(&self) -> InputOverrides {
        InputOverrides {
            template: self.template.clone(),
            message: self.message.clone(),
            webhook: None,
            last_commit_only: self.last_commit_only.clone(),
            include_extras: self.include_extras.clone(),
            include_commits: self.include_commits.clone(),
            exclude_commits: self.exclude_commits.clone(),
            embed: self.embed.clone(),
        }
    }
}

/// Arguments for the `send` command.
#[derive(Args, Debug, Clone, Default)]
pub struct SendArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,

    /// Destination webhook URL.
    #[arg(long, env = "INPUT_WEBHOOK", hide_env_values = true, value_name = "URL")]
    pub webhook: Option<String>,
}

impl SendArgs {
    pub fn overrides(&self) -> InputOverrides {
        InputOverrides {
            webhook: self.webhook.clone(),
            ..self.payload.overrides()
        }
    }
}

/// Arguments for the `templates` command.
#[derive(Args, Debug, Clone, Default)]
pub struct TemplatesArgs {
    /// Directory of additional templates (*.yaml, *.yml, *.json).
    #[arg(long, env = "HERALD_TEMPLATES_DIR", value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
