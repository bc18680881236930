//! Options struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Options controlling one notification run.
///
/// Mirrors the CI step inputs. Unknown fields in the YAML are ignored for
/// forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    /// Name of the template to load (default: "plain").
    #[serde(default = "default_template")]
    pub template: String,

    /// Message template overriding the template's own message.
    pub message: Option<String>,

    /// Destination webhook URL. Only required when sending.
    pub webhook: Option<String>,

    /// Only consider the last commit of the push.
    #[serde(deserialize_with = "deserialize_flag")]
    pub last_commit_only: bool,

    /// Append the template's extra embeds.
    #[serde(deserialize_with = "deserialize_flag")]
    pub include_extras: bool,

    /// Regex patterns; a commit must match at least one (if any are given).
    #[serde(deserialize_with = "deserialize_patterns")]
    pub include_commits: Vec<String>,

    /// Regex patterns; a commit matching any of them is dropped.
    #[serde(deserialize_with = "deserialize_patterns")]
    pub exclude_commits: Vec<String>,

    /// Embed template as JSON text, overriding the template's embed.
    #[serde(deserialize_with = "deserialize_embed")]
    pub embed: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            template: default_template(),
            message: None,
            webhook: None,
            last_commit_only: false,
            include_extras: false,
            include_commits: Vec::new(),
            exclude_commits: Vec::new(),
            embed: None,
        }
    }
}

/// Raw option strings from the command line or `INPUT_*` environment
/// variables. `None` and blank strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOverrides {
    pub template: Option<String>,
    pub message: Option<String>,
    pub webhook: Option<String>,
    pub last_commit_only: Option<String>,
    pub include_extras: Option<String>,
    pub include_commits: Option<String>,
    pub exclude_commits: Option<String>,
    pub embed: Option<String>,
}
