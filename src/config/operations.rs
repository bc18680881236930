//! Options loading, merging, and validation.

use super::model::{InputOverrides, Options};
use super::types::{multiline_to_vec, string_or_false, string_to_bool};
use crate::error::{HeraldError, Result};
use reqwest::Url;
use serde_json::Value;
use std::path::Path;

impl Options {
    /// Load options from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Options)` - Successfully loaded and validated options
    /// * `Err(HeraldError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HeraldError::UserError(format!(
                "failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse options from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let options: Options = serde_yaml::from_str(yaml)
            .map_err(|e| HeraldError::UserError(format!("failed to parse options YAML: {}", e)))?;

        options.validate()?;
        Ok(options)
    }

    /// Apply command-line / environment overrides on top of these options.
    ///
    /// Blank override strings are treated as "not provided" so an empty
    /// `INPUT_*` variable never clears a value from the options file.
    pub fn apply(&mut self, overrides: &InputOverrides) {
        if let Some(template) = provided(&overrides.template) {
            self.template = template.trim().to_string();
        }
        if let Some(message) = provided(&overrides.message) {
            self.message = Some(message.to_string());
        }
        if let Some(webhook) = provided(&overrides.webhook) {
            self.webhook = Some(webhook.trim().to_string());
        }
        if let Some(flag) = provided(&overrides.last_commit_only) {
            self.last_commit_only = string_to_bool(flag);
        }
        if let Some(flag) = provided(&overrides.include_extras) {
            self.include_extras = string_to_bool(flag);
        }
        if let Some(patterns) = provided(&overrides.include_commits) {
            self.include_commits = multiline_to_vec(patterns);
        }
        if let Some(patterns) = provided(&overrides.exclude_commits) {
            self.exclude_commits = multiline_to_vec(patterns);
        }
        if let Some(embed) = provided(&overrides.embed) {
            self.embed = string_or_false(embed);
        }
    }

    /// Validate option values.
    ///
    /// Validation rules:
    /// - `template` must not be empty
    /// - `embed`, when set, must be valid JSON
    ///
    /// The webhook is checked separately by [`Options::webhook_url`] because
    /// rendering does not need one.
    pub fn validate(&self) -> Result<()> {
        if self.template.trim().is_empty() {
            return Err(HeraldError::UserError(
                "options validation failed: template must not be empty".to_string(),
            ));
        }

        self.embed_template()?;
        Ok(())
    }

    /// Parse the embed override, if any.
    pub fn embed_template(&self) -> Result<Option<Value>> {
        let Some(embed) = &self.embed else {
            return Ok(None);
        };

        serde_json::from_str(embed).map(Some).map_err(|e| {
            HeraldError::UserError(format!(
                "options validation failed: embed is not valid JSON: {}\n\
                 Fix: pass a JSON object, or 'false' to use the template's embed.",
                e
            ))
        })
    }

    /// Parse and check the webhook URL.
    pub fn webhook_url(&self) -> Result<Url> {
        let raw = self.webhook.as_deref().ok_or_else(|| {
            HeraldError::UserError(
                "no webhook configured.\n\
                 Fix: pass --webhook <url> or set INPUT_WEBHOOK."
                    .to_string(),
            )
        })?;

        parse_webhook(raw)
    }
}

/// Parse a webhook URL, accepting only absolute `http`/`https` URLs.
///
/// Error messages never echo the URL, since webhook URLs embed credentials.
pub fn parse_webhook(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        HeraldError::UserError(format!("webhook is not a valid URL: {}", e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(HeraldError::UserError(format!(
            "webhook must use http or https (found '{}')",
            scheme
        ))),
    }
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
