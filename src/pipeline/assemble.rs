//! Envelope assembly.

use super::commit::annotate;
use super::filter::CommitFilter;
use crate::config::Options;
use crate::context::RenderContext;
use crate::error::Result;
use crate::template::{Materializer, Resolver, TemplateModule};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Maximum number of embeds in one notification.
pub const MAX_EMBEDS: usize = 10;

/// The notification body delivered to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub content: String,
    pub embeds: Vec<Value>,
}

/// The three templates one notification is rendered from, after option
/// overrides have been applied to the selected template module.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadSpec {
    pub message: String,
    pub embed: Value,
    pub extras: Vec<Value>,
}

impl PayloadSpec {
    /// Combine a template module with the `message`, `embed` and
    /// `include-extras` options.
    ///
    /// # Returns
    ///
    /// * `Err(HeraldError::UserError)` - The embed override is not valid JSON
    pub fn from_template(module: &TemplateModule, options: &Options) -> Result<Self> {
        let message = options
            .message
            .clone()
            .unwrap_or_else(|| module.message.clone());
        let embed = options
            .embed_template()?
            .unwrap_or_else(|| module.embed.clone());
        let extras = if options.include_extras {
            module.extras.clone()
        } else {
            Vec::new()
        };

        Ok(Self {
            message,
            embed,
            extras,
        })
    }
}

/// `null`, `false`, `0`, `""`, `{}` and `[]`.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Render one notification.
///
/// Selected commits each produce one embed, truncated so that the extras
/// still fit within [`MAX_EMBEDS`]; extras are always appended in full.
/// Falsy embeds are dropped last.
pub fn build_envelope<R: Resolver>(
    materializer: &Materializer<R>,
    spec: &PayloadSpec,
    filter: &CommitFilter,
    context: &RenderContext,
    commits: &[Value],
) -> Envelope {
    let selected = filter.select(commits);
    let quota = MAX_EMBEDS.saturating_sub(spec.extras.len());

    debug!(
        total = commits.len(),
        selected = selected.len(),
        quota,
        extras = spec.extras.len(),
        "assembling notification"
    );

    let commit_embeds = selected.into_iter().take(quota).map(|commit| {
        let commit_context = context.for_commit(annotate(commit));
        materializer.materialize(&commit_context, &spec.embed)
    });

    let extra_embeds = spec
        .extras
        .iter()
        .map(|extra| materializer.materialize(context.shared(), extra));

    let embeds: Vec<Value> = commit_embeds
        .chain(extra_embeds)
        .filter(|embed| !is_falsy(embed))
        .collect();

    Envelope {
        content: materializer.materialize_str(context.shared(), &spec.message),
        embeds,
    }
}
