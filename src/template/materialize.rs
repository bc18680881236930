//! Template materialization over JSON trees.
//!
//! Every string leaf is scanned for `{{ expression }}` placeholders; each one
//! is replaced by the resolver's output. Keys, array lengths, and non-string
//! scalars are never changed.

use super::resolver::{PathResolver, ResolveError, Resolver};
use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A placeholder that failed to resolve, with the expression that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderError {
    /// The raw text between the braces.
    pub expression: String,
    /// Why it failed.
    pub error: ResolveError,
}

impl fmt::Display for PlaceholderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "placeholder '{{{{{}}}}}': {}", self.expression, self.error)
    }
}

impl std::error::Error for PlaceholderError {}

/// Walks template trees and substitutes placeholders through a [`Resolver`].
#[derive(Debug, Clone)]
pub struct Materializer<R = PathResolver> {
    resolver: R,
}

impl Default for Materializer<PathResolver> {
    fn default() -> Self {
        Self::new(PathResolver)
    }
}

impl<R: Resolver> Materializer<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Materialize `node` against `context`.
    ///
    /// A string leaf whose placeholders cannot all be resolved becomes the
    /// empty string; the failure is logged and siblings are unaffected.
    pub fn materialize(&self, context: &Value, node: &Value) -> Value {
        self.materialize_field(context, node, "$")
    }

    /// Materialize a single template string, e.g. the top-level message.
    pub fn materialize_str(&self, context: &Value, text: &str) -> String {
        self.render_leaf(context, text, "$")
    }

    /// Substitute every placeholder in `text`, failing on the first
    /// malformed expression.
    ///
    /// A `{{` with no closing `}}` is kept as literal text.
    pub fn render(&self, context: &Value, text: &str) -> Result<String, PlaceholderError> {
        if !text.contains(OPEN) {
            return Ok(text.to_string());
        }

        let mut result = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(OPEN) {
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                break;
            };

            result.push_str(&rest[..start]);
            let expression = &after_open[..end];
            let value = self
                .resolver
                .resolve(context, expression)
                .map_err(|error| PlaceholderError {
                    expression: expression.to_string(),
                    error,
                })?;
            result.push_str(&value);
            rest = &after_open[end + CLOSE.len()..];
        }

        result.push_str(rest);
        Ok(result)
    }

    fn materialize_field(&self, context: &Value, node: &Value, field: &str) -> Value {
        match node {
            Value::String(text) => Value::String(self.render_leaf(context, text, field)),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        self.materialize_field(context, item, &format!("{}[{}]", field, index))
                    })
                    .collect(),
            ),
            Value::Object(map) => {
                let mut rendered = Map::with_capacity(map.len());
                for (key, item) in map {
                    let field = format!("{}.{}", field, key);
                    rendered.insert(key.clone(), self.materialize_field(context, item, &field));
                }
                Value::Object(rendered)
            }
            // Numbers, booleans, null are passed through as-is
            _ => node.clone(),
        }
    }

    fn render_leaf(&self, context: &Value, text: &str, field: &str) -> String {
        self.render(context, text).unwrap_or_else(|err| {
            warn!(field, "{}; field left empty", err);
            String::new()
        })
    }
}
