//! Placeholder expression resolution.
//!
//! An expression is a path into the render context:
//!
//! - `commit.title` - key lookup through nested objects
//! - `commit.added[0]` - array index
//! - `env["INPUT_WEBHOOK"]` or `env['HOME']` - quoted key lookup
//!
//! Lookups that walk off the context (missing key, index out of bounds,
//! indexing into a scalar) resolve to an empty string. Only a malformed
//! expression is an error.

use serde_json::Value;
use std::fmt;

/// Capability for turning a placeholder expression into text.
///
/// The materializer only depends on this trait, so the expression language
/// can be replaced without touching the template walk or the pipeline.
pub trait Resolver {
    /// Resolve `expression` against `context`.
    fn resolve(&self, context: &Value, expression: &str) -> Result<String, ResolveError>;
}

/// Error type for malformed placeholder expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The placeholder contained nothing but whitespace.
    EmptyExpression,
    /// A `.` was not followed by a key (e.g. `commit..title`).
    EmptySegment {
        /// Byte offset of the missing segment within the expression.
        position: usize,
    },
    /// A `[` without a matching `]`, or an unterminated quoted key.
    UnclosedBracket {
        /// Byte offset of the opening `[`.
        position: usize,
    },
    /// An unquoted bracket segment that is not a non-negative integer.
    InvalidIndex {
        /// The offending bracket contents.
        index: String,
        /// Byte offset of the opening `[`.
        position: usize,
    },
    /// A character that cannot appear at this point of a path.
    UnexpectedCharacter {
        /// The unexpected character.
        found: char,
        /// Byte offset of the character.
        position: usize,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::EmptyExpression => write!(f, "empty placeholder expression"),
            ResolveError::EmptySegment { position } => {
                write!(f, "missing path segment at position {}", position)
            }
            ResolveError::UnclosedBracket { position } => {
                write!(f, "unclosed '[' at position {}", position)
            }
            ResolveError::InvalidIndex { index, position } => {
                write!(
                    f,
                    "invalid index '{}' at position {} (expected an integer or a quoted key)",
                    index, position
                )
            }
            ResolveError::UnexpectedCharacter { found, position } => {
                write!(f, "unexpected '{}' at position {}", found, position)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// One step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object key (`.name` or `["name"]`).
    Key(String),
    /// Array index (`[3]`).
    Index(usize),
}

/// Default resolver: plain dotted/bracketed path lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl Resolver for PathResolver {
    fn resolve(&self, context: &Value, expression: &str) -> Result<String, ResolveError> {
        let path = parse_path(expression)?;
        Ok(lookup(context, &path).map(render_value).unwrap_or_default())
    }
}

/// Parse an expression into path segments.
///
/// The first segment must be a bare key. Surrounding whitespace is ignored.
pub fn parse_path(expression: &str) -> Result<Vec<Segment>, ResolveError> {
    let expr = expression.trim();
    if expr.is_empty() {
        return Err(ResolveError::EmptyExpression);
    }

    let bytes = expr.as_bytes();
    let mut segments = Vec::new();

    let (first, mut pos) = read_key(expr, 0);
    if first.is_empty() {
        return Err(unexpected_or_empty(expr, 0));
    }
    segments.push(Segment::Key(first.to_string()));

    while pos < bytes.len() {
        match bytes[pos] {
            b'.' => {
                let (key, next) = read_key(expr, pos + 1);
                if key.is_empty() {
                    return Err(unexpected_or_empty(expr, pos + 1));
                }
                segments.push(Segment::Key(key.to_string()));
                pos = next;
            }
            b'[' => {
                let (segment, next) = read_bracket(expr, pos)?;
                segments.push(segment);
                pos = next;
            }
            _ => return Err(unexpected_or_empty(expr, pos)),
        }
    }

    Ok(segments)
}

/// Walk `path` through `context`.
///
/// Numeric keys index into arrays and integer indices look up stringified
/// keys on objects, so `commits.0` and `payload[0]` both behave sensibly.
pub fn lookup<'a>(context: &'a Value, path: &[Segment]) -> Option<&'a Value> {
    path.iter().try_fold(context, |current, segment| match (current, segment) {
        (Value::Object(map), Segment::Key(key)) => map.get(key),
        (Value::Object(map), Segment::Index(index)) => map.get(&index.to_string()),
        (Value::Array(items), Segment::Index(index)) => items.get(*index),
        (Value::Array(items), Segment::Key(key)) => {
            key.parse::<usize>().ok().and_then(|index| items.get(index))
        }
        _ => None,
    })
}

/// Render a looked-up value as placeholder text.
///
/// Strings are inserted verbatim, null becomes empty, and containers are
/// rendered as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn is_key_char(c: char) -> bool {
    !matches!(c, '.' | '[' | ']' | '"' | '\'') && !c.is_whitespace()
}

/// Read a bare key starting at `start`; returns the key and the offset after it.
fn read_key(expr: &str, start: usize) -> (&str, usize) {
    let rest = &expr[start..];
    let len = rest
        .char_indices()
        .find(|&(_, c)| !is_key_char(c))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    (&rest[..len], start + len)
}

/// Read a `[...]` segment whose `[` sits at `open`.
fn read_bracket(expr: &str, open: usize) -> Result<(Segment, usize), ResolveError> {
    let inner_start = open + 1;
    let rest = &expr[inner_start..];

    if let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') {
        let body = &rest[1..];
        let close_quote = body
            .find(quote)
            .ok_or(ResolveError::UnclosedBracket { position: open })?;
        let after_quote = inner_start + 1 + close_quote + 1;
        if expr.as_bytes().get(after_quote) != Some(&b']') {
            return Err(ResolveError::UnclosedBracket { position: open });
        }
        return Ok((
            Segment::Key(body[..close_quote].to_string()),
            after_quote + 1,
        ));
    }

    let close = rest
        .find(']')
        .ok_or(ResolveError::UnclosedBracket { position: open })?;
    let raw = rest[..close].trim();
    let index = raw
        .parse::<usize>()
        .map_err(|_| ResolveError::InvalidIndex {
            index: raw.to_string(),
            position: open,
        })?;
    Ok((Segment::Index(index), inner_start + close + 1))
}

fn unexpected_or_empty(expr: &str, position: usize) -> ResolveError {
    match expr[position..].chars().next() {
        None | Some('.') => ResolveError::EmptySegment { position },
        Some(found) => ResolveError::UnexpectedCharacter { found, position },
    }
}
