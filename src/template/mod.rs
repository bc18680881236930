//! Notification templates and the placeholder engine.
//!
//! - **Resolver**: evaluates one `{{ expression }}` against a render context
//! - **Materializer**: walks a JSON template and substitutes every placeholder
//! - **Registry**: named templates with a default fallback
//!
//! # Template Syntax
//!
//! Any string inside a template may contain placeholders:
//!
//! ```text
//! {{ commit.title }}
//! {{ github.context.payload.repository.full_name }}
//! {{ env.GITHUB_RUN_ID }}
//! ```
//!
//! Unknown paths render as empty strings. A malformed expression empties only
//! the string it appears in.

mod builtin;
mod materialize;
mod registry;
mod resolver;

// Re-export public API
pub use materialize::{Materializer, PlaceholderError};
pub use registry::{
    BindingSource, DEFAULT_TEMPLATE, TemplateBinding, TemplateModule, TemplateRegistry,
};
pub use resolver::{PathResolver, ResolveError, Resolver, Segment, lookup, parse_path, render_value};
