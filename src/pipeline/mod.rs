//! The commit pipeline.
//!
//! Turns the commits of a push into one [`Envelope`]:
//!
//! 1. **Selection**: last-commit-only, then include patterns, then exclude patterns
//! 2. **Fragments**: each selected commit is annotated and its embed materialized
//! 3. **Assembly**: commit embeds are capped to leave room for the extras,
//!    extras are appended, and falsy embeds are dropped

mod assemble;
mod commit;
mod filter;
mod patterns;


// Re-export public API
pub use assemble::{Envelope, MAX_EMBEDS, PayloadSpec, build_envelope, is_falsy};
pub use commit::{EMPTY_DESCRIPTION, annotate, message_of, split_message};
pub use filter::CommitFilter;
pub use patterns::PatternSet;
