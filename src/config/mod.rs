//! Run options for herald.
//!
//! Options are layered, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. An optional YAML options file (`--config` / `HERALD_CONFIG`)
//! 3. Flags and `INPUT_*` environment variables
//!
//! Unknown YAML fields are ignored for forward compatibility.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{InputOverrides, Options};
pub use operations::parse_webhook;
