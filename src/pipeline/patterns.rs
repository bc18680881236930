//! Compiled commit-message pattern matching.

use crate::error::{HeraldError, Result};
use regex::Regex;

/// Compiled include/exclude patterns for one option.
///
/// Patterns use unanchored search semantics: a message matches if the
/// pattern is found anywhere in it.
pub struct PatternSet {
    /// The compiled regex patterns paired with their original text.
    patterns: Vec<(Regex, String)>,
}

impl std::fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternSet")
            .field(
                "patterns",
                &self.patterns.iter().map(|(_, s)| s).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PatternSet {
    /// Compile every pattern for `option`.
    ///
    /// # Returns
    ///
    /// * `Ok(PatternSet)` - Successfully compiled patterns
    /// * `Err(HeraldError::PatternError)` - A pattern failed to compile (exit code 1)
    pub fn compile(option: &str, sources: &[String]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(sources.len());

        for source in sources {
            let regex = Regex::new(source).map_err(|e| HeraldError::PatternError {
                option: option.to_string(),
                pattern: source.clone(),
                reason: e.to_string(),
            })?;
            patterns.push((regex, source.clone()));
        }

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The first pattern found in `message`, if any.
    pub fn first_match(&self, message: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(regex, _)| regex.is_match(message))
            .map(|(_, source)| source.as_str())
    }

    pub fn matches_any(&self, message: &str) -> bool {
        self.first_match(message).is_some()
    }
}
