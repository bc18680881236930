//! Commit selection.

use super::commit::message_of;
use super::patterns::PatternSet;
use crate::config::Options;
use crate::error::Result;
use serde_json::Value;
use tracing::debug;

/// Decides which commits of a push get an embed.
#[derive(Debug)]
pub struct CommitFilter {
    last_only: bool,
    include: PatternSet,
    exclude: PatternSet,
}

impl CommitFilter {
    pub fn new(last_only: bool, include: PatternSet, exclude: PatternSet) -> Self {
        Self {
            last_only,
            include,
            exclude,
        }
    }

    /// Compile the filter described by `options`.
    ///
    /// # Returns
    ///
    /// * `Err(HeraldError::PatternError)` - An include or exclude pattern is invalid
    pub fn from_options(options: &Options) -> Result<Self> {
        Ok(Self::new(
            options.last_commit_only,
            PatternSet::compile("include-commits", &options.include_commits)?,
            PatternSet::compile("exclude-commits", &options.exclude_commits)?,
        ))
    }

    /// Commits that pass, in their original relative order.
    pub fn select<'a>(&self, commits: &'a [Value]) -> Vec<&'a Value> {
        let candidates = if self.last_only {
            commits.last().map(std::slice::from_ref).unwrap_or_default()
        } else {
            commits
        };

        candidates
            .iter()
            .filter(|commit| self.accepts(message_of(commit)))
            .collect()
    }

    fn accepts(&self, message: &str) -> bool {
        if !self.include.is_empty() && !self.include.matches_any(message) {
            debug!(message, "commit skipped: no include pattern matched");
            return false;
        }
        if let Some(pattern) = self.exclude.first_match(message) {
            debug!(message, pattern, "commit skipped: exclude pattern matched");
            return false;
        }
        true
    }
}
