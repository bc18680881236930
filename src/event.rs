//! Push event input.
//!
//! The event is the JSON document a CI runner writes to `GITHUB_EVENT_PATH`.
//! Only `commits` is interpreted; the rest is exposed to templates verbatim
//! under `github.context.payload`.

use crate::error::{HeraldError, Result};
use serde_json::Value;
use std::path::Path;

/// A loaded push event.
#[derive(Debug, Clone, PartialEq)]
pub struct PushEvent {
    payload: Value,
}

impl PushEvent {
    /// Load a push event from a JSON file.
    ///
    /// # Returns
    ///
    /// * `Ok(PushEvent)` - The parsed event
    /// * `Err(HeraldError::EventError)` - The file is unreadable or malformed (exit code 2)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HeraldError::EventError(format!(
                "failed to read event file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content).map_err(|e| match e {
            HeraldError::EventError(msg) => {
                HeraldError::EventError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Parse a push event from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let payload: Value = serde_json::from_str(json)
            .map_err(|e| HeraldError::EventError(format!("event is not valid JSON: {}", e)))?;
        Self::from_value(payload)
    }

    /// Wrap an already-parsed event.
    ///
    /// The event must be a JSON object. A missing or null `commits` field
    /// means no commits; any other non-array value is rejected.
    pub fn from_value(payload: Value) -> Result<Self> {
        let Value::Object(map) = &payload else {
            return Err(HeraldError::EventError(
                "event must be a JSON object".to_string(),
            ));
        };

        match map.get("commits") {
            None | Some(Value::Null) | Some(Value::Array(_)) => Ok(Self { payload }),
            Some(_) => Err(HeraldError::EventError(
                "event field 'commits' must be an array".to_string(),
            )),
        }
    }

    /// The full event document.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Commit records in push order.
    pub fn commits(&self) -> &[Value] {
        self.payload
            .get("commits")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_event;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_commits_in_order() {
        let event = PushEvent::from_value(json!({
            "commits": [{ "message": "one" }, { "message": "two" }]
        }))
        .unwrap();

        let messages: Vec<_> = event
            .commits()
            .iter()
            .map(|c| c["message"].as_str().unwrap())
            .collect();
        assert_eq!(messages, vec!["one", "two"]);
    }

    #[test]
    fn test_missing_commits_is_empty() {
        let event = PushEvent::from_value(json!({ "ref": "refs/heads/main" })).unwrap();
        assert!(event.commits().is_empty());

        let event = PushEvent::from_value(json!({ "commits": null })).unwrap();
        assert!(event.commits().is_empty());
    }

    #[test]
    fn test_non_array_commits_rejected() {
        let err = PushEvent::from_value(json!({ "commits": "nope" })).unwrap_err();
        assert!(matches!(err, HeraldError::EventError(_)));
    }

    #[test]
    fn test_non_object_event_rejected() {
        let err = PushEvent::from_json("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_event(dir.path(), &json!({ "commits": [{ "message": "hi" }] }));

        let event = PushEvent::load(&path).unwrap();
        assert_eq!(event.commits().len(), 1);
        assert_eq!(event.payload()["commits"][0]["message"], "hi");
    }

    #[test]
    fn test_load_invalid_json_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("event.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = PushEvent::load(&path).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::EVENT_FAILURE);
        assert!(err.to_string().contains("event.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PushEvent::load("/nonexistent/event.json").unwrap_err();
        assert!(matches!(err, HeraldError::EventError(_)));
    }
}
