//! Commit annotation.
//!
//! A raw commit record gains a `title` (the first paragraph of its message),
//! a `description` (the remaining paragraphs) and a `short_id` (the
//! abbreviated hash, when the record has a string `id`). The raw record is never
//! modified; fields it already carries take precedence over derived ones.

use serde_json::{Map, Value};

/// Description used when a message has a single paragraph (U+200B, zero-width
/// space). Embed descriptions must not be empty.
pub const EMPTY_DESCRIPTION: &str = "\u{200B}";

const PARAGRAPH_BREAK: &str = "\n\n";

/// Length of the abbreviated commit hash.
const SHORT_ID_LEN: usize = 7;

/// Split a commit message into `(title, description)`.
pub fn split_message(message: &str) -> (String, String) {
    match message.split_once(PARAGRAPH_BREAK) {
        Some((title, rest)) => (title.to_string(), rest.to_string()),
        None => (message.to_string(), EMPTY_DESCRIPTION.to_string()),
    }
}

/// The commit's message, or `""` when it has no string message.
pub fn message_of(commit: &Value) -> &str {
    commit.get("message").and_then(Value::as_str).unwrap_or("")
}

/// Build the annotated commit for `commit`.
pub fn annotate(commit: &Value) -> Value {
    let (title, description) = split_message(message_of(commit));

    let mut annotated = Map::new();
    annotated.insert("title".to_string(), Value::String(title));
    annotated.insert("description".to_string(), Value::String(description));
    if let Some(id) = commit.get("id").and_then(Value::as_str) {
        let short_id: String = id.chars().take(SHORT_ID_LEN).collect();
        annotated.insert("short_id".to_string(), Value::String(short_id));
    }

    if let Value::Object(fields) = commit {
        for (key, value) in fields {
            annotated.insert(key.clone(), value.clone());
        }
    }

    Value::Object(annotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_message_paragraphs() {
        let (title, description) = split_message("Fix bug\n\nThis resolves issue #3");
        assert_eq!(title, "Fix bug");
        assert_eq!(description, "This resolves issue #3");
    }

    #[test]
    fn test_split_message_rejoins_remaining_paragraphs() {
        let (title, description) = split_message("Title\n\nFirst\n\nSecond");
        assert_eq!(title, "Title");
        assert_eq!(description, "First\n\nSecond");
    }

    #[test]
    fn test_split_message_single_paragraph_uses_sentinel() {
        let (title, description) = split_message("Title\nwrapped line");
        assert_eq!(title, "Title\nwrapped line");
        assert_eq!(description, EMPTY_DESCRIPTION);
    }

    #[test]
    fn test_split_message_empty_trailing_paragraph() {
        let (title, description) = split_message("Title\n\n");
        assert_eq!(title, "Title");
        assert_eq!(description, "");
    }

    #[test]
    fn test_annotate_preserves_original_fields() {
        let commit = json!({
            "id": "abc123",
            "message": "Fix bug\n\nDetails",
            "author": { "name": "Mona" }
        });
        let annotated = annotate(&commit);

        assert_eq!(annotated["title"], "Fix bug");
        assert_eq!(annotated["description"], "Details");
        assert_eq!(annotated["id"], "abc123");
        assert_eq!(annotated["author"]["name"], "Mona");
        assert_eq!(annotated["message"], "Fix bug\n\nDetails");
        // Raw record is untouched
        assert!(commit.get("title").is_none());
    }

    #[test]
    fn test_annotate_original_title_wins() {
        let commit = json!({ "message": "Derived\n\nBody", "title": "Original" });
        let annotated = annotate(&commit);
        assert_eq!(annotated["title"], "Original");
        assert_eq!(annotated["description"], "Body");
    }

    #[test]
    fn test_annotate_short_id() {
        let annotated = annotate(&json!({ "id": "0123456789abcdef", "message": "m" }));
        assert_eq!(annotated["short_id"], "0123456");

        let annotated = annotate(&json!({ "id": "abc", "message": "m" }));
        assert_eq!(annotated["short_id"], "abc");

        let annotated = annotate(&json!({ "id": "0123456789", "short_id": "keep" }));
        assert_eq!(annotated["short_id"], "keep");
    }

    #[test]
    fn test_annotate_without_message() {
        let annotated = annotate(&json!({ "id": "abc" }));
        assert_eq!(annotated["title"], "");
        assert_eq!(annotated["short_id"], "abc");
        assert_eq!(annotated["description"], EMPTY_DESCRIPTION);
    }
}
