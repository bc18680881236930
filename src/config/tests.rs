//! Tests for options functionality.

use crate::config::{InputOverrides, Options, parse_webhook};
use crate::error::HeraldError;
use serde_json::json;
use tempfile::TempDir;

fn overrides() -> InputOverrides {
    InputOverrides::default()
}

#[test]
fn test_default_options() {
    let options = Options::default();

    assert_eq!(options.template, "plain");
    assert_eq!(options.message, None);
    assert_eq!(options.webhook, None);
    assert!(!options.last_commit_only);
    assert!(!options.include_extras);
    assert!(options.include_commits.is_empty());
    assert!(options.exclude_commits.is_empty());
    assert_eq!(options.embed, None);
}

#[test]
fn test_parse_empty_yaml() {
    let options = Options::from_yaml("").unwrap();
    assert_eq!(options, Options::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
template: detailed
last-commit-only: true
"#;
    let options = Options::from_yaml(yaml).unwrap();

    assert_eq!(options.template, "detailed");
    assert!(options.last_commit_only);

    // Unspecified values should use defaults
    assert!(!options.include_extras);
    assert!(options.include_commits.is_empty());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
template: plain
message: "Deployed {{ github.context.payload.after }}"
webhook: https://discord.com/api/webhooks/1/abc
last-commit-only: "no"
include-extras: "yes"
include-commits: |
  ^fix
  ^feat
exclude-commits:
  - WIP
  - "  "
embed:
  title: "{{ commit.title }}"
unknown-field: ignored
"#;
    let options = Options::from_yaml(yaml).unwrap();

    assert_eq!(options.template, "plain");
    assert_eq!(
        options.message.as_deref(),
        Some("Deployed {{ github.context.payload.after }}")
    );
    assert_eq!(
        options.webhook.as_deref(),
        Some("https://discord.com/api/webhooks/1/abc")
    );
    assert!(!options.last_commit_only);
    assert!(options.include_extras);
    assert_eq!(options.include_commits, vec!["^fix", "^feat"]);
    assert_eq!(options.exclude_commits, vec!["WIP"]);
    assert_eq!(
        options.embed_template().unwrap(),
        Some(json!({ "title": "{{ commit.title }}" }))
    );
}

#[test]
fn test_embed_false_in_yaml_means_template_default() {
    let options = Options::from_yaml("embed: false").unwrap();
    assert_eq!(options.embed, None);

    let options = Options::from_yaml("embed: \"0\"").unwrap();
    assert_eq!(options.embed, None);
}

#[test]
fn test_invalid_embed_json_is_rejected() {
    let result = Options::from_yaml("embed: \"{not json\"");
    assert!(matches!(result, Err(HeraldError::UserError(_))));
    assert!(result.unwrap_err().to_string().contains("embed is not valid JSON"));
}

#[test]
fn test_empty_template_is_rejected() {
    let result = Options::from_yaml("template: \"  \"");
    assert!(result.is_err());
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let result = Options::from_yaml("include-commits: [unterminated");
    assert!(matches!(result, Err(HeraldError::UserError(_))));
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("herald.yaml");
    std::fs::write(&path, "include-extras: true\nexclude-commits: WIP\n").unwrap();

    let options = Options::load(&path).unwrap();
    assert!(options.include_extras);
    assert_eq!(options.exclude_commits, vec!["WIP"]);
}

#[test]
fn test_load_missing_file() {
    let result = Options::load("/nonexistent/herald.yaml");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to read options file"));
}

#[test]
fn test_apply_overrides() {
    let mut options = Options::default();
    options.apply(&InputOverrides {
        template: Some(" detailed ".to_string()),
        message: Some("hello".to_string()),
        webhook: Some("https://example.com/hook".to_string()),
        last_commit_only: Some("TRUE".to_string()),
        include_extras: Some("1".to_string()),
        include_commits: Some("^fix\n^feat\n".to_string()),
        exclude_commits: Some("WIP".to_string()),
        embed: Some("{\"title\": \"x\"}".to_string()),
    });

    assert_eq!(options.template, "detailed");
    assert_eq!(options.message.as_deref(), Some("hello"));
    assert_eq!(options.webhook.as_deref(), Some("https://example.com/hook"));
    assert!(options.last_commit_only);
    assert!(options.include_extras);
    assert_eq!(options.include_commits, vec!["^fix", "^feat"]);
    assert_eq!(options.exclude_commits, vec!["WIP"]);
    assert_eq!(options.embed.as_deref(), Some("{\"title\": \"x\"}"));
}

#[test]
fn test_blank_overrides_keep_file_values() {
    let mut options = Options::from_yaml("include-extras: true\ninclude-commits: ^fix").unwrap();
    options.apply(&InputOverrides {
        include_extras: Some(String::new()),
        include_commits: Some("  ".to_string()),
        ..overrides()
    });

    assert!(options.include_extras);
    assert_eq!(options.include_commits, vec!["^fix"]);
}

#[test]
fn test_falsy_embed_override_clears_file_embed() {
    let mut options = Options::from_yaml("embed: '{\"title\": \"x\"}'").unwrap();
    options.apply(&InputOverrides {
        embed: Some("false".to_string()),
        ..overrides()
    });
    assert_eq!(options.embed, None);
}

#[test]
fn test_explicit_false_flag_override() {
    let mut options = Options::from_yaml("last-commit-only: true").unwrap();
    options.apply(&InputOverrides {
        last_commit_only: Some("false".to_string()),
        ..overrides()
    });
    assert!(!options.last_commit_only);
}

#[test]
fn test_webhook_url_required() {
    let err = Options::default().webhook_url().unwrap_err();
    assert!(err.to_string().contains("no webhook configured"));
}

#[test]
fn test_webhook_url_accepts_https() {
    let url = parse_webhook(" https://discord.com/api/webhooks/1/token ").unwrap();
    assert_eq!(url.host_str(), Some("discord.com"));
}

#[test]
fn test_webhook_url_rejects_other_schemes() {
    let err = parse_webhook("ftp://example.com/hook").unwrap_err();
    assert!(err.to_string().contains("http or https"));

    let err = parse_webhook("not a url").unwrap_err();
    assert!(err.to_string().contains("not a valid URL"));
}

#[test]
fn test_numeric_flags_in_yaml() {
    let options = Options::from_yaml("last-commit-only: 0\ninclude-extras: 1\n").unwrap();
    assert!(!options.last_commit_only);
    assert!(options.include_extras);

    let options = Options::from_yaml("last-commit-only: 1\n").unwrap();
    assert!(options.last_commit_only);
}

#[test]
fn test_blank_yaml_values_use_defaults() {
    let yaml = "last-commit-only:\ninclude-extras: ~\ninclude-commits:\nexclude-commits: null\n";
    let options = Options::from_yaml(yaml).unwrap();

    assert!(!options.last_commit_only);
    assert!(!options.include_extras);
    assert!(options.include_commits.is_empty());
    assert!(options.exclude_commits.is_empty());
}

#[test]
fn test_scalar_pattern_items_become_text() {
    let yaml = "exclude-commits:\n  - 123\n  - true\n  - ~\n  - WIP\ninclude-commits: 42\n";
    let options = Options::from_yaml(yaml).unwrap();

    assert_eq!(options.exclude_commits, vec!["123", "true", "WIP"]);
    assert_eq!(options.include_commits, vec!["42"]);
}

#[test]
fn test_structured_flag_is_rejected() {
    let result = Options::from_yaml("include-extras:\n  nested: true\n");
    assert!(matches!(result, Err(HeraldError::UserError(_))));
}
