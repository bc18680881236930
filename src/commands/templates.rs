//! Implementation of the `herald templates` command.

use super::payload::load_registry;
use crate::cli::TemplatesArgs;
use crate::error::Result;
use crate::template::{DEFAULT_TEMPLATE, TemplateRegistry};

/// Execute the `herald templates` command.
pub fn cmd_templates(args: &TemplatesArgs) -> Result<()> {
    let registry = load_registry(args.templates_dir.as_deref())?;
    for line in listing(&registry) {
        println!("{}", line);
    }
    Ok(())
}

fn listing(registry: &TemplateRegistry) -> Vec<String> {
    registry
        .names()
        .map(|name| {
            if name == DEFAULT_TEMPLATE {
                format!("{} (default)", name)
            } else {
                name.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_listing() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(listing(&registry), vec!["detailed", "plain (default)"]);
    }

    #[test]
    fn test_listing_includes_directory_templates() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("compact.yaml"),
            "message: hi\nembed:\n  title: \"{{ commit.title }}\"\n",
        )
        .unwrap();

        let registry = load_registry(Some(dir.path())).unwrap();
        assert_eq!(
            listing(&registry),
            vec!["compact", "detailed", "plain (default)"]
        );
    }

    #[test]
    fn test_missing_directory_is_user_error() {
        let args = TemplatesArgs {
            templates_dir: Some("/nonexistent/templates".into()),
        };
        let err = cmd_templates(&args).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    }
}
