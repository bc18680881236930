//! Named notification templates.
//!
//! # Resolution Order
//!
//! 1. A template registered under the requested name
//! 2. The default template (`plain`), with a warning
//!
//! Lookups never fail: an unknown name falls back to the default.
//!
//! # File Format
//!
//! Templates loaded from a directory use the file stem as their name and may
//! be YAML or JSON:
//!
//! ```yaml
//! message: "New commits on **{{ github.context.payload.repository.name }}**"
//! embed:
//!   title: "{{ commit.title }}"
//!   description: "{{ commit.description }}"
//! extras:
//!   - title: "View All Changes"
//!     url: "{{ github.context.payload.compare }}"
//! ```

use super::builtin;
use crate::error::{HeraldError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the template used when none (or an unknown one) is requested.
pub const DEFAULT_TEMPLATE: &str = "plain";

/// A notification template: the message text, the per-commit embed, and
/// optional extra embeds rendered once per notification.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateModule {
    /// Template for the top-level `content` field.
    pub message: String,

    /// Template rendered once per selected commit.
    pub embed: Value,

    /// Templates appended after the commit embeds when extras are enabled.
    #[serde(default)]
    pub extras: Vec<Value>,
}

/// How a template lookup was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSource {
    /// The requested name was registered.
    Requested,
    /// The requested name was unknown; the default was used.
    Fallback,
}

/// Result of a template lookup.
#[derive(Debug, Clone, Copy)]
pub struct TemplateBinding<'a> {
    /// Name of the template actually used.
    pub name: &'a str,
    /// The template itself.
    pub module: &'a TemplateModule,
    /// How the lookup was resolved.
    pub source: BindingSource,
}

/// Registry of templates keyed by name, always holding a default entry.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateModule>,
    default: TemplateModule,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRegistry {
    /// Registry holding only the templates compiled into the binary.
    pub fn builtin() -> Self {
        let default = builtin::plain();
        let mut templates = BTreeMap::new();
        templates.insert(DEFAULT_TEMPLATE.to_string(), default.clone());
        templates.insert("detailed".to_string(), builtin::detailed());
        Self { templates, default }
    }

    /// Register `module` under `name`, replacing any existing entry.
    pub fn insert(&mut self, name: impl Into<String>, module: TemplateModule) {
        let name = name.into();
        if name == DEFAULT_TEMPLATE {
            self.default = module.clone();
        }
        self.templates.insert(name, module);
    }

    /// Look up a template by exact name.
    pub fn get(&self, name: &str) -> Option<&TemplateModule> {
        self.templates.get(name)
    }

    /// Registered template names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Resolve `name`, falling back to the default template.
    pub fn resolve<'a>(&'a self, name: &'a str) -> TemplateBinding<'a> {
        match self.get(name) {
            Some(module) => TemplateBinding {
                name,
                module,
                source: BindingSource::Requested,
            },
            None => {
                warn!(
                    requested = name,
                    "template '{}' is not registered; using '{}'", name, DEFAULT_TEMPLATE
                );
                TemplateBinding {
                    name: DEFAULT_TEMPLATE,
                    module: &self.default,
                    source: BindingSource::Fallback,
                }
            }
        }
    }

    /// Register every `*.yaml`, `*.yml` and `*.json` file in `dir`.
    ///
    /// Files with other extensions are ignored. Returns the number of
    /// templates loaded.
    pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| {
            HeraldError::UserError(format!(
                "failed to read templates directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let Some(format) = TemplateFormat::from_path(&path) else {
                continue;
            };
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let module = load_template_file(&path, format)?;
            debug!(template = name, path = %path.display(), "registered template");
            self.insert(name, module);
            loaded += 1;
        }

        Ok(loaded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateFormat {
    Yaml,
    Json,
}

impl TemplateFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

fn load_template_file(path: &Path, format: TemplateFormat) -> Result<TemplateModule> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        HeraldError::UserError(format!(
            "failed to read template file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let parsed = match format {
        TemplateFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        TemplateFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|e| {
        HeraldError::UserError(format!(
            "failed to parse template file '{}': {}\n\
             Fix: a template needs a 'message' string and an 'embed' object.",
            path.display(),
            e
        ))
    })
}
