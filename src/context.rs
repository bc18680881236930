//! Render contexts for herald templates.
//!
//! The process environment is captured exactly once at start-up into an
//! [`Environment`]; everything downstream reads from that value instead of
//! the live process environment. A [`RenderContext`] combines it with the
//! push event into the JSON object placeholders are resolved against:
//!
//! ```text
//! {
//!   "env":    { "GITHUB_SHA": "...", ... },
//!   "github": { "context": { "payload": {...}, "eventName": "push", ... } },
//!   "commit": { ... }   // per-commit contexts only
//! }
//! ```

use serde_json::{Map, Value};
use std::collections::BTreeMap;

const DEFAULT_SERVER_URL: &str = "https://github.com";
const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// A snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Build an environment from explicit name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(name, value)| -> (String, String) { (name.into(), value.into()) })
            .collect()
    }

    /// Look up a variable; empty values count as unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// The `env` namespace: every captured variable as a string.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.vars
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect(),
        )
    }
}

impl FromIterator<(String, String)> for Environment {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

/// The shared (`env` + `github`) part of every render context.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    shared: Value,
}

impl RenderContext {
    pub fn new(env: &Environment, payload: &Value) -> Self {
        let mut shared = Map::new();
        shared.insert("env".to_string(), env.to_value());
        shared.insert("github".to_string(), github_namespace(env, payload));
        Self {
            shared: Value::Object(shared),
        }
    }

    /// Context without a `commit` namespace, used for the message and extras.
    pub fn shared(&self) -> &Value {
        &self.shared
    }

    /// Context for one annotated commit.
    pub fn for_commit(&self, commit: Value) -> Value {
        let mut context = self.shared.clone();
        if let Value::Object(map) = &mut context {
            map.insert("commit".to_string(), commit);
        }
        context
    }
}

fn github_namespace(env: &Environment, payload: &Value) -> Value {
    let mut context = Map::new();
    context.insert("payload".to_string(), payload.clone());

    let scalars = [
        ("eventName", "GITHUB_EVENT_NAME"),
        ("sha", "GITHUB_SHA"),
        ("ref", "GITHUB_REF"),
        ("workflow", "GITHUB_WORKFLOW"),
        ("actor", "GITHUB_ACTOR"),
        ("job", "GITHUB_JOB"),
        ("action", "GITHUB_ACTION"),
    ];
    for (key, var) in scalars {
        if let Some(value) = env.get(var) {
            context.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    let counters = [
        ("runId", "GITHUB_RUN_ID"),
        ("runNumber", "GITHUB_RUN_NUMBER"),
        ("runAttempt", "GITHUB_RUN_ATTEMPT"),
    ];
    for (key, var) in counters {
        if let Some(value) = env.get(var) {
            let value = value
                .parse::<u64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::String(value.to_string()));
            context.insert(key.to_string(), value);
        }
    }

    let endpoints = [
        ("serverUrl", "GITHUB_SERVER_URL", DEFAULT_SERVER_URL),
        ("apiUrl", "GITHUB_API_URL", DEFAULT_API_URL),
        ("graphqlUrl", "GITHUB_GRAPHQL_URL", DEFAULT_GRAPHQL_URL),
    ];
    for (key, var, default) in endpoints {
        let value = env.get(var).unwrap_or(default);
        context.insert(key.to_string(), Value::String(value.to_string()));
    }

    if let Some(repo) = repo_identity(env, payload) {
        context.insert("repo".to_string(), repo);
    }

    let mut github = Map::new();
    github.insert("context".to_string(), Value::Object(context));
    Value::Object(github)
}

/// `{ owner, repo }` from `GITHUB_REPOSITORY`, else from the payload's
/// `repository` object.
fn repo_identity(env: &Environment, payload: &Value) -> Option<Value> {
    let (owner, repo) = match env.get("GITHUB_REPOSITORY") {
        Some(full_name) => {
            let (owner, repo) = full_name.split_once('/')?;
            (owner.to_string(), repo.to_string())
        }
        None => {
            let repository = payload.get("repository")?;
            let owner = repository
                .pointer("/owner/login")
                .or_else(|| repository.pointer("/owner/name"))?
                .as_str()?;
            let repo = repository.get("name")?.as_str()?;
            (owner.to_string(), repo.to_string())
        }
    };

    let mut map = Map::new();
    map.insert("owner".to_string(), Value::String(owner));
    map.insert("repo".to_string(), Value::String(repo));
    Some(Value::Object(map))
}
