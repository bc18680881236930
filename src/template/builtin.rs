//! Templates compiled into the binary.

use super::registry::TemplateModule;
use serde_json::json;

/// Title, description and author name per commit, plus a link to the full
/// comparison.
pub fn plain() -> TemplateModule {
    TemplateModule {
        message: "Successful commit to **{{ github.context.payload.repository.owner.name }}/{{ github.context.payload.repository.name }}**".to_string(),
        embed: json!({
            "title": "{{ commit.title }}",
            "description": "{{ commit.description }}",
            "author": {
                "name": "{{ commit.author.name }}"
            }
        }),
        extras: vec![json!({
            "title": "View All Changes",
            "url": "{{ github.context.payload.compare }}"
        })],
    }
}

/// Links each embed to its commit and shows the hash and commit time.
pub fn detailed() -> TemplateModule {
    TemplateModule {
        message: "**{{ github.context.payload.pusher.name }}** pushed to `{{ github.context.payload.ref }}` in **{{ github.context.payload.repository.full_name }}**".to_string(),
        embed: json!({
            "title": "{{ commit.title }}",
            "url": "{{ commit.url }}",
            "description": "{{ commit.description }}",
            "color": 5814783,
            "author": {
                "name": "{{ commit.author.name }}"
            },
            "footer": {
                "text": "{{ commit.short_id }}"
            },
            "timestamp": "{{ commit.timestamp }}"
        }),
        extras: vec![json!({
            "title": "Compare {{ github.context.payload.before }}...{{ github.context.payload.after }}",
            "url": "{{ github.context.payload.compare }}"
        })],
    }
}
