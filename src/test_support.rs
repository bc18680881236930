use serde_json::{Value, json};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A commit record shaped like the ones in a GitHub push event.
pub(crate) fn commit(message: &str) -> Value {
    json!({
        "id": "0123456789abcdef0123456789abcdef01234567",
        "message": message,
        "timestamp": "2024-01-02T03:04:05Z",
        "url": "https://github.com/octo-org/widgets/commit/0123456",
        "author": { "name": "Mona Lisa", "email": "mona@example.com" }
    })
}

/// A push event to `octo-org/widgets` with one commit per message.
pub(crate) fn push_event(messages: &[&str]) -> Value {
    json!({
        "ref": "refs/heads/main",
        "before": "a",
        "after": "b",
        "compare": "https://github.com/octo-org/widgets/compare/a...b",
        "pusher": { "name": "mona" },
        "repository": {
            "name": "widgets",
            "full_name": "octo-org/widgets",
            "owner": { "name": "octo-org", "login": "octo-org" }
        },
        "commits": messages.iter().map(|m| commit(m)).collect::<Vec<_>>()
    })
}

/// Write `event` as `event.json` in `dir` and return its path.
pub(crate) fn write_event(dir: &Path, event: &Value) -> PathBuf {
    let path = dir.join("event.json");
    std::fs::write(&path, serde_json::to_vec_pretty(event).unwrap()).unwrap();
    path
}

/// Log output collected in memory.
#[derive(Clone, Default)]
pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with warnings and errors captured as plain text.
pub(crate) fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
