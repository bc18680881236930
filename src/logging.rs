//! Diagnostic logging.
//!
//! Logs go to stderr so stdout stays clean for `herald render` output. The
//! filter comes from `HERALD_LOG` (any `EnvFilter` directive, e.g.
//! `herald=debug`), else `debug` with `--verbose`, else `warn`.

use crate::context::Environment;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "HERALD_LOG";

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// The filter directive for this run.
pub fn filter_directive(env: &Environment, verbose: bool) -> String {
    match env.get(LOG_ENV) {
        Some(directive) => directive.to_string(),
        None if verbose => VERBOSE_LEVEL.to_string(),
        None => DEFAULT_LEVEL.to_string(),
    }
}

/// Install the global subscriber.
///
/// An unparsable `HERALD_LOG` falls back to the default level. Calling this
/// more than once is harmless; only the first call installs a subscriber.
pub fn init(env: &Environment, verbose: bool) {
    let directive = filter_directive(env, verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
