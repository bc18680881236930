//! Building the notification shared by `send` and `render`.

use crate::cli::PayloadArgs;
use crate::config::{InputOverrides, Options};
use crate::context::{Environment, RenderContext};
use crate::error::{HeraldError, Result};
use crate::event::PushEvent;
use crate::pipeline::{CommitFilter, Envelope, PayloadSpec, build_envelope};
use crate::template::{BindingSource, Materializer, PathResolver, TemplateRegistry};
use std::path::Path;
use tracing::{debug, info};

/// Resolve the run options: defaults, then the options file, then overrides.
pub(crate) fn load_options(args: &PayloadArgs, overrides: &InputOverrides) -> Result<Options> {
    let mut options = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading options file");
            Options::load(path)?
        }
        None => Options::default(),
    };

    options.apply(overrides);
    options.validate()?;
    Ok(options)
}

/// Built-in templates plus any found in `templates_dir`.
pub(crate) fn load_registry(templates_dir: Option<&Path>) -> Result<TemplateRegistry> {
    let mut registry = TemplateRegistry::builtin();
    if let Some(dir) = templates_dir {
        let loaded = registry.load_dir(dir)?;
        debug!(dir = %dir.display(), loaded, "loaded templates");
    }
    Ok(registry)
}

/// Load the push event named by `--event-path` / `GITHUB_EVENT_PATH`.
pub(crate) fn load_event(args: &PayloadArgs) -> Result<PushEvent> {
    let path = args.event_path.as_deref().ok_or_else(|| {
        HeraldError::EventError(
            "no push event given.\n\
             Fix: pass --event-path <file> or set GITHUB_EVENT_PATH."
                .to_string(),
        )
    })?;

    PushEvent::load(path)
}

/// Render the notification for this run.
pub(crate) fn build_payload(
    args: &PayloadArgs,
    options: &Options,
    env: &Environment,
) -> Result<Envelope> {
    let registry = load_registry(args.templates_dir.as_deref())?;
    let binding = registry.resolve(&options.template);
    if binding.source == BindingSource::Requested {
        debug!(template = binding.name, "using template");
    }

    let spec = PayloadSpec::from_template(binding.module, options)?;
    let filter = CommitFilter::from_options(options)?;
    let event = load_event(args)?;
    let context = RenderContext::new(env, event.payload());

    let envelope = build_envelope(
        &Materializer::new(PathResolver),
        &spec,
        &filter,
        &context,
        event.commits(),
    );

    info!(
        template = binding.name,
        commits = event.commits().len(),
        embeds = envelope.embeds.len(),
        "notification rendered"
    );
    Ok(envelope)
}
