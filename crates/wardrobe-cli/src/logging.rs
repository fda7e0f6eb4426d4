use crate::args::LogLevel;
use anyhow::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub enum LogTarget<'a> {
    Stderr,
    /// Appends to a file; used while the TUI owns the terminal
    File(&'a Path),
    /// Drops every event; the TUI under `--ephemeral`
    Discard,
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `--log-level`.
pub fn init(level: LogLevel, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,wardrobe={level},wardrobe_runtime={level},wardrobe_store={level}"
        ))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder
            .compact()
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    // A subscriber may already be installed when running inside tests
    if let Err(err) = installed {
        tracing::debug!(error = %err, "tracing subscriber already set");
    }

    Ok(())
}
