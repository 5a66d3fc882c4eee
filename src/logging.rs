//! Tracing subscriber setup.
//!
//! The interactive UI draws on stdout, so it only logs when a file is
//! configured. Headless commands log to stderr. `RUST_LOG` takes
//! precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink<'a> {
    /// Drop everything.
    Off,
    /// Human-readable lines on stderr.
    Stderr,
    /// Append to a file, creating parent directories as needed.
    File(&'a Path),
}

/// Build the filter from `RUST_LOG`, falling back to `level`.
pub fn filter(level: &str) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env.as_deref(), level)
}

/// First parseable of `env` and `level`, else plain `info`.
pub fn filter_from(env: Option<&str>, level: &str) -> EnvFilter {
    env.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber.
pub fn init(sink: Sink<'_>, level: &str) -> Result<()> {
    let result = match sink {
        Sink::Off => return Ok(()),
        Sink::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter(level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        Sink::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter(level))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    result.map_err(|e| Error::Logging(e.to_string()))
}
