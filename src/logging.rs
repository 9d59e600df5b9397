use std::io;

use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use crate::error::{DemoError, DemoResult};

/// Install the global subscriber: human-readable lines on stderr.
///
/// An explicit `level` wins over `RUST_LOG`; with neither, only warnings
/// and errors are shown.
pub fn init(level: Option<Level>) -> DemoResult<()> {
    let filter = match level {
        Some(level) => EnvFilter::default().add_directive(LevelFilter::from_level(level).into()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::WARN.into())),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .try_init()
        .map_err(|e| DemoError::Logging(e.to_string()))
}
