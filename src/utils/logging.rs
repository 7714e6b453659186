use crate::error::{DashboardError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug`
/// when `verbose` is on. With a log file, output goes there without ANSI
/// colors instead of stderr.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| DashboardError::Logging(e.to_string()))
}
