//! Tracing setup. Output goes to a file in the data directory because the
//! terminal UI owns stdout.

use crate::constants::LOG_FILE_NAME;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber writing to `<dir>/loadout.log`.
///
/// Failure is reported on stderr and otherwise ignored.
pub fn init(dir: &Path, filter: &str) {
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Warning: could not create log directory {:?}: {}", dir, e);
        return;
    }

    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log filter {:?}: {}", filter, e);
        EnvFilter::new(crate::constants::DEFAULT_LOG_FILTER)
    });

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(true)
        .with_level(true)
        .with_ansi(false);

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: logging already initialized: {}", e);
    }
}
