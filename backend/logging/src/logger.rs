//! Structured Logger
//!
//! Wraps `tracing` with a stderr console layer and an optional daily-rolling
//! NDJSON file. Stdout is left alone for command output.

use std::io::IsTerminal;
use std::path::Path;
use tracing::warn;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name prefix of the rolling log: `tix.YYYY-MM-DD.log`.
const LOG_FILE_PREFIX: &str = "tix";

/// Initialize the global logger. `RUST_LOG` takes precedence over `level`.
/// When `log_dir` is set, events are also appended as JSON lines to a file
/// rotated daily inside it.
pub fn init_logger(level: &str, log_dir: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal());

    let mut file_error = None;
    let file_layer = log_dir.and_then(|dir| match rolling_appender(dir) {
        Ok(appender) => Some(fmt::layer().json().with_writer(appender).with_ansi(false)),
        Err(e) => {
            file_error = Some(e);
            None
        }
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if let Some(e) = file_error {
        warn!(error = %e, "File logging disabled");
    }
}

fn rolling_appender(
    dir: &Path,
) -> Result<RollingFileAppender, tracing_appender::rolling::InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(dir)
}
