//! Tracing subscriber setup.
//!
//! The binary runs without a console on Windows, so logs go to a daily file
//! under the per-user data directory unless configured otherwise.

use crate::config::{Config, DEFAULT_LOG_FILTER, LoggingConfig};

use std::fs;

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "systemup.log";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer when dropped and must be kept
/// until the process exits.
pub(crate) fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = env_filter(&config.filter);

    if config.log_to_file {
        let log_dir = Config::log_dir().and_then(|dir| {
            fs::create_dir_all(&dir)?;
            Ok(dir)
        });

        match log_dir {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let builder = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(false);

                if config.json {
                    builder.json().init();
                } else {
                    builder.init();
                }

                return Some(guard);
            }
            Err(e) => {
                init_stderr(filter, config.json);
                warn!(error = %e, "Log directory unavailable, logging to stderr");
                return None;
            }
        }
    }

    init_stderr(filter, config.json);
    None
}

/// Parse a filter directive, falling back to the default on syntax errors.
pub(crate) fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_stderr(filter: EnvFilter, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
