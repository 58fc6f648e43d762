//! Logging setup
//!
//! The TUI owns the terminal, so logs only ever go to a file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file
pub const LOG_ENV: &str = "HANGMAN_LOG";

/// Install a file subscriber when `HANGMAN_LOG` is set
///
/// Level filtering follows `RUST_LOG`, defaulting to `info`. Does nothing when the variable is
/// unset or empty, or when the file cannot be created.
pub fn init_tracing() {
    let Some(path) = log_path(std::env::var_os(LOG_ENV)) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(subscriber) = file_subscriber(&path, filter) {
        // Keep any subscriber that is already installed
        let _ = subscriber.try_init();
    }
}

fn log_path(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Subscriber writing plain-text events to `path`, truncating it
fn file_subscriber(
    path: &Path,
    filter: EnvFilter,
) -> Option<impl Subscriber + Send + Sync + 'static> {
    let file = match std::fs::File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: failed to create log file {}: {e}", path.display());
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    Some(tracing_subscriber::registry().with(filter).with(file_layer))
}
