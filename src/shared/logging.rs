use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::shared::config::AppConfig;

const FALLBACK_FILTER: &str = "info";

/// Install the global `tracing` subscriber.
///
/// Output goes to `config.log_file` (appended), never to stdout or stderr,
/// so the alternate screen and headless frames stay clean. Logging problems
/// never stop the app: an unopenable log file disables logging with a note
/// on stderr, and an invalid filter falls back to `info` with a warning in
/// the log.
pub fn init(config: &AppConfig) {
    let file = match open_log_file(&config.log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "foobar: logging disabled, cannot open {}: {e}",
                config.log_file.display()
            );
            return;
        }
    };

    let (filter, filter_error) = build_filter(&config.log_filter);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    if let Err(e) = installed {
        eprintln!("foobar: logging disabled, cannot install subscriber: {e}");
        return;
    }

    if let Some(e) = filter_error {
        tracing::warn!(
            filter = %config.log_filter,
            error = %e,
            "invalid log filter, using {FALLBACK_FILTER}"
        );
    }
    tracing::debug!(path = %config.log_file.display(), "logging initialised");
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Parse `directives`, falling back to `info` and handing back the parse
/// error so it can be reported once logging is up.
fn build_filter(directives: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_FILTER), Some(e)),
    }
}
