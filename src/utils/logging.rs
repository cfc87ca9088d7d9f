//! Logging setup.
//!
//! Library code logs through the `log` facade. The binary installs a
//! `tracing-subscriber` formatter, which also captures `log` records.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `invoice_desk=debug`.
pub const LOG_ENV: &str = "INVOICE_DESK_LOG";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogDestination<'a> {
    /// Plain CLI usage
    Stderr,
    /// Dashboard mode: the terminal is owned by the UI
    File(&'a Path),
}

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool, destination: LogDestination<'_>) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let result = match destination {
        LogDestination::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogDestination::File(path) => {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .try_init(),
                // No log file means no logs; the dashboard must not write to the terminal.
                Err(_) => Ok(()),
            }
        }
    };

    if let Err(e) = result {
        log::debug!("logging already initialised: {}", e);
    }
}

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        println!("Verbose: {}", msg);
    }
}
