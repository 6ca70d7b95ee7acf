//! File-backed tracing setup for the terminal session.
//!
//! The subscriber writes to a file under the cache directory because the
//! alternate screen owns stdout and stderr while the UI is running. Verbosity
//! is controlled through the `APPLIST_LOG` environment variable using the
//! usual `tracing` filter syntax.

use std::fs::{self, File};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_ENV: &str = "APPLIST_LOG";
const LOG_FILE: &str = "applist.log";

/// Install the global subscriber once per process.
///
/// Failures are swallowed: logging must never take down the UI it supports.
pub fn initialize() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(try_initialize);
}

fn try_initialize() {
    let Ok(dir) = app_dirs::get_cache_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join(LOG_FILE)) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
