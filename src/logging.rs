use std::{fs::OpenOptions, sync::Mutex};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::get_path;

const LOG_FILE: &str = "pranahuti.log";

/// Logs go to `./pranahuti/pranahuti.log`. The terminal belongs to the UI,
/// so if the file can't be opened we run without logs.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let path = get_path(LOG_FILE);

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
        }
        Err(_) => tracing_subscriber::registry().with(env_filter).init(),
    }
}
