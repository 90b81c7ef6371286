use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

/// Where log records end up
#[derive(Debug)]
pub enum LogDestination {
    Stderr,
    File(PathBuf, File),
}

/// Resolve `LOG_LOCATION` into a destination. An empty location means stderr,
/// and a location that cannot be opened falls back to stderr with a warning so
/// that logging never blocks the report.
pub fn destination(log_location: Option<&str>) -> LogDestination {
    let Some(log_location) = log_location.map(str::trim).filter(|l| !l.is_empty()) else {
        return LogDestination::Stderr;
    };

    let path = PathBuf::from(&*shellexpand::tilde(log_location));
    match open_append(&path) {
        Ok(file) => LogDestination::File(path, file),
        Err(e) => {
            eprintln!("warning: logging to stderr, {e:#}");
            LogDestination::Stderr
        }
    }
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("could not open {}", path.display()))
}

/// Set up `env_logger`. Logs are appended to `LOG_LOCATION` when it is usable
/// and go to stderr otherwise, so stdout only ever carries the report.
pub fn init() {
    let mut builder = Builder::from_default_env();

    match destination(std::env::var("LOG_LOCATION").ok().as_deref()) {
        LogDestination::File(_, file) => builder.target(Target::Pipe(Box::new(file))),
        LogDestination::Stderr => builder.target(Target::Stderr),
    };

    builder.init();
}
