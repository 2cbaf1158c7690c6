//! File logging. The TUI owns stdout, so tracing output goes to a log file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

/// `<cache_dir>/termfolio/termfolio.log`, or `termfolio.log` in the cwd.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("termfolio"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("termfolio.log")
}

/// Install the global subscriber writing to `path`.
/// Level is controlled by `RUST_LOG`, default `info`.
pub fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| io::Error::other(format!("failed to initialize logging: {e}")))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
