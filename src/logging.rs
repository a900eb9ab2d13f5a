//! File logging, opt-in through `TUI_DEMOS_LOG`.
//!
//! The terminal belongs to the renderer while a demo runs, so log records go
//! to a file instead.

use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "TUI_DEMOS_LOG";

/// Log file path from an environment value; empty means disabled.
pub fn log_path(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Install the file logger if `TUI_DEMOS_LOG` is set. Returns whether it was.
pub fn init_from_env() -> Result<bool> {
    let Some(path) = log_path(std::env::var_os(LOG_ENV)) else {
        return Ok(false);
    };

    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(LevelFilter::Debug, config, file)
        .context("failed to install logger")?;

    log::info!("logging to {}", path.display());
    Ok(true)
}
