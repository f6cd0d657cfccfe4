//! Entry point for the showcase viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Load the showcase catalog via `content`.
//! - Launch the GUI application with the loaded catalog and config.

mod app;
mod config;
mod content;
mod covers;
mod theme;

use crate::app::run_app;
use crate::config::load_config;
use crate::content::load_catalog;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONTENT_PATH: &str = "conf/content.toml";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let content_path = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        path = %content_path.display(),
        level = %config.log_level,
        section = %config.start_section,
        "Starting showcase viewer"
    );
    info!(
        threshold = config.swipe_threshold,
        touch_cooldown_ms = config.touch_cooldown_ms,
        wheel_cooldown_ms = config.wheel_cooldown_ms,
        compact_below = config.compact_threshold,
        "Active gesture configuration"
    );
    let catalog = load_catalog(&content_path)?;
    run_app(catalog, config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(arg) if arg == "-h" || arg == "--help" => {
            return Err(anyhow!("Usage: showcase-viewer [path-to-content.toml]"));
        }
        Some(arg) => PathBuf::from(arg),
        None => PathBuf::from(DEFAULT_CONTENT_PATH),
    };
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.as_path().display()));
    }
    Ok(path)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with logging.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
