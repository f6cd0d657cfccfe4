use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Parse a TOML document into a clamped `AppConfig`.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Invalid config TOML")?;
    let mut config = AppConfig::from(tables);
    clamp_config(&mut config);
    Ok(config)
}

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "{err:#}");
            AppConfig::default()
        }
    }
}

fn clamp_config(config: &mut AppConfig) {
    let defaults = AppConfig::default();
    if !config.window_width.is_finite() || config.window_width < 200.0 {
        config.window_width = defaults.window_width;
    }
    if !config.window_height.is_finite() || config.window_height < 200.0 {
        config.window_height = defaults.window_height;
    }
    if !config.compact_threshold.is_finite() || config.compact_threshold <= 0.0 {
        config.compact_threshold = defaults.compact_threshold;
    }
    if !config.swipe_threshold.is_finite() || config.swipe_threshold < 0.0 {
        config.swipe_threshold = defaults.swipe_threshold;
    }
    if !config.wheel_line_delta.is_finite() || config.wheel_line_delta <= 0.0 {
        config.wheel_line_delta = defaults.wheel_line_delta;
    }
    config.resize_debounce_ms = config.resize_debounce_ms.min(2_000);
    config.touch_cooldown_ms = config.touch_cooldown_ms.clamp(50, 5_000);
    config.wheel_cooldown_ms = config.wheel_cooldown_ms.clamp(50, 5_000);
    config.short_form_wide_chunk = config.short_form_wide_chunk.clamp(1, 6);
}
