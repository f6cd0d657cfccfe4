use super::defaults;
use super::models::{AppConfig, LogLevel, SectionKind, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `config.toml`; every table and field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    viewport: ViewportConfig,
    #[serde(default)]
    gestures: GesturesConfig,
    #[serde(default)]
    carousel: CarouselConfig,
    #[serde(default)]
    keys: KeysConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.window.width,
            window_height: tables.window.height,
            compact_threshold: tables.viewport.compact_threshold,
            resize_debounce_ms: tables.viewport.resize_debounce_ms,
            swipe_threshold: tables.gestures.swipe_threshold,
            touch_cooldown_ms: tables.gestures.touch_cooldown_ms,
            wheel_cooldown_ms: tables.gestures.wheel_cooldown_ms,
            wheel_line_delta: tables.gestures.wheel_line_delta,
            short_form_wide_chunk: tables.carousel.short_form_wide_chunk,
            start_section: tables.carousel.start_section,
            load_covers: tables.carousel.load_covers,
            log_level: tables.logging.log_level,
            key_next_page: tables.keys.next_page,
            key_prev_page: tables.keys.prev_page,
            key_toggle_section: tables.keys.toggle_section,
            key_pause_playback: tables.keys.pause_playback,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize)]
struct ViewportConfig {
    #[serde(default = "defaults::default_compact_threshold")]
    compact_threshold: f32,
    #[serde(default = "defaults::default_resize_debounce_ms")]
    resize_debounce_ms: u64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig {
            compact_threshold: defaults::default_compact_threshold(),
            resize_debounce_ms: defaults::default_resize_debounce_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct GesturesConfig {
    #[serde(default = "defaults::default_swipe_threshold")]
    swipe_threshold: f32,
    #[serde(default = "defaults::default_touch_cooldown_ms")]
    touch_cooldown_ms: u64,
    #[serde(default = "defaults::default_wheel_cooldown_ms")]
    wheel_cooldown_ms: u64,
    #[serde(default = "defaults::default_wheel_line_delta")]
    wheel_line_delta: f32,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        GesturesConfig {
            swipe_threshold: defaults::default_swipe_threshold(),
            touch_cooldown_ms: defaults::default_touch_cooldown_ms(),
            wheel_cooldown_ms: defaults::default_wheel_cooldown_ms(),
            wheel_line_delta: defaults::default_wheel_line_delta(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CarouselConfig {
    #[serde(default = "defaults::default_short_form_wide_chunk")]
    short_form_wide_chunk: usize,
    #[serde(default = "defaults::default_start_section")]
    start_section: SectionKind,
    #[serde(default = "defaults::default_load_covers")]
    load_covers: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            short_form_wide_chunk: defaults::default_short_form_wide_chunk(),
            start_section: defaults::default_start_section(),
            load_covers: defaults::default_load_covers(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next_page")]
    next_page: String,
    #[serde(default = "defaults::default_key_prev_page")]
    prev_page: String,
    #[serde(default = "defaults::default_key_toggle_section")]
    toggle_section: String,
    #[serde(default = "defaults::default_key_pause_playback")]
    pause_playback: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next_page: defaults::default_key_next_page(),
            prev_page: defaults::default_key_prev_page(),
            toggle_section: defaults::default_key_toggle_section(),
            pause_playback: defaults::default_key_pause_playback(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
