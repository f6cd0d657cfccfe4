use serde::Deserialize;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub window_width: f32,
    pub window_height: f32,
    pub compact_threshold: f32,
    pub resize_debounce_ms: u64,
    pub swipe_threshold: f32,
    pub touch_cooldown_ms: u64,
    pub wheel_cooldown_ms: u64,
    /// Wheel units per scrolled line, so line-based wheels behave like
    /// pixel-based ones against `swipe_threshold`.
    pub wheel_line_delta: f32,
    pub short_form_wide_chunk: usize,
    pub start_section: SectionKind,
    pub load_covers: bool,
    pub log_level: LogLevel,
    pub key_next_page: String,
    pub key_prev_page: String,
    pub key_toggle_section: String,
    pub key_pause_playback: String,
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            compact_threshold: crate::config::defaults::default_compact_threshold(),
            resize_debounce_ms: crate::config::defaults::default_resize_debounce_ms(),
            swipe_threshold: crate::config::defaults::default_swipe_threshold(),
            touch_cooldown_ms: crate::config::defaults::default_touch_cooldown_ms(),
            wheel_cooldown_ms: crate::config::defaults::default_wheel_cooldown_ms(),
            wheel_line_delta: crate::config::defaults::default_wheel_line_delta(),
            short_form_wide_chunk: crate::config::defaults::default_short_form_wide_chunk(),
            start_section: crate::config::defaults::default_start_section(),
            load_covers: crate::config::defaults::default_load_covers(),
            log_level: crate::config::defaults::default_log_level(),
            key_next_page: crate::config::defaults::default_key_next_page(),
            key_prev_page: crate::config::defaults::default_key_prev_page(),
            key_toggle_section: crate::config::defaults::default_key_toggle_section(),
            key_pause_playback: crate::config::defaults::default_key_pause_playback(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

impl AppConfig {
    pub fn gesture_settings(&self) -> showcase_core::GestureSettings {
        showcase_core::GestureSettings {
            threshold: self.swipe_threshold,
            touch_cooldown: std::time::Duration::from_millis(self.touch_cooldown_ms),
            wheel_cooldown: std::time::Duration::from_millis(self.wheel_cooldown_ms),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

/// Which showcase is shown first.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    #[default]
    Videos,
    Shorts,
}

impl SectionKind {
    pub fn other(self) -> Self {
        match self {
            SectionKind::Videos => SectionKind::Shorts,
            SectionKind::Shorts => SectionKind::Videos,
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SectionKind::Videos => "Videos",
            SectionKind::Shorts => "Short-form Content",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
