use super::models::{LogLevel, SectionKind};

pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_compact_threshold() -> f32 {
    showcase_core::viewport::DEFAULT_COMPACT_THRESHOLD
}

pub(crate) fn default_resize_debounce_ms() -> u64 {
    120
}

pub(crate) fn default_swipe_threshold() -> f32 {
    showcase_core::gesture::DEFAULT_SWIPE_THRESHOLD
}

pub(crate) fn default_touch_cooldown_ms() -> u64 {
    800
}

pub(crate) fn default_wheel_cooldown_ms() -> u64 {
    1000
}

pub(crate) fn default_wheel_line_delta() -> f32 {
    100.0
}

pub(crate) fn default_short_form_wide_chunk() -> usize {
    3
}

pub(crate) fn default_start_section() -> SectionKind {
    SectionKind::Videos
}

pub(crate) fn default_load_covers() -> bool {
    true
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Debug
}

pub(crate) fn default_key_next_page() -> String {
    "arrowdown, arrowright, pagedown".to_string()
}

pub(crate) fn default_key_prev_page() -> String {
    "arrowup, arrowleft, pageup".to_string()
}

pub(crate) fn default_key_toggle_section() -> String {
    "tab".to_string()
}

pub(crate) fn default_key_pause_playback() -> String {
    "space".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
