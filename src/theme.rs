//! Theme selection and the accent palette used by the showcase cards.

use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme};
use showcase_core::{CardLayout, Difficulty};

pub fn iced_theme(mode: ThemeMode) -> IcedTheme {
    match mode {
        ThemeMode::Night => IcedTheme::Dark,
        ThemeMode::Day => IcedTheme::Light,
    }
}

/// Accent for each card layout: blue for feature videos, purple for shorts.
pub fn accent(layout: CardLayout) -> Color {
    match layout {
        CardLayout::Feature => Color::from_rgb8(0, 168, 255),
        CardLayout::ShortForm => Color::from_rgb8(54, 0, 120),
    }
}

pub fn difficulty_color(level: Difficulty) -> Color {
    match level {
        Difficulty::Easy => Color::from_rgb8(34, 197, 94),
        Difficulty::Medium => Color::from_rgb8(234, 179, 8),
        Difficulty::Hard => Color::from_rgb8(239, 68, 68),
    }
}

pub fn muted() -> Color {
    Color::from_rgba8(100, 116, 139, 0.7)
}
