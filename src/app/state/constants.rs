use std::time::Duration;

/// Timing and layout limits for the showcase views.
pub(crate) const PAGE_TRANSITION: Duration = Duration::from_millis(700);
pub(crate) const ANIMATION_TICK: Duration = Duration::from_millis(16);
pub(crate) const FEATURE_MEDIA_HEIGHT_PX: f32 = 420.0;
pub(crate) const SHORT_MEDIA_HEIGHT_PX: f32 = 460.0;
pub(crate) const CARD_SPACING_PX: f32 = 16.0;
pub(crate) const SHORT_TEXT_MAX_CHARS: usize = 120;
pub(crate) const NAV_SPACING_PX: f32 = 6.0;
/// Extra inset per unit of scale lost while a page is sliding in.
pub(crate) const SCALE_INSET_PX: f32 = 240.0;
