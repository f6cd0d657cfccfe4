//! Viewport classification.
//!
//! Everything downstream (chunk size, gesture axis, transition direction)
//! keys off a single `Compact`/`Wide` signal derived from the container
//! width. There is no hysteresis: a width exactly at the threshold is wide.

/// Width in logical pixels below which the viewport is compact.
pub const DEFAULT_COMPACT_THRESHOLD: f32 = 768.0;

/// Coarse display classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Compact,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f32, threshold: f32) -> Self {
        if width.is_finite() && width < threshold {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_compact(self) -> bool {
        matches!(self, ViewportClass::Compact)
    }
}

impl std::fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ViewportClass::Compact => "compact",
            ViewportClass::Wide => "wide",
        };
        write!(f, "{}", label)
    }
}

/// Handle for one pending resize; only the newest one settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    generation: u64,
}

/// Tracks the current class and debounces bursts of resize signals.
#[derive(Debug, Clone)]
pub struct ViewportMonitor {
    threshold: f32,
    class: ViewportClass,
    pending_width: Option<f32>,
    generation: u64,
}

impl ViewportMonitor {
    pub fn new(width: f32, threshold: f32) -> Self {
        let threshold = if threshold.is_finite() && threshold > 0.0 {
            threshold
        } else {
            DEFAULT_COMPACT_THRESHOLD
        };
        Self {
            threshold,
            class: ViewportClass::from_width(width, threshold),
            pending_width: None,
            generation: 0,
        }
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn is_compact(&self) -> bool {
        self.class.is_compact()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Reclassify immediately. Returns the new class only when it changed.
    pub fn observe(&mut self, width: f32) -> Option<ViewportClass> {
        let next = ViewportClass::from_width(width, self.threshold);
        if next == self.class {
            return None;
        }
        tracing::debug!(from = %self.class, to = %next, width, "Viewport class changed");
        self.class = next;
        Some(next)
    }

    /// Record a resize without applying it. Any earlier ticket becomes stale.
    pub fn on_resize(&mut self, width: f32) -> SettleTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending_width = Some(width);
        SettleTicket {
            generation: self.generation,
        }
    }

    /// Apply the pending width if `ticket` is still the newest one.
    pub fn settle(&mut self, ticket: SettleTicket) -> Option<ViewportClass> {
        if ticket.generation != self.generation {
            return None;
        }
        let width = self.pending_width.take()?;
        self.observe(width)
    }
}
