//! Wheel and swipe normalization.
//!
//! Raw input is reduced to an `Advance`/`Retreat` intent by a pure
//! classifier. The router wraps that in an Idle/Locked state machine so one
//! physical gesture moves at most one page: the first intent acquires a
//! lock, everything after it is dropped until the matching `LockTicket` is
//! released by the caller's timer.

use crate::viewport::ViewportClass;
use std::time::Duration;
use tracing::{debug, trace};
use web_time::Instant;

/// Minimum delta (wheel units or pixels) that counts as a gesture.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;
pub const DEFAULT_TOUCH_COOLDOWN: Duration = Duration::from_millis(800);
pub const DEFAULT_WHEEL_COOLDOWN: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOrigin {
    Wheel,
    Touch,
}

/// Normalized input. Touch deltas are `start - end`, so a swipe left or up
/// is positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    Wheel { delta_y: f32 },
    TouchDelta { dx: f32, dy: f32 },
}

impl GestureInput {
    pub fn origin(&self) -> GestureOrigin {
        match self {
            GestureInput::Wheel { .. } => GestureOrigin::Wheel,
            GestureInput::TouchDelta { .. } => GestureOrigin::Touch,
        }
    }
}

/// Map an input to an intent. Touch only looks at the axis the carousel
/// slides along: horizontal when compact, vertical when wide.
pub fn classify(input: GestureInput, viewport: ViewportClass, threshold: f32) -> Option<Intent> {
    let delta = match input {
        GestureInput::Wheel { delta_y } => delta_y,
        GestureInput::TouchDelta { dx, dy } => match viewport {
            ViewportClass::Compact => dx,
            ViewportClass::Wide => dy,
        },
    };
    if delta > threshold {
        Some(Intent::Advance)
    } else if delta < -threshold {
        Some(Intent::Retreat)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    pub threshold: f32,
    pub touch_cooldown: Duration,
    pub wheel_cooldown: Duration,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
            touch_cooldown: DEFAULT_TOUCH_COOLDOWN,
            wheel_cooldown: DEFAULT_WHEEL_COOLDOWN,
        }
    }
}

impl GestureSettings {
    fn cooldown_for(&self, origin: GestureOrigin) -> Duration {
        match origin {
            GestureOrigin::Wheel => self.wheel_cooldown,
            GestureOrigin::Touch => self.touch_cooldown,
        }
    }
}

/// Releases exactly one lock. A ticket from an older lock releases nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockTicket {
    generation: u64,
    cooldown: Duration,
}

impl LockTicket {
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routed {
    pub intent: Intent,
    pub ticket: LockTicket,
}

#[derive(Debug, Clone, Copy)]
struct GestureLock {
    generation: u64,
    acquired_at: Instant,
    cooldown: Duration,
    origin: GestureOrigin,
}

impl GestureLock {
    fn unlock_at(&self) -> Instant {
        self.acquired_at + self.cooldown
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone)]
pub struct GestureRouter {
    settings: GestureSettings,
    lock: Option<GestureLock>,
    generation: u64,
    touch_origin: Option<TouchPoint>,
}

impl GestureRouter {
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            lock: None,
            generation: 0,
            touch_origin: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn unlock_at(&self) -> Option<Instant> {
        self.lock.as_ref().map(GestureLock::unlock_at)
    }

    pub fn wheel(&mut self, delta_y: f32, viewport: ViewportClass, now: Instant) -> Option<Routed> {
        self.route(GestureInput::Wheel { delta_y }, viewport, now)
    }

    /// Touch start is recorded even while locked; only the end is gated.
    pub fn touch_start(&mut self, point: TouchPoint) {
        self.touch_origin = Some(point);
    }

    pub fn touch_end(
        &mut self,
        point: TouchPoint,
        viewport: ViewportClass,
        now: Instant,
    ) -> Option<Routed> {
        let Some(start) = self.touch_origin.take() else {
            trace!("Touch end without a start; ignoring");
            return None;
        };
        let input = GestureInput::TouchDelta {
            dx: start.x - point.x,
            dy: start.y - point.y,
        };
        self.route(input, viewport, now)
    }

    /// Feed one normalized input. When it yields an intent the router locks
    /// and hands back the ticket the caller must schedule for release. The
    /// lock is taken even if the pager turns out to be at its edge.
    pub fn route(
        &mut self,
        input: GestureInput,
        viewport: ViewportClass,
        now: Instant,
    ) -> Option<Routed> {
        if let Some(lock) = &self.lock {
            debug!(
                origin = ?input.origin(),
                locked_by = ?lock.origin,
                "Gesture dropped while locked"
            );
            return None;
        }
        let intent = classify(input, viewport, self.settings.threshold)?;
        let ticket = self.acquire(input.origin(), now);
        debug!(?intent, origin = ?input.origin(), %viewport, "Gesture accepted");
        Some(Routed { intent, ticket })
    }

    fn acquire(&mut self, origin: GestureOrigin, now: Instant) -> LockTicket {
        self.generation = self.generation.wrapping_add(1);
        let cooldown = self.settings.cooldown_for(origin);
        self.lock = Some(GestureLock {
            generation: self.generation,
            acquired_at: now,
            cooldown,
            origin,
        });
        LockTicket {
            generation: self.generation,
            cooldown,
        }
    }

    /// Called when the cooldown timer for `ticket` fires.
    pub fn release(&mut self, ticket: LockTicket) -> bool {
        match &self.lock {
            Some(lock) if lock.generation == ticket.generation => {
                self.lock = None;
                true
            }
            _ => {
                trace!("Stale gesture unlock ignored");
                false
            }
        }
    }

    /// Drop a lock whose window has passed even if its timer never fired.
    pub fn expire_due(&mut self, now: Instant) -> bool {
        match &self.lock {
            Some(lock) if now >= lock.unlock_at() => {
                self.lock = None;
                true
            }
            _ => false,
        }
    }

    /// Forget all transient state; outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.lock = None;
        self.touch_origin = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Default for GestureRouter {
    fn default() -> Self {
        Self::new(GestureSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_thresholds_are_strict() {
        let t = DEFAULT_SWIPE_THRESHOLD;
        let wide = ViewportClass::Wide;
        assert_eq!(
            classify(GestureInput::Wheel { delta_y: 80.0 }, wide, t),
            Some(Intent::Advance)
        );
        assert_eq!(
            classify(GestureInput::Wheel { delta_y: -80.0 }, wide, t),
            Some(Intent::Retreat)
        );
        assert_eq!(classify(GestureInput::Wheel { delta_y: 50.0 }, wide, t), None);
        assert_eq!(classify(GestureInput::Wheel { delta_y: -50.0 }, wide, t), None);
        assert_eq!(
            classify(GestureInput::Wheel { delta_y: f32::NAN }, wide, t),
            None
        );
    }

    #[test]
    fn touch_axis_follows_viewport() {
        let swipe_left = GestureInput::TouchDelta { dx: 100.0, dy: 0.0 };
        let swipe_down = GestureInput::TouchDelta { dx: 0.0, dy: -120.0 };
        let t = DEFAULT_SWIPE_THRESHOLD;

        assert_eq!(
            classify(swipe_left, ViewportClass::Compact, t),
            Some(Intent::Advance)
        );
        assert_eq!(classify(swipe_left, ViewportClass::Wide, t), None);
        assert_eq!(classify(swipe_down, ViewportClass::Compact, t), None);
        assert_eq!(
            classify(swipe_down, ViewportClass::Wide, t),
            Some(Intent::Retreat)
        );
    }

    #[test]
    fn compact_swipe_left_advances_once() {
        let mut router = GestureRouter::default();
        let now = Instant::now();
        router.touch_start(TouchPoint::new(300.0, 0.0));
        let routed = router
            .touch_end(TouchPoint::new(200.0, 0.0), ViewportClass::Compact, now)
            .expect("intent");
        assert_eq!(routed.intent, Intent::Advance);
        assert_eq!(routed.ticket.cooldown(), DEFAULT_TOUCH_COOLDOWN);
    }

    #[test]
    fn wide_ignores_horizontal_swipe_and_stays_idle() {
        let mut router = GestureRouter::default();
        router.touch_start(TouchPoint::new(300.0, 0.0));
        let routed = router.touch_end(
            TouchPoint::new(200.0, 0.0),
            ViewportClass::Wide,
            Instant::now(),
        );
        assert_eq!(routed, None);
        assert!(!router.is_locked());
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut router = GestureRouter::default();
        let routed = router.touch_end(
            TouchPoint::new(0.0, 0.0),
            ViewportClass::Compact,
            Instant::now(),
        );
        assert_eq!(routed, None);
    }

    #[test]
    fn lock_drops_input_until_released() {
        let mut router = GestureRouter::default();
        let now = Instant::now();
        let first = router.wheel(80.0, ViewportClass::Wide, now).expect("first");
        assert_eq!(first.ticket.cooldown(), DEFAULT_WHEEL_COOLDOWN);
        assert!(router.wheel(80.0, ViewportClass::Wide, now).is_none());

        router.touch_start(TouchPoint::new(0.0, 300.0));
        assert!(
            router
                .touch_end(TouchPoint::new(0.0, 0.0), ViewportClass::Wide, now)
                .is_none()
        );

        assert!(router.release(first.ticket));
        assert!(router.wheel(80.0, ViewportClass::Wide, now).is_some());
    }

    #[test]
    fn stale_ticket_cannot_release_newer_lock() {
        let mut router = GestureRouter::default();
        let now = Instant::now();
        let first = router.wheel(80.0, ViewportClass::Wide, now).unwrap();
        router.expire_due(now + DEFAULT_WHEEL_COOLDOWN);
        let second = router.wheel(-80.0, ViewportClass::Wide, now).unwrap();

        assert!(!router.release(first.ticket));
        assert!(router.is_locked());
        assert!(router.release(second.ticket));
        assert!(!router.is_locked());
    }

    #[test]
    fn expire_due_respects_window() {
        let mut router = GestureRouter::default();
        let now = Instant::now();
        router.touch_start(TouchPoint::new(0.0, 0.0));
        router
            .touch_end(TouchPoint::new(-90.0, 0.0), ViewportClass::Compact, now)
            .unwrap();
        assert_eq!(router.unlock_at(), Some(now + DEFAULT_TOUCH_COOLDOWN));
        assert!(!router.expire_due(now + Duration::from_millis(799)));
        assert!(router.expire_due(now + Duration::from_millis(800)));
    }

    #[test]
    fn reset_invalidates_outstanding_tickets() {
        let mut router = GestureRouter::default();
        let now = Instant::now();
        let ticket = router.wheel(200.0, ViewportClass::Wide, now).unwrap().ticket;
        router.reset();
        assert!(!router.is_locked());
        let fresh = router.wheel(200.0, ViewportClass::Wide, now).unwrap().ticket;
        assert!(!router.release(ticket));
        assert!(router.release(fresh));
    }
}
