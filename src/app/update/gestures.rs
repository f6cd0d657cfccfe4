use super::super::state::App;
use super::Effect;
use iced::mouse::ScrollDelta;
use showcase_core::{LockTicket, TouchPoint};
use std::time::Instant;
use tracing::{debug, trace};

/// Vertical wheel movement in the pixel-like units the gesture threshold
/// expects. Positive means "scroll down", which advances.
pub(super) fn wheel_delta_y(delta: ScrollDelta, line_delta: f32) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => -y * line_delta,
        ScrollDelta::Pixels { y, .. } => -y,
    }
}

impl App {
    pub(super) fn handle_wheel_scrolled(&mut self, delta: ScrollDelta, effects: &mut Vec<Effect>) {
        let delta_y = wheel_delta_y(delta, self.config.wheel_line_delta);
        trace!(delta_y, "Wheel input");
        let previous = self.section.carousel.current_page();
        if let Some(ticket) = self.section.carousel.wheel(delta_y, Instant::now()) {
            self.after_gesture(previous, ticket, effects);
        }
    }

    pub(super) fn handle_touch_started(&mut self, x: f32, y: f32) {
        self.section.carousel.touch_start(TouchPoint::new(x, y));
    }

    pub(super) fn handle_touch_ended(&mut self, x: f32, y: f32, effects: &mut Vec<Effect>) {
        let previous = self.section.carousel.current_page();
        if let Some(ticket) = self
            .section
            .carousel
            .touch_end(TouchPoint::new(x, y), Instant::now())
        {
            self.after_gesture(previous, ticket, effects);
        }
    }

    fn after_gesture(&mut self, previous: usize, ticket: LockTicket, effects: &mut Vec<Effect>) {
        effects.push(Effect::ScheduleUnlock(ticket));
        self.after_navigation(previous, effects);
    }

    pub(super) fn handle_gesture_unlocked(&mut self, mount: u64, ticket: LockTicket) {
        if mount != self.section.mount_id {
            debug!(mount, current = self.section.mount_id, "Unlock for unmounted section");
            return;
        }
        if self.section.carousel.release_lock(ticket) {
            self.section.unlock_task = None;
            debug!("Gesture lock released");
        }
    }
}
