use super::super::state::App;
use super::Effect;
use showcase_core::SettleTicket;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<Effect>,
    ) {
        debug!(width, height, "Window resized");
        let ticket = self.viewport.on_resize(width);
        // The configured window size is only a guess; the first real one
        // applies straight away.
        let first = !self.viewport_measured;
        self.viewport_measured = true;
        if first || self.config.resize_debounce_ms == 0 {
            self.handle_viewport_settled(ticket, effects);
        } else {
            effects.push(Effect::ScheduleViewportSettle(ticket));
        }
    }

    pub(super) fn handle_viewport_settled(
        &mut self,
        ticket: SettleTicket,
        effects: &mut Vec<Effect>,
    ) {
        self.resize_task = None;
        let Some(class) = self.viewport.settle(ticket) else {
            return;
        };
        let reset = self.section.carousel.set_viewport(class);
        self.section.slide = None;
        if reset {
            info!(viewport = %class, "Page reset after viewport change");
        }
        effects.extend(self.cover_effects());
    }
}
