use super::super::state::{App, SectionState};
use super::Effect;
use crate::config::SectionKind;
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_next_page(&mut self, effects: &mut Vec<Effect>) {
        let previous = self.section.carousel.current_page();
        if self.section.carousel.next() {
            self.after_navigation(previous, effects);
        }
    }

    pub(super) fn handle_previous_page(&mut self, effects: &mut Vec<Effect>) {
        let previous = self.section.carousel.current_page();
        if self.section.carousel.prev() {
            self.after_navigation(previous, effects);
        }
    }

    pub(super) fn handle_go_to_page(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let previous = self.section.carousel.current_page();
        if previous == index {
            return;
        }
        if self.section.carousel.go_to(index) {
            self.after_navigation(previous, effects);
        }
    }

    /// Start the slide-in and fetch covers once the visible page changed.
    pub(super) fn after_navigation(&mut self, previous: usize, effects: &mut Vec<Effect>) {
        if self.section.carousel.current_page() == previous {
            return;
        }
        self.section.start_slide(previous, Instant::now());
        effects.extend(self.cover_effects());
    }

    pub(super) fn handle_show_section(&mut self, kind: SectionKind, effects: &mut Vec<Effect>) {
        if kind == self.section.kind {
            debug!(section = %kind, "Section already shown");
            return;
        }
        self.section.unmount();
        self.mounts = self.mounts.wrapping_add(1);
        self.section = SectionState::mount(
            kind,
            self.mounts,
            &self.catalog,
            self.viewport.class(),
            &self.config,
        );
        info!(section = %kind, "Switched showcase section");
        effects.extend(self.cover_effects());
    }
}
