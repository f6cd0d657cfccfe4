use super::super::state::App;
use tracing::debug;

impl App {
    pub(super) fn handle_play_item(&mut self, id: &str) {
        if !self.section.carousel.play(id) {
            debug!(id, "Play request ignored");
        }
    }

    pub(super) fn handle_pause_playback(&mut self) {
        if self.section.carousel.playing_id().is_some() {
            self.section.carousel.pause_current();
        }
    }
}
