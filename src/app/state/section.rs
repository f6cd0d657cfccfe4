use super::constants::PAGE_TRANSITION;
use crate::app::frame::EmbeddedPlayer;
use crate::config::{AppConfig, SectionKind};
use iced::task;
use showcase_core::{
    CardLayout, Carousel, Catalog, ChannelFrame, ChunkPolicy, Transition, ViewportClass,
};
use std::collections::HashMap;
use std::time::Instant;
use tracing::info;

/// Active page sliding in after navigation.
#[derive(Debug, Clone, Copy)]
pub(in crate::app) struct SlideIn {
    pub(in crate::app) from: Transition,
    pub(in crate::app) started: Instant,
    pub(in crate::app) progress: f32,
}

/// One mounted showcase: its carousel plus the frames and timers it owns.
pub(in crate::app) struct SectionState {
    pub(in crate::app) kind: SectionKind,
    pub(in crate::app) mount_id: u64,
    pub(in crate::app) carousel: Carousel<ChannelFrame>,
    pub(in crate::app) embeds: HashMap<String, EmbeddedPlayer>,
    pub(in crate::app) unlock_task: Option<task::Handle>,
    pub(in crate::app) slide: Option<SlideIn>,
}

impl SectionState {
    pub(in crate::app) fn mount(
        kind: SectionKind,
        mount_id: u64,
        catalog: &Catalog,
        viewport: ViewportClass,
        config: &AppConfig,
    ) -> Self {
        let (items, policy, layout) = match kind {
            SectionKind::Videos => (
                catalog.videos.clone(),
                ChunkPolicy::SINGLE,
                CardLayout::Feature,
            ),
            SectionKind::Shorts => (
                catalog.shorts.clone(),
                ChunkPolicy::short_form(config.short_form_wide_chunk),
                CardLayout::ShortForm,
            ),
        };
        let mut carousel = Carousel::new(
            items.clone(),
            policy,
            layout,
            viewport,
            config.gesture_settings(),
        );
        let mut embeds = HashMap::with_capacity(items.len());
        for item in items.iter() {
            let (embed, frame) = EmbeddedPlayer::mount(item);
            carousel.register_frame(item.id.clone(), frame);
            embeds.insert(item.id.clone(), embed);
        }
        info!(
            section = %kind,
            mount_id,
            items = items.len(),
            pages = carousel.page_count(),
            %viewport,
            "Mounted showcase section"
        );
        Self {
            kind,
            mount_id,
            carousel,
            embeds,
            unlock_task: None,
            slide: None,
        }
    }

    /// Pause playback, drop any pending unlock timer and release frames.
    pub(in crate::app) fn unmount(&mut self) {
        self.unlock_task = None;
        self.slide = None;
        self.carousel.teardown();
        for id in self.embeds.keys() {
            self.carousel.unregister_frame(id);
        }
        self.sync_embeds();
        info!(section = %self.kind, mount_id = self.mount_id, "Unmounted showcase section");
    }

    pub(in crate::app) fn sync_embeds(&mut self) {
        for embed in self.embeds.values_mut() {
            embed.drain();
        }
    }

    pub(in crate::app) fn start_slide(&mut self, previous_page: usize, now: Instant) {
        if previous_page == self.carousel.current_page() {
            return;
        }
        self.slide = Some(SlideIn {
            from: self.carousel.entry_transition(previous_page),
            started: now,
            progress: 0.0,
        });
    }

    /// Advance the slide animation. Returns `true` once it has finished.
    pub(in crate::app) fn advance_slide(&mut self, now: Instant) -> bool {
        let Some(slide) = self.slide.as_mut() else {
            return false;
        };
        let elapsed = now.saturating_duration_since(slide.started);
        slide.progress = elapsed.as_secs_f32() / PAGE_TRANSITION.as_secs_f32();
        if slide.progress >= 1.0 {
            self.slide = None;
            return true;
        }
        false
    }

    pub(in crate::app) fn active_transition(&self) -> Transition {
        match &self.slide {
            Some(slide) => slide.from.toward_active(ease_out(slide.progress)),
            None => self.carousel.transition(self.carousel.current_page()),
        }
    }
}

fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
