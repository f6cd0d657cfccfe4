//! Carousel composition: pager + gesture router + player proxy.
//!
//! Both showcase call sites use this same state machine. They differ only
//! in `ChunkPolicy` (items per page per viewport class) and `CardLayout`
//! (full video cards vs short-form cards).

use crate::gesture::{GestureRouter, GestureSettings, Intent, LockTicket, Routed, TouchPoint};
use crate::item::Item;
use crate::pager::Pager;
use crate::player::{FrameHandle, Playback, PlayerProxy};
use crate::viewport::ViewportClass;
use std::sync::Arc;
use tracing::{debug, info};
use web_time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardLayout {
    /// One wide video card with a text column.
    Feature,
    /// Portrait cards, several per page on wide screens.
    ShortForm,
}

impl CardLayout {
    pub fn placeholder_cover(self) -> &'static str {
        match self {
            CardLayout::Feature => "https://picsum.photos/seed/vibrant/1920/1080?blur=4",
            CardLayout::ShortForm => "https://picsum.photos/seed/vibrant/1080/1920?blur=4",
        }
    }

    /// Distance inactive pages sit out of frame, in logical pixels.
    pub fn slide_offset(self) -> f32 {
        match self {
            CardLayout::Feature => 64.0,
            CardLayout::ShortForm => 96.0,
        }
    }

    pub fn unit_label(self) -> &'static str {
        match self {
            CardLayout::Feature => "Video",
            CardLayout::ShortForm => "Page",
        }
    }
}

/// Items per page for each viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPolicy {
    pub compact: usize,
    pub wide: usize,
}

impl ChunkPolicy {
    pub const SINGLE: ChunkPolicy = ChunkPolicy {
        compact: 1,
        wide: 1,
    };

    pub fn short_form(wide: usize) -> Self {
        ChunkPolicy {
            compact: 1,
            wide: wide.max(1),
        }
    }

    pub fn chunk_for(&self, viewport: ViewportClass) -> usize {
        match viewport {
            ViewportClass::Compact => self.compact,
            ViewportClass::Wide => self.wide,
        }
        .max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Before,
    Active,
    After,
}

/// Render state of one page relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
    pub interactive: bool,
}

impl Transition {
    const ACTIVE: Transition = Transition {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
        interactive: true,
    };

    /// Interpolate from `self` to the resting active state. `progress` is
    /// clamped to `0.0..=1.0`; the result is interactive only once settled.
    pub fn toward_active(self, progress: f32) -> Transition {
        let t = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            1.0
        };
        let lerp = |from: f32, to: f32| from + (to - from) * t;
        let target = Transition::ACTIVE;
        Transition {
            opacity: lerp(self.opacity, target.opacity),
            offset_x: lerp(self.offset_x, target.offset_x),
            offset_y: lerp(self.offset_y, target.offset_y),
            scale: lerp(self.scale, target.scale),
            interactive: t >= 1.0,
        }
    }
}

pub struct Carousel<F> {
    pager: Pager<Item>,
    router: GestureRouter,
    player: PlayerProxy<F>,
    policy: ChunkPolicy,
    layout: CardLayout,
    viewport: ViewportClass,
}

impl<F: FrameHandle> Carousel<F> {
    pub fn new(
        items: Arc<[Item]>,
        policy: ChunkPolicy,
        layout: CardLayout,
        viewport: ViewportClass,
        gestures: GestureSettings,
    ) -> Self {
        Self {
            pager: Pager::new(items, policy.chunk_for(viewport)),
            router: GestureRouter::new(gestures),
            player: PlayerProxy::new(),
            policy,
            layout,
            viewport,
        }
    }

    pub fn layout(&self) -> CardLayout {
        self.layout
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn pager(&self) -> &Pager<Item> {
        &self.pager
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count()
    }

    pub fn has_next(&self) -> bool {
        self.pager.has_next()
    }

    pub fn has_prev(&self) -> bool {
        self.pager.has_prev()
    }

    /// Prev/next/indicator controls only make sense with several pages.
    pub fn show_navigation(&self) -> bool {
        self.page_count() > 1
    }

    pub fn is_locked(&self) -> bool {
        self.router.is_locked()
    }

    /// Apply a new viewport class. Returns `true` when the current page was
    /// reset; playback is paused in that case since the playing item may
    /// have left the screen.
    pub fn set_viewport(&mut self, viewport: ViewportClass) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        let chunk = self.policy.chunk_for(viewport);
        let reset = self.pager.set_chunk_size(chunk);
        if reset {
            self.player.pause_current();
        }
        info!(
            %viewport,
            chunk,
            page_count = self.pager.page_count(),
            reset,
            "Carousel rechunked"
        );
        reset
    }

    pub fn set_items(&mut self, items: Arc<[Item]>) -> bool {
        self.player.pause_current();
        self.pager
            .set_items(items, self.policy.chunk_for(self.viewport))
    }

    pub fn next(&mut self) -> bool {
        self.pager.next(&mut self.player)
    }

    pub fn prev(&mut self) -> bool {
        self.pager.prev(&mut self.player)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.pager.go_to(index, &mut self.player)
    }

    /// Returns the ticket to schedule for release when the wheel produced
    /// an intent (even if the pager was already at its edge).
    pub fn wheel(&mut self, delta_y: f32, now: Instant) -> Option<LockTicket> {
        let routed = self.router.wheel(delta_y, self.viewport, now)?;
        Some(self.apply(routed))
    }

    pub fn touch_start(&mut self, point: TouchPoint) {
        self.router.touch_start(point);
    }

    pub fn touch_end(&mut self, point: TouchPoint, now: Instant) -> Option<LockTicket> {
        let routed = self.router.touch_end(point, self.viewport, now)?;
        Some(self.apply(routed))
    }

    fn apply(&mut self, routed: Routed) -> LockTicket {
        let moved = match routed.intent {
            Intent::Advance => self.next(),
            Intent::Retreat => self.prev(),
        };
        if !moved {
            debug!(intent = ?routed.intent, "Gesture hit the edge; lock still held");
        }
        routed.ticket
    }

    pub fn release_lock(&mut self, ticket: LockTicket) -> bool {
        self.router.release(ticket)
    }

    pub fn expire_locks(&mut self, now: Instant) -> bool {
        self.router.expire_due(now)
    }

    /// Start playback of an item on the active page. Items on other pages
    /// are inert and ignored.
    pub fn play(&mut self, id: &str) -> bool {
        let on_active_page = self
            .pager
            .current()
            .is_some_and(|page| page.iter().any(|item| item.id == id));
        if !on_active_page {
            debug!(id, "Play ignored for item outside the active page");
            return false;
        }
        self.player.play(id);
        true
    }

    pub fn pause_current(&mut self) {
        self.player.pause_current();
    }

    pub fn playing_id(&self) -> Option<&str> {
        self.player.playing_id()
    }

    pub fn is_playing(&self, id: &str) -> bool {
        self.player.is_playing(id)
    }

    /// The still cover (with its play affordance) hides the frame unless
    /// the item is the one playing.
    pub fn cover_visible(&self, id: &str) -> bool {
        !self.player.is_playing(id)
    }

    pub fn register_frame(&mut self, id: impl Into<String>, handle: F) -> Option<F> {
        self.player.register_frame(id, handle)
    }

    pub fn unregister_frame(&mut self, id: &str) -> Option<F> {
        self.player.unregister_frame(id)
    }

    pub fn has_frame(&self, id: &str) -> bool {
        self.player.has_frame(id)
    }

    pub fn slot(&self, page_index: usize) -> PageSlot {
        let current = self.pager.current_page();
        if page_index < current {
            PageSlot::Before
        } else if page_index == current {
            PageSlot::Active
        } else {
            PageSlot::After
        }
    }

    pub fn transition(&self, page_index: usize) -> Transition {
        self.slot_transition(self.slot(page_index))
    }

    /// Starting point for the active page after leaving `previous_page`. The
    /// new page arrives from the side opposite the one the old page exits.
    pub fn entry_transition(&self, previous_page: usize) -> Transition {
        let slot = match self.slot(previous_page) {
            PageSlot::Before => PageSlot::After,
            PageSlot::After => PageSlot::Before,
            PageSlot::Active => PageSlot::Active,
        };
        self.slot_transition(slot)
    }

    fn slot_transition(&self, slot: PageSlot) -> Transition {
        let distance = match slot {
            PageSlot::Active => return Transition::ACTIVE,
            PageSlot::Before => -self.layout.slide_offset(),
            PageSlot::After => self.layout.slide_offset(),
        };
        let (offset_x, offset_y) = match self.viewport {
            ViewportClass::Compact => (distance, 0.0),
            ViewportClass::Wide => (0.0, distance),
        };
        Transition {
            opacity: 0.0,
            offset_x,
            offset_y,
            scale: 0.95,
            interactive: false,
        }
    }

    /// Stop playback and drop the pending lock and touch tracking. Frames
    /// stay registered until their owner unregisters them.
    pub fn teardown(&mut self) {
        self.router.reset();
        self.player.pause_current();
        debug!(layout = ?self.layout, "Carousel torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerCommand;
    use crate::player::testing::{CommandLog, RecordingFrame, frame};

    fn items(ids: &[&str]) -> Arc<[Item]> {
        ids.iter()
            .map(|id| Item {
                id: id.to_string(),
                title: id.to_uppercase(),
                subtitle: None,
                text: String::new(),
                difficulty: None,
                url: format!("https://youtu.be/{id}"),
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn short_form(viewport: ViewportClass, log: &CommandLog) -> Carousel<RecordingFrame> {
        let ids = ["a", "b", "c", "d", "e"];
        let mut carousel = Carousel::new(
            items(&ids),
            ChunkPolicy::short_form(3),
            CardLayout::ShortForm,
            viewport,
            GestureSettings::default(),
        );
        for id in ids {
            carousel.register_frame(id, frame(id, log));
        }
        carousel
    }

    fn page_ids(carousel: &Carousel<RecordingFrame>) -> Vec<Vec<String>> {
        carousel
            .pager()
            .pages()
            .map(|page| page.iter().map(|item| item.id.clone()).collect())
            .collect()
    }

    #[test]
    fn wide_and_compact_chunking() {
        let log = CommandLog::default();
        let mut carousel = short_form(ViewportClass::Wide, &log);
        assert_eq!(page_ids(&carousel), vec![vec!["a", "b", "c"], vec!["d", "e"]]);
        assert_eq!(carousel.page_count(), 2);

        carousel.set_viewport(ViewportClass::Compact);
        assert_eq!(carousel.page_count(), 5);
        assert_eq!(carousel.current_page(), 0);
    }

    #[test]
    fn viewport_flip_resets_out_of_range_page_and_pauses() {
        let log = CommandLog::default();
        let mut carousel = short_form(ViewportClass::Compact, &log);
        carousel.go_to(4);
        carousel.play("e");

        assert!(carousel.set_viewport(ViewportClass::Wide));
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(carousel.playing_id(), None);
        assert_eq!(
            log.borrow().last(),
            Some(&("e".to_string(), PlayerCommand::Pause))
        );
    }

    #[test]
    fn repeated_wheel_in_lock_window_moves_once() {
        let log = CommandLog::default();
        let mut carousel = short_form(ViewportClass::Compact, &log);
        let now = Instant::now();

        let ticket = carousel.wheel(80.0, now).expect("first wheel locks");
        assert!(carousel.wheel(80.0, now).is_none());
        assert_eq!(carousel.current_page(), 1);

        assert!(carousel.release_lock(ticket));
        assert!(carousel.wheel(80.0, now).is_some());
        assert_eq!(carousel.current_page(), 2);
    }

    #[test]
    fn compact_swipe_left_advances_and_wide_ignores_it() {
        let log = CommandLog::default();
        let now = Instant::now();

        let mut compact = short_form(ViewportClass::Compact, &log);
        compact.touch_start(TouchPoint::new(300.0, 0.0));
        assert!(compact.touch_end(TouchPoint::new(200.0, 0.0), now).is_some());
        assert_eq!(compact.current_page(), 1);

        let mut wide = short_form(ViewportClass::Wide, &log);
        wide.touch_start(TouchPoint::new(300.0, 0.0));
        assert!(wide.touch_end(TouchPoint::new(200.0, 0.0), now).is_none());
        assert_eq!(wide.current_page(), 0);
    }

    #[test]
    fn edge_gesture_still_locks() {
        let log = CommandLog::default();
        let mut carousel = short_form(ViewportClass::Wide, &log);
        let now = Instant::now();

        assert!(carousel.wheel(-120.0, now).is_some());
        assert_eq!(carousel.current_page(), 0);
        assert!(carousel.is_locked());
    }

    #[test]
    fn navigation_always_clears_playback() {
        let log = CommandLog::default();
        let mut carousel = short_form(ViewportClass::Compact, &log);

        assert!(carousel.play("a"));
        assert!(carousel.next());
        assert_eq!(carousel.playing_id(), None);

        assert!(carousel.play("b"));
        assert!(carousel.go_to(3));
        assert_eq!(carousel.playing_id(), None);

        assert!(carousel.play("d"));
        assert!(carousel.prev());
        assert_eq!(carousel.playing_id(), None);
    }

    #[test]
    fn play_only_reaches_active_page() {
        let log = CommandLog::default();
        let mut carousel = short_form(ViewportClass::Wide, &log);
        assert!(!carousel.play("d"));
        assert!(carousel.play("b"));
        assert!(!carousel.cover_visible("b"));
        assert!(carousel.cover_visible("a"));
    }

    #[test]
    fn transitions_follow_viewport_axis() {
        let log = CommandLog::default();
        let mut carousel = short_form(ViewportClass::Compact, &log);
        carousel.go_to(2);

        assert_eq!(carousel.transition(2), Transition::ACTIVE);
        let before = carousel.transition(1);
        assert_eq!((before.offset_x, before.offset_y), (-96.0, 0.0));
        assert!(!before.interactive);
        let after = carousel.transition(3);
        assert_eq!((after.offset_x, after.offset_y), (96.0, 0.0));

        carousel.set_viewport(ViewportClass::Wide);
        let after = carousel.transition(1);
        assert_eq!((after.offset_x, after.offset_y), (0.0, 96.0));
        assert_eq!(after.opacity, 0.0);
    }

    #[test]
    fn entering_page_blends_into_active() {
        let log = CommandLog::default();
        let carousel = short_form(ViewportClass::Compact, &log);
        let from = carousel.transition(1);

        assert_eq!(from.toward_active(0.0), from);
        let halfway = from.toward_active(0.5);
        assert_eq!(halfway.offset_x, 48.0);
        assert_eq!(halfway.opacity, 0.5);
        assert!(!halfway.interactive);
        assert_eq!(from.toward_active(2.0), Transition::ACTIVE);
    }

    #[test]
    fn entry_comes_from_opposite_side() {
        let log = CommandLog::default();
        let mut carousel = short_form(ViewportClass::Wide, &log);
        carousel.next();
        let entering = carousel.entry_transition(0);
        assert_eq!((entering.offset_x, entering.offset_y), (0.0, 96.0));

        carousel.prev();
        let entering = carousel.entry_transition(1);
        assert_eq!(entering.offset_y, -96.0);
        assert_eq!(carousel.entry_transition(0), Transition::ACTIVE);
    }

    #[test]
    fn teardown_pauses_and_forgets_lock() {
        let log = CommandLog::default();
        let mut carousel = short_form(ViewportClass::Wide, &log);
        let now = Instant::now();
        carousel.play("a");
        let ticket = carousel.wheel(90.0, now).unwrap();
        carousel.play("d");

        carousel.teardown();
        assert!(!carousel.is_locked());
        assert_eq!(carousel.playing_id(), None);
        assert!(!carousel.release_lock(ticket));
        assert_eq!(
            log.borrow().last(),
            Some(&("d".to_string(), PlayerCommand::Pause))
        );

        assert!(carousel.has_frame("d"));
        assert!(carousel.unregister_frame("d").is_some());
        assert!(!carousel.has_frame("d"));
        assert!(carousel.unregister_frame("d").is_none());
    }

    #[test]
    fn replacing_items_pauses_and_resets_page() {
        let log = CommandLog::default();
        let mut carousel = short_form(ViewportClass::Compact, &log);
        carousel.go_to(4);
        carousel.play("e");

        assert!(carousel.set_items(items(&["a", "b"])));
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(carousel.page_count(), 2);
        assert_eq!(carousel.playing_id(), None);
        assert_eq!(
            log.borrow().last(),
            Some(&("e".to_string(), PlayerCommand::Pause))
        );

        assert!(!carousel.set_items(items(&[])));
        assert_eq!(carousel.page_count(), 0);
        assert!(!carousel.show_navigation());
        assert!(!carousel.play("a"));
    }

    #[test]
    fn single_page_hides_navigation() {
        let mut carousel: Carousel<RecordingFrame> = Carousel::new(
            items(&["only"]),
            ChunkPolicy::SINGLE,
            CardLayout::Feature,
            ViewportClass::Wide,
            GestureSettings::default(),
        );
        assert!(!carousel.show_navigation());
        assert!(!carousel.next());
        assert!(!carousel.has_prev());
    }
}
