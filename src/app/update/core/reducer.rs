use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use std::time::Instant;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextPage => self.handle_next_page(&mut effects),
            Message::PreviousPage => self.handle_previous_page(&mut effects),
            Message::GoToPage(index) => self.handle_go_to_page(index, &mut effects),
            Message::PlayItem(id) => self.handle_play_item(&id),
            Message::PausePlayback => self.handle_pause_playback(),
            Message::ToggleSection => {
                self.handle_show_section(self.section.kind.other(), &mut effects);
            }
            Message::ShowSection(kind) => self.handle_show_section(kind, &mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::ViewportSettled(ticket) => {
                self.handle_viewport_settled(ticket, &mut effects);
            }
            Message::WheelScrolled(delta) => self.handle_wheel_scrolled(delta, &mut effects),
            Message::TouchStarted { x, y } => self.handle_touch_started(x, y),
            Message::TouchEnded { x, y } => self.handle_touch_ended(x, y, &mut effects),
            Message::GestureUnlocked { mount, ticket } => {
                self.handle_gesture_unlocked(mount, ticket);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::CoverLoaded { url, cover } => self.covers.resolve(url, cover),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
            Message::Tick(now) => self.handle_tick(now),
        }

        self.section.sync_embeds();
        effects
    }

    fn handle_tick(&mut self, now: Instant) {
        if self.section.carousel.expire_locks(now) {
            tracing::debug!("Gesture lock expired on tick");
        }
        self.section.advance_slide(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::frame::EmbedStatus;
    use crate::app::state::PAGE_TRANSITION;
    use crate::config::{AppConfig, SectionKind};
    use iced::keyboard::{Key, Modifiers, key};
    use iced::mouse::ScrollDelta;
    use showcase_core::{Catalog, LockTicket, parse_catalog};

    fn catalog() -> Catalog {
        let mut doc = String::new();
        for n in 1..=3 {
            doc.push_str(&format!(
                "[[videos]]\nid = \"v{n}\"\ntitle = \"Video {n}\"\nurl = \"https://youtu.be/vvvvvvvvvv{n}\"\n\n"
            ));
        }
        for n in 1..=5 {
            doc.push_str(&format!(
                "[[shorts]]\nid = \"s{n}\"\ntitle = \"Short {n}\"\nurl = \"https://youtu.be/ssssssssss{n}\"\n\n"
            ));
        }
        parse_catalog(&doc).unwrap()
    }

    fn app_with(configure: impl FnOnce(&mut AppConfig)) -> App {
        let mut config = AppConfig {
            load_covers: false,
            ..AppConfig::default()
        };
        configure(&mut config);
        App::new(catalog(), config)
    }

    fn scroll_down() -> Message {
        Message::WheelScrolled(ScrollDelta::Pixels { x: 0.0, y: -80.0 })
    }

    fn unlock_ticket(effects: &[Effect]) -> Option<LockTicket> {
        effects.iter().find_map(|effect| match effect {
            Effect::ScheduleUnlock(ticket) => Some(*ticket),
            _ => None,
        })
    }

    #[test]
    fn wheel_burst_moves_one_page_until_unlocked() {
        let mut app = app_with(|_| {});
        let effects = app.reduce(scroll_down());
        let ticket = unlock_ticket(&effects).expect("lock scheduled");
        assert_eq!(app.section.carousel.current_page(), 1);

        assert!(unlock_ticket(&app.reduce(scroll_down())).is_none());
        assert_eq!(app.section.carousel.current_page(), 1);

        let mount = app.section.mount_id;
        app.reduce(Message::GestureUnlocked { mount, ticket });
        app.reduce(scroll_down());
        assert_eq!(app.section.carousel.current_page(), 2);
    }

    #[test]
    fn unlock_from_previous_mount_is_ignored() {
        let mut app = app_with(|_| {});
        let ticket = unlock_ticket(&app.reduce(scroll_down())).unwrap();
        let stale_mount = app.section.mount_id + 1;
        app.reduce(Message::GestureUnlocked {
            mount: stale_mount,
            ticket,
        });
        assert!(app.section.carousel.is_locked());
    }

    #[test]
    fn resize_is_debounced_before_rechunking() {
        let mut app = app_with(|config| config.start_section = SectionKind::Shorts);
        app.reduce(Message::WindowResized {
            width: 1200.0,
            height: 800.0,
        });
        assert_eq!(app.section.carousel.page_count(), 2);

        let effects = app.reduce(Message::WindowResized {
            width: 500.0,
            height: 800.0,
        });
        let ticket = effects
            .iter()
            .find_map(|effect| match effect {
                Effect::ScheduleViewportSettle(ticket) => Some(*ticket),
                _ => None,
            })
            .expect("settle scheduled");
        assert_eq!(app.section.carousel.page_count(), 2);

        app.reduce(Message::ViewportSettled(ticket));
        assert_eq!(app.section.carousel.page_count(), 5);
        assert_eq!(app.section.carousel.current_page(), 0);
    }

    #[test]
    fn first_window_size_skips_debounce() {
        let mut app = app_with(|config| {
            config.start_section = SectionKind::Shorts;
            config.window_width = 1200.0;
        });
        assert!(!app.viewport.is_compact());

        let effects = app.reduce(Message::WindowResized {
            width: 400.0,
            height: 700.0,
        });
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::ScheduleViewportSettle(_)))
        );
        assert!(app.viewport.is_compact());
        assert_eq!(app.section.carousel.page_count(), 5);
    }

    #[test]
    fn ticks_only_run_while_sliding() {
        let mut app = app_with(|_| {});
        assert!(!app.animating());

        let ticket = unlock_ticket(&app.reduce(scroll_down())).expect("lock scheduled");
        assert!(app.animating());
        app.reduce(Message::Tick(Instant::now() + PAGE_TRANSITION));
        assert!(!app.animating());
        assert!(app.section.carousel.is_locked());

        let mount = app.section.mount_id;
        app.reduce(Message::GestureUnlocked { mount, ticket });
        app.reduce(Message::GoToPage(2));
        app.reduce(Message::Tick(Instant::now() + PAGE_TRANSITION));

        // At the last page a wheel still locks but nothing slides in.
        assert!(unlock_ticket(&app.reduce(scroll_down())).is_some());
        assert!(app.section.carousel.is_locked());
        assert!(!app.animating());
    }

    #[test]
    fn zero_debounce_applies_resize_immediately() {
        let mut app = app_with(|config| {
            config.start_section = SectionKind::Shorts;
            config.resize_debounce_ms = 0;
        });
        app.reduce(Message::WindowResized {
            width: 400.0,
            height: 700.0,
        });
        assert!(app.viewport.is_compact());
        assert_eq!(app.section.carousel.page_count(), 5);
    }

    #[test]
    fn navigation_pauses_the_playing_frame() {
        let mut app = app_with(|_| {});
        app.reduce(Message::PlayItem("v1".to_string()));
        assert_eq!(app.section.embeds["v1"].status(), EmbedStatus::Playing);

        app.reduce(Message::NextPage);
        assert_eq!(app.section.carousel.playing_id(), None);
        assert_eq!(app.section.embeds["v1"].status(), EmbedStatus::Paused);
    }

    #[test]
    fn toggling_section_remounts() {
        let mut app = app_with(|_| {});
        app.reduce(Message::PlayItem("v1".to_string()));
        let before = app.section.mount_id;

        app.reduce(Message::ToggleSection);
        assert_eq!(app.section.kind, SectionKind::Shorts);
        assert!(app.section.mount_id > before);
        assert_eq!(app.section.carousel.playing_id(), None);

        app.reduce(Message::ShowSection(SectionKind::Shorts));
        assert_eq!(app.section.kind, SectionKind::Shorts);
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut app = app_with(|_| {});
        app.reduce(Message::KeyPressed {
            key: Key::Named(key::Named::ArrowDown),
            modifiers: Modifiers::default(),
        });
        assert_eq!(app.section.carousel.current_page(), 1);

        app.reduce(Message::KeyPressed {
            key: Key::Named(key::Named::PageUp),
            modifiers: Modifiers::default(),
        });
        assert_eq!(app.section.carousel.current_page(), 0);
    }

    #[test]
    fn touch_swipe_uses_viewport_axis() {
        let mut app = app_with(|_| {});
        app.reduce(Message::TouchStarted { x: 300.0, y: 0.0 });
        app.reduce(Message::TouchEnded { x: 200.0, y: 0.0 });
        assert_eq!(app.section.carousel.current_page(), 0);

        app.reduce(Message::TouchStarted { x: 0.0, y: 300.0 });
        let effects = app.reduce(Message::TouchEnded { x: 0.0, y: 200.0 });
        assert!(unlock_ticket(&effects).is_some());
        assert_eq!(app.section.carousel.current_page(), 1);
    }

    #[test]
    fn covers_requested_for_visible_page_when_enabled() {
        let mut app = app_with(|config| config.load_covers = true);
        let effects = app.cover_effects();
        assert_eq!(effects.len(), 1);
        assert!(app.cover_effects().is_empty());
    }
}
