use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::covers::fetch_cover_async;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::touch;
use iced::window;
use std::time::Duration;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScheduleUnlock(ticket) => {
                let mount = self.section.mount_id;
                let (task, handle) = Task::perform(tokio::time::sleep(ticket.cooldown()), move |_| {
                    Message::GestureUnlocked { mount, ticket }
                })
                .abortable();
                // Replacing the handle aborts any timer left from an older lock.
                self.section.unlock_task = Some(handle.abort_on_drop());
                task
            }
            Effect::ScheduleViewportSettle(ticket) => {
                let debounce = Duration::from_millis(self.config.resize_debounce_ms);
                let (task, handle) = Task::perform(tokio::time::sleep(debounce), move |_| {
                    Message::ViewportSettled(ticket)
                })
                .abortable();
                self.resize_task = Some(handle.abort_on_drop());
                task
            }
            Effect::LoadCover { url } => {
                debug!(%url, "Dispatching cover load task");
                Task::perform(fetch_cover_async(url.clone()), move |cover| {
                    Message::CoverLoaded { url: url.clone(), cover }
                })
            }
            Effect::QuitSafely => {
                info!("Quitting showcase viewer");
                self.resize_task = None;
                self.section.unmount();
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized {
                width: size.width,
                height: size.height,
            })
        }
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => Some(Message::WheelScrolled(delta)),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => Some(Message::TouchStarted {
            x: position.x,
            y: position.y,
        }),
        Event::Touch(touch::Event::FingerLifted { position, .. }) => Some(Message::TouchEnded {
            x: position.x,
            y: position.y,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
