use crate::config::SectionKind;
use crate::covers::CoverImage;
use iced::keyboard::{Key, Modifiers};
use iced::mouse::ScrollDelta;
use showcase_core::{LockTicket, SettleTicket};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NextPage,
    PreviousPage,
    GoToPage(usize),
    PlayItem(String),
    PausePlayback,
    ToggleSection,
    ShowSection(SectionKind),
    WindowResized {
        width: f32,
        height: f32,
    },
    ViewportSettled(SettleTicket),
    WheelScrolled(ScrollDelta),
    TouchStarted {
        x: f32,
        y: f32,
    },
    TouchEnded {
        x: f32,
        y: f32,
    },
    /// Cooldown timer for a gesture lock fired. `mount` identifies the
    /// section instance that handed out the ticket.
    GestureUnlocked {
        mount: u64,
        ticket: LockTicket,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    CoverLoaded {
        url: String,
        cover: Option<CoverImage>,
    },
    SafeQuit,
    Tick(Instant),
}
