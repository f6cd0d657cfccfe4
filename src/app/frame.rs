//! Desktop stand-in for an embedded video player.
//!
//! Each item gets one `EmbeddedPlayer` holding the receiving end of the
//! `ChannelFrame` registered with the carousel. It only reflects what it is
//! told: commands are decoded into a status shown on the card and nothing
//! is ever sent back.

use showcase_core::embed::embed_url;
use showcase_core::{ChannelFrame, Item, PlayerCommand};
use std::sync::mpsc::{Receiver, TryRecvError};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::app) enum EmbedStatus {
    Cued,
    Playing,
    Paused,
}

impl EmbedStatus {
    pub(in crate::app) fn label(self) -> &'static str {
        match self {
            EmbedStatus::Cued => "Ready",
            EmbedStatus::Playing => "Playing",
            EmbedStatus::Paused => "Paused",
        }
    }
}

pub(in crate::app) struct EmbeddedPlayer {
    src: String,
    inbox: Receiver<String>,
    status: EmbedStatus,
}

impl EmbeddedPlayer {
    pub(in crate::app) fn mount(item: &Item) -> (Self, ChannelFrame) {
        let (frame, inbox) = ChannelFrame::pair();
        let player = Self {
            src: embed_url(&item.url),
            inbox,
            status: EmbedStatus::Cued,
        };
        (player, frame)
    }

    pub(in crate::app) fn src(&self) -> &str {
        &self.src
    }

    pub(in crate::app) fn status(&self) -> EmbedStatus {
        self.status
    }

    /// Apply every command received since the last call.
    pub(in crate::app) fn drain(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.inbox.try_recv() {
                Ok(payload) => {
                    match PlayerCommand::parse(&payload) {
                        Some(PlayerCommand::Play) => self.status = EmbedStatus::Playing,
                        Some(PlayerCommand::Pause) => self.status = EmbedStatus::Paused,
                        None => trace!(%payload, "Ignoring unknown frame message"),
                    }
                    applied += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        applied
    }
}
