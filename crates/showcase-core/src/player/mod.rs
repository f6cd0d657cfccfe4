//! Embedded player proxy.
//!
//! Each item owns one externally rendered player frame. The proxy sends
//! start/pause commands to those frames over a one-way channel and keeps
//! track of which single item is logically playing. Delivery is best
//! effort: there is no acknowledgement, no retry and no error path.

mod channel;
#[cfg(target_arch = "wasm32")]
mod web;

pub use channel::ChannelFrame;
#[cfg(target_arch = "wasm32")]
pub use web::IframeFrame;

use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Origin passed along with every command. The player is a fixed,
/// trusted third-party embed, so no origin pinning happens.
pub const TARGET_ORIGIN: &str = "*";

/// One-way message sink attached to an embedded player.
pub trait FrameHandle {
    fn post_message(&self, payload: &str);
}

impl<F: FrameHandle + ?Sized> FrameHandle for Box<F> {
    fn post_message(&self, payload: &str) {
        (**self).post_message(payload);
    }
}

impl<F: FrameHandle + ?Sized> FrameHandle for std::rc::Rc<F> {
    fn post_message(&self, payload: &str) {
        (**self).post_message(payload);
    }
}

/// Anything that must be silenced before the visible page changes.
pub trait Playback {
    fn pause_current(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Play,
    Pause,
}

#[derive(Deserialize)]
struct CommandEnvelope {
    event: String,
    func: String,
}

impl PlayerCommand {
    pub fn func(self) -> &'static str {
        match self {
            PlayerCommand::Play => "playVideo",
            PlayerCommand::Pause => "pauseVideo",
        }
    }

    /// JSON envelope understood by the embedded player API.
    pub fn envelope(self) -> String {
        serde_json::json!({
            "event": "command",
            "func": self.func(),
            "args": [],
        })
        .to_string()
    }

    /// Decode an envelope on the receiving side. Unknown payloads are ignored.
    pub fn parse(payload: &str) -> Option<PlayerCommand> {
        let envelope: CommandEnvelope = serde_json::from_str(payload).ok()?;
        if envelope.event != "command" {
            return None;
        }
        match envelope.func.as_str() {
            "playVideo" => Some(PlayerCommand::Play),
            "pauseVideo" => Some(PlayerCommand::Pause),
            _ => None,
        }
    }
}

pub struct PlayerProxy<F> {
    frames: HashMap<String, F>,
    playing_id: Option<String>,
}

impl<F> Default for PlayerProxy<F> {
    fn default() -> Self {
        Self {
            frames: HashMap::new(),
            playing_id: None,
        }
    }
}

impl<F: FrameHandle> PlayerProxy<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or replace) the frame for `id`. Returns the replaced handle.
    pub fn register_frame(&mut self, id: impl Into<String>, handle: F) -> Option<F> {
        self.frames.insert(id.into(), handle)
    }

    pub fn unregister_frame(&mut self, id: &str) -> Option<F> {
        self.frames.remove(id)
    }

    pub fn has_frame(&self, id: &str) -> bool {
        self.frames.contains_key(id)
    }

    pub fn playing_id(&self) -> Option<&str> {
        self.playing_id.as_deref()
    }

    pub fn is_playing(&self, id: &str) -> bool {
        self.playing_id.as_deref() == Some(id)
    }

    pub fn play(&mut self, id: &str) {
        if let Some(previous) = self.playing_id.clone() {
            if previous != id {
                self.pause(&previous);
            }
        }
        let delivered = self.send(id, PlayerCommand::Play);
        info!(id, delivered, "Play requested");
        self.playing_id = Some(id.to_string());
    }

    pub fn pause(&mut self, id: &str) {
        let delivered = self.send(id, PlayerCommand::Pause);
        debug!(id, delivered, "Pause requested");
        if self.playing_id.as_deref() == Some(id) {
            self.playing_id = None;
        }
    }

    fn send(&self, id: &str, command: PlayerCommand) -> bool {
        match self.frames.get(id) {
            Some(frame) => {
                frame.post_message(&command.envelope());
                true
            }
            None => false,
        }
    }
}

impl<F: FrameHandle> Playback for PlayerProxy<F> {
    fn pause_current(&mut self) {
        if let Some(id) = self.playing_id.clone() {
            self.pause(&id);
        }
    }
}
