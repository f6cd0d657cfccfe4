use super::FrameHandle;
use std::sync::mpsc::{self, Receiver, Sender};

/// Frame backed by an in-process channel.
///
/// The receiving half plays the role of the embedded document. Once it is
/// dropped the frame behaves like an unloaded iframe: sends go nowhere.
#[derive(Debug, Clone)]
pub struct ChannelFrame {
    sender: Sender<String>,
}

impl ChannelFrame {
    pub fn pair() -> (ChannelFrame, Receiver<String>) {
        let (sender, receiver) = mpsc::channel();
        (ChannelFrame { sender }, receiver)
    }
}

impl FrameHandle for ChannelFrame {
    fn post_message(&self, payload: &str) {
        if self.sender.send(payload.to_string()).is_err() {
            tracing::trace!("Embedded frame is gone; command dropped");
        }
    }
}
