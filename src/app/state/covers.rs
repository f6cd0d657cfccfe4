use crate::covers::CoverImage;
use iced::widget::image::Handle;
use std::collections::HashMap;
use tracing::debug;

pub(in crate::app) enum CoverSlot {
    Loading,
    Ready(Handle),
    Failed,
}

/// Decoded cover images keyed by URL. Each URL is requested at most once.
#[derive(Default)]
pub(in crate::app) struct CoverState {
    slots: HashMap<String, CoverSlot>,
}

impl CoverState {
    /// Mark `url` as in flight. Returns `false` when it was already seen.
    pub(in crate::app) fn request(&mut self, url: &str) -> bool {
        if self.slots.contains_key(url) {
            return false;
        }
        self.slots.insert(url.to_string(), CoverSlot::Loading);
        true
    }

    pub(in crate::app) fn resolve(&mut self, url: String, cover: Option<CoverImage>) {
        let slot = match cover {
            Some(cover) => {
                debug!(%url, width = cover.width, height = cover.height, "Cover ready");
                CoverSlot::Ready(Handle::from_rgba(cover.width, cover.height, cover.rgba))
            }
            None => CoverSlot::Failed,
        };
        self.slots.insert(url, slot);
    }

    pub(in crate::app) fn handle(&self, url: &str) -> Option<&Handle> {
        match self.slots.get(url) {
            Some(CoverSlot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    pub(in crate::app) fn is_loading(&self, url: &str) -> bool {
        matches!(self.slots.get(url), Some(CoverSlot::Loading))
    }
}
