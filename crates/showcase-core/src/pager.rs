//! Page partitioning and the current-page cursor.
//!
//! Pages are never stored: they are `chunks` of the shared item list,
//! recomputed from `chunk_size` on demand. Navigating always silences
//! playback first so a hidden page never keeps playing.

use crate::player::Playback;
use std::sync::Arc;
use tracing::{debug, info};

pub struct Pager<T> {
    items: Arc<[T]>,
    chunk_size: usize,
    current_page: usize,
}

impl<T> Pager<T> {
    pub fn new(items: Arc<[T]>, chunk_size: usize) -> Self {
        Self {
            items,
            chunk_size: chunk_size.max(1),
            current_page: 0,
        }
    }

    /// Replace the item list and chunking. Returns `true` when the current
    /// page had to be reset because it no longer exists.
    pub fn set_items(&mut self, items: Arc<[T]>, chunk_size: usize) -> bool {
        self.items = items;
        self.chunk_size = chunk_size.max(1);
        self.reconcile()
    }

    pub fn set_chunk_size(&mut self, chunk_size: usize) -> bool {
        self.chunk_size = chunk_size.max(1);
        self.reconcile()
    }

    // Reset-to-start: an out-of-range page goes back to 0 rather than
    // clamping to the last page.
    fn reconcile(&mut self) -> bool {
        let page_count = self.page_count();
        if self.current_page >= page_count && self.current_page != 0 {
            debug!(
                previous = self.current_page,
                page_count, "Current page out of range after repagination; resetting"
            );
            self.current_page = 0;
            return true;
        }
        false
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.chunk_size)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pages(&self) -> std::slice::Chunks<'_, T> {
        self.items.chunks(self.chunk_size)
    }

    pub fn page(&self, index: usize) -> Option<&[T]> {
        self.pages().nth(index)
    }

    pub fn current(&self) -> Option<&[T]> {
        self.page(self.current_page)
    }

    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.page_count()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }

    pub fn next<P: Playback + ?Sized>(&mut self, playback: &mut P) -> bool {
        if !self.has_next() {
            return false;
        }
        self.move_to(self.current_page + 1, playback);
        true
    }

    pub fn prev<P: Playback + ?Sized>(&mut self, playback: &mut P) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.move_to(self.current_page - 1, playback);
        true
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn go_to<P: Playback + ?Sized>(&mut self, index: usize, playback: &mut P) -> bool {
        if index >= self.page_count() {
            debug!(index, page_count = self.page_count(), "Ignoring out-of-range page");
            return false;
        }
        self.move_to(index, playback);
        true
    }

    fn move_to<P: Playback + ?Sized>(&mut self, index: usize, playback: &mut P) {
        playback.pause_current();
        self.current_page = index;
        info!(
            page = index + 1,
            page_count = self.page_count(),
            "Navigated to page"
        );
    }
}
