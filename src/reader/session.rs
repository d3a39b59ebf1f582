use crate::catalog::Volume;
use crate::storage::{BookmarkStore, KeyValueStorage};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;

/// How a page image is scaled to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    #[default]
    Contain,
    Width,
    Height,
}

/// Reading state for one open volume. Dropping (or `close`-ing) a session
/// discards everything but the page index, which navigation already flushed
/// to the bookmark store; the closed state is simply the absence of a
/// session value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderSession {
    volume_id: String,
    page_count: usize,
    page_index: usize,
    zoom_level: f32,
    fit_mode: FitMode,
}

impl ReaderSession {
    /// Opens a volume at its bookmarked page, or page 0 without one. A
    /// bookmark pointing past the end of a re-synced, shorter volume is
    /// clamped into range.
    pub fn open<S>(volume: &Volume, bookmarks: &BookmarkStore<S>) -> ReaderSession
    where
        S: KeyValueStorage,
    {
        let page_index = bookmarks
            .get(&volume.id)
            .map(|bookmark| bookmark.page_index.min(volume.pages.len().saturating_sub(1)))
            .unwrap_or(0);

        ReaderSession {
            volume_id: volume.id.clone(),
            page_count: volume.pages.len(),
            page_index,
            zoom_level: 1.0,
            fit_mode: FitMode::default(),
        }
    }

    pub fn volume_id(&self) -> &str {
        &self.volume_id
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn zoom_level(&self) -> f32 {
        self.zoom_level
    }

    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    pub fn next<S>(&mut self, bookmarks: &mut BookmarkStore<S>)
    where
        S: KeyValueStorage,
    {
        if self.page_index + 1 < self.page_count {
            self.commit(self.page_index + 1, bookmarks);
        }
    }

    pub fn prev<S>(&mut self, bookmarks: &mut BookmarkStore<S>)
    where
        S: KeyValueStorage,
    {
        if self.page_index > 0 {
            self.commit(self.page_index - 1, bookmarks);
        }
    }

    /// Direct jump, e.g. from a scrub control. Clamped like `next`/`prev`;
    /// jumping to the current page writes nothing.
    pub fn set_page<S>(&mut self, index: usize, bookmarks: &mut BookmarkStore<S>)
    where
        S: KeyValueStorage,
    {
        let clamped = index.min(self.page_count.saturating_sub(1));
        if clamped != self.page_index {
            self.commit(clamped, bookmarks);
        }
    }

    // Every successful index change lands in the bookmark store before the
    // next input is accepted, so a page turn is never lost on reload.
    fn commit<S>(&mut self, index: usize, bookmarks: &mut BookmarkStore<S>)
    where
        S: KeyValueStorage,
    {
        self.page_index = index;
        bookmarks.save(&self.volume_id, index);
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom_level = (self.zoom_level + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Ends the session. The volume's bookmark stays put for the next open.
    pub fn close(self) {}
}
