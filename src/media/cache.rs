use iced::widget::image::Handle;
use std::collections::HashMap;

use super::thumbnail::ThumbnailError;

/// Load state of one grid thumbnail
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    /// Requested, not decoded yet: the card shows a placeholder
    Loading,
    Ready(Handle),
    /// Could not be decoded: the card shows the alt text
    Failed,
}

/// In-memory thumbnails, keyed by catalog index.
/// Lives as long as the window; nothing is written to disk.
#[derive(Debug, Default)]
pub struct ThumbnailCache {
    entries: HashMap<usize, ThumbnailState>,
}

impl ThumbnailCache {
    /// Mark every index that was never requested as loading and return them.
    /// Each catalog index is requested at most once.
    pub fn request(&mut self, indices: &[usize]) -> Vec<usize> {
        indices
            .iter()
            .copied()
            .filter(|index| {
                if self.entries.contains_key(index) {
                    false
                } else {
                    self.entries.insert(*index, ThumbnailState::Loading);
                    true
                }
            })
            .collect()
    }

    /// Record a finished load. Both outcomes clear the placeholder.
    pub fn finish(&mut self, index: usize, result: Result<Handle, ThumbnailError>) {
        let state = match result {
            Ok(handle) => ThumbnailState::Ready(handle),
            Err(_) => ThumbnailState::Failed,
        };
        self.entries.insert(index, state);
    }

    pub fn get(&self, index: usize) -> Option<&ThumbnailState> {
        self.entries.get(&index)
    }

    /// Whether the card at `index` still shows its placeholder
    #[cfg(test)]
    pub fn is_loading(&self, index: usize) -> bool {
        matches!(self.get(index), Some(ThumbnailState::Loading))
    }
}
