//! "Load more" pagination window.

use serde::{Deserialize, Serialize};

/// A growing prefix of a list: the first `requested` items, revealed
/// `step` at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadMoreWindow {
    requested: usize,
    step: usize,
    total: usize,
}

impl LoadMoreWindow {
    /// Start showing `step` items out of `total`.
    pub fn new(step: usize, total: usize) -> Self {
        let step = step.max(1);
        Self {
            requested: step,
            step,
            total,
        }
    }

    /// Number of items to render.
    pub fn visible_count(&self) -> usize {
        self.requested.min(self.total)
    }

    /// Whether the "load more" control should be shown.
    pub fn has_more(&self) -> bool {
        self.requested < self.total
    }

    /// Reveal another `step` items. Returns `false` once exhausted.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.requested += self.step;
        true
    }

    /// The visible prefix of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.requested.min(items.len())]
    }
}
