//! Dirty-rectangle bookkeeping for partial screen updates

use crate::sim::Rect;

/// Screen regions changed since the last present
#[derive(Debug, Clone, Default)]
pub struct DirtyRegions {
    regions: Vec<Rect>,
    /// Set when the whole screen must be presented this frame
    full: bool,
}

impl DirtyRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a changed region; empty rects are dropped
    pub fn push(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.regions.push(rect);
        }
    }

    /// Replace everything recorded so far with the whole screen
    pub fn mark_full(&mut self, screen: Rect) {
        self.regions.clear();
        self.regions.push(screen);
        self.full = true;
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn regions(&self) -> &[Rect] {
        &self.regions
    }

    pub fn clear(&mut self) {
        self.regions.clear();
        self.full = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_skips_empty() {
        let mut dirty = DirtyRegions::new();
        dirty.push(Rect::new(0, 0, 0, 10));
        dirty.push(Rect::new(1, 1, 4, 4));
        assert_eq!(dirty.len(), 1);
    }

    #[test]
    fn test_mark_full_replaces_list() {
        let screen = Rect::from_size(640, 480);
        let mut dirty = DirtyRegions::new();
        dirty.push(Rect::new(1, 1, 4, 4));
        dirty.push(Rect::new(9, 9, 4, 4));
        dirty.mark_full(screen);
        assert!(dirty.is_full());
        assert_eq!(dirty.regions(), &[screen]);

        // Draws after the full mark still accumulate
        dirty.push(Rect::new(2, 2, 2, 2));
        assert_eq!(dirty.len(), 2);

        dirty.clear();
        assert!(dirty.is_empty());
        assert!(!dirty.is_full());
    }
}
