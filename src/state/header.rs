//! Header visibility state
//!
//! The header compacts once the page is scrolled past a small threshold
//! and hides entirely while the user keeps scrolling down past a deeper
//! one; any upward scroll brings it back.

/// Offset past which the header switches to its compact style
const SCROLLED_THRESHOLD: u16 = 3;

/// Offset past which downward scrolling hides the header
const HIDE_THRESHOLD: u16 = 12;

#[derive(Debug, Default)]
pub struct HeaderState {
    pub is_scrolled: bool,
    pub is_hidden: bool,
    last_offset: u16,
}

impl HeaderState {
    /// Recompute visibility from the current scroll offset
    pub fn update(&mut self, offset: u16) {
        self.is_scrolled = offset > SCROLLED_THRESHOLD;
        self.is_hidden = offset > self.last_offset && offset > HIDE_THRESHOLD;
        self.last_offset = offset;
    }

    /// Reset to the top-of-page state (used on view changes)
    pub fn reset(&mut self) {
        self.is_scrolled = false;
        self.is_hidden = false;
        self.last_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_top_header_is_plain_and_visible() {
        let mut h = HeaderState::default();
        h.update(0);
        assert!(!h.is_scrolled);
        assert!(!h.is_hidden);
    }

    #[test]
    fn test_past_threshold_header_is_compact() {
        let mut h = HeaderState::default();
        h.update(4);
        assert!(h.is_scrolled);
        assert!(!h.is_hidden);
    }

    #[test]
    fn test_scrolling_down_deep_hides_header() {
        let mut h = HeaderState::default();
        h.update(10);
        h.update(15);
        assert!(h.is_hidden);
    }

    #[test]
    fn test_scrolling_up_shows_header_again() {
        let mut h = HeaderState::default();
        h.update(10);
        h.update(15);
        assert!(h.is_hidden);
        h.update(14);
        assert!(!h.is_hidden);
        assert!(h.is_scrolled);
    }

    #[test]
    fn test_shallow_downward_scroll_keeps_header() {
        let mut h = HeaderState::default();
        h.update(2);
        h.update(5);
        assert!(!h.is_hidden);
    }

    #[test]
    fn test_reset_returns_to_top_state() {
        let mut h = HeaderState::default();
        h.update(10);
        h.update(20);
        h.reset();
        assert!(!h.is_scrolled);
        assert!(!h.is_hidden);
        // A fresh deep offset counts as downward movement again
        h.update(15);
        assert!(h.is_hidden);
    }
}
