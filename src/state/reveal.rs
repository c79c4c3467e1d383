//! Scroll-triggered reveal state for content cards
//!
//! A card is revealed the first time its row scrolls into the viewport
//! and stays revealed afterwards, so cards fade in once and never flicker
//! back out.

/// A card must clear the bottom edge by this many rows before it reveals
const BOTTOM_MARGIN: u16 = 1;

#[derive(Debug, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(card_count: usize) -> Self {
        Self {
            revealed: vec![false; card_count],
        }
    }

    /// Mark every card whose row is inside the viewport as revealed.
    /// `card_rows` holds each card's absolute row in page coordinates.
    pub fn update(&mut self, card_rows: &[u16], viewport_top: u16, viewport_height: u16) {
        let viewport_bottom = viewport_top
            .saturating_add(viewport_height)
            .saturating_sub(BOTTOM_MARGIN);
        for (i, &row) in card_rows.iter().enumerate() {
            if i >= self.revealed.len() {
                break;
            }
            if row >= viewport_top && row < viewport_bottom {
                self.revealed[i] = true;
            }
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}
