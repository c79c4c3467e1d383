//! Eased scroll animation state

use std::time::{Duration, Instant};

/// An in-flight scroll from one offset to another, eased over a fixed
/// duration (cubic ease-out, matching the page's smooth scrolling feel)
#[derive(Debug)]
pub struct ScrollAnimation {
    start_time: Instant,
    from: u16,
    to: u16,
}

impl ScrollAnimation {
    /// Duration of a scroll-to-section animation
    const DURATION: Duration = Duration::from_millis(400);

    pub fn new(from: u16, to: u16, now: Instant) -> Self {
        Self {
            start_time: now,
            from,
            to,
        }
    }

    /// Offset at `now`, interpolated with cubic ease-out
    pub fn offset_at(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed >= Self::DURATION {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        let from = f32::from(self.from);
        let to = f32::from(self.to);
        (from + (to - from) * eased).round() as u16
    }

    /// True once the animation has run its full duration
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start_time) >= Self::DURATION
    }
}
