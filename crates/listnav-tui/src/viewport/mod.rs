//! The scrollable list container.
//!
//! `ListViewport` receives scroll requests from the navigator, clamps them to
//! the scrollable range like a browser would, and eases toward them frame by
//! frame.

mod animation;
mod easing;

use std::time::Instant;

use listnav_core::{ScrollBehavior, ScrollConfig, ScrollContainer};

pub use animation::ScrollAnimator;
pub use easing::{EasingType, EasingTypeExt};

#[derive(Debug, Clone, Default)]
pub struct ListViewport {
    animator: ScrollAnimator,
    client_height: u16,
    content_height: u16,
}

impl ListViewport {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animator: ScrollAnimator::new(config),
            client_height: 0,
            content_height: 0,
        }
    }

    /// Update the visible and total heights after a relayout
    pub fn resize(&mut self, client_height: u16, content_height: u16) {
        self.client_height = client_height;
        self.content_height = content_height;
        self.animator.clamp(self.max_scroll());
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.client_height)
    }

    /// Offset currently on screen
    pub fn scroll_top(&self) -> u16 {
        self.animator.position()
    }

    /// Offset the viewport is heading to
    pub fn target_top(&self) -> u16 {
        self.animator.target()
    }

    /// Wheel scrolling; moves the view without touching the selection
    pub fn scroll_by(&mut self, delta: i32) {
        let top = i32::from(self.animator.target()) + delta;
        self.scroll_to(top, ScrollBehavior::Instant);
    }

    /// Advance any running animation; returns the offset to draw with
    pub fn tick(&mut self, now: Instant) -> u16 {
        self.animator.advance(now)
    }

    pub fn needs_update(&self) -> bool {
        self.animator.is_animating()
    }

    fn clamp_top(&self, top: i32) -> u16 {
        top.clamp(0, i32::from(self.max_scroll())) as u16
    }
}

impl ScrollContainer for ListViewport {
    fn client_height(&self) -> i32 {
        i32::from(self.client_height)
    }

    fn scroll_to(&mut self, top: i32, behavior: ScrollBehavior) {
        let top = self.clamp_top(top);
        match behavior {
            ScrollBehavior::Smooth => self.animator.animate_to(top, Instant::now()),
            ScrollBehavior::Instant => self.animator.jump_to(top),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn viewport() -> ListViewport {
        let mut viewport = ListViewport::new(ScrollConfig::default());
        viewport.resize(10, 50);
        viewport
    }

    #[test]
    fn test_requests_are_clamped() {
        let mut viewport = viewport();
        viewport.scroll_to(-9, ScrollBehavior::Instant);
        assert_eq!(viewport.scroll_top(), 0);
        viewport.scroll_to(200, ScrollBehavior::Instant);
        assert_eq!(viewport.scroll_top(), 40);
    }

    #[test]
    fn test_smooth_request_animates() {
        let mut viewport = viewport();
        viewport.scroll_to(25, ScrollBehavior::Smooth);
        assert!(viewport.needs_update());
        assert_eq!(viewport.scroll_top(), 0);
        assert_eq!(viewport.target_top(), 25);

        let done = Instant::now() + Duration::from_secs(5);
        assert_eq!(viewport.tick(done), 25);
        assert!(!viewport.needs_update());
    }

    #[test]
    fn test_wheel_scroll() {
        let mut viewport = viewport();
        viewport.scroll_by(3);
        viewport.scroll_by(3);
        assert_eq!(viewport.scroll_top(), 6);
        viewport.scroll_by(-10);
        assert_eq!(viewport.scroll_top(), 0);
    }

    #[test]
    fn test_shrinking_content_clamps() {
        let mut viewport = viewport();
        viewport.scroll_to(40, ScrollBehavior::Instant);
        viewport.resize(10, 12);
        assert_eq!(viewport.scroll_top(), 2);
        assert_eq!(viewport.client_height(), 10);
    }
}
