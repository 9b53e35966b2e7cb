use std::time::{Duration, Instant};

use listnav_core::ScrollConfig;

use super::easing::EasingTypeExt;

#[derive(Debug, Clone, Copy)]
struct Motion {
    started: Instant,
    from: u16,
    to: u16,
}

/// Scroll position that eases toward its target.
///
/// Time is passed in explicitly so frames (and tests) decide what "now" is.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    config: ScrollConfig,
    position: u16,
    motion: Option<Motion>,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            position: 0,
            motion: None,
        }
    }

    pub fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    /// Currently displayed position
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Where the position ends up once the animation finishes
    pub fn target(&self) -> u16 {
        self.motion.map(|m| m.to).unwrap_or(self.position)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.config.animation_duration_ms)
    }

    /// Move without animating, dropping any running motion
    pub fn jump_to(&mut self, top: u16) {
        self.position = top;
        self.motion = None;
    }

    /// Start easing toward `top` from the displayed position.
    ///
    /// A running motion is replaced, so the new one starts wherever the
    /// previous one had got to.
    pub fn animate_to(&mut self, top: u16, now: Instant) {
        if !self.is_smooth() {
            self.jump_to(top);
            return;
        }
        if top == self.position {
            self.motion = None;
            return;
        }
        self.motion = Some(Motion {
            started: now,
            from: self.position,
            to: top,
        });
    }

    /// Advance the running motion to `now` and return the displayed position
    pub fn advance(&mut self, now: Instant) -> u16 {
        let Some(motion) = self.motion else {
            return self.position;
        };
        let t = progress(motion.started, now, self.duration());
        if t >= 1.0 {
            self.position = motion.to;
            self.motion = None;
        } else {
            let eased = self.config.easing.apply(t);
            self.position = lerp_u16(motion.from, motion.to, eased);
        }
        self.position
    }

    /// Clamp position and target after the scrollable range shrank
    pub fn clamp(&mut self, max: u16) {
        self.position = self.position.min(max);
        if let Some(motion) = self.motion.as_mut() {
            motion.to = motion.to.min(max);
            motion.from = motion.from.min(max);
        }
    }
}

fn progress(started: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    value.round().clamp(0.0, f64::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use listnav_core::EasingType;

    fn linear(duration_ms: u64) -> ScrollAnimator {
        ScrollAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            easing: EasingType::Linear,
            animation_fps: 50,
        })
    }

    #[test]
    fn test_jump_when_smooth_disabled() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        animator.animate_to(40, Instant::now());
        assert_eq!(animator.position(), 40);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_linear_motion() {
        let mut animator = linear(100);
        let start = Instant::now();
        animator.animate_to(20, start);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 20);

        assert_eq!(animator.advance(start + Duration::from_millis(50)), 10);
        assert_eq!(animator.advance(start + Duration::from_millis(100)), 20);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_new_request_supersedes_running_one() {
        let mut animator = linear(100);
        let start = Instant::now();
        animator.animate_to(20, start);
        animator.advance(start + Duration::from_millis(50));

        let later = start + Duration::from_millis(50);
        animator.animate_to(0, later);
        assert_eq!(animator.target(), 0);
        assert_eq!(animator.advance(later + Duration::from_millis(50)), 5);
        assert_eq!(animator.advance(later + Duration::from_millis(200)), 0);
    }

    #[test]
    fn test_request_for_current_position_is_idle() {
        let mut animator = linear(100);
        animator.jump_to(7);
        animator.animate_to(7, Instant::now());
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_clamp_shrinks_motion() {
        let mut animator = linear(100);
        let start = Instant::now();
        animator.jump_to(30);
        animator.animate_to(50, start);
        animator.clamp(10);
        assert_eq!(animator.position(), 10);
        assert_eq!(animator.target(), 10);
    }
}
