//! Simple time-based tween animator for snapping to a target offset.

use std::time::{Duration, Instant};

use crate::constants::snap;

/// Easing applied to tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Tweens a scroll offset toward a target over a fixed duration.
///
/// The animator always terminates: once `duration` has elapsed, `tick`
/// reports the target and deactivates. `is_expired` additionally flags an
/// animation that outlived its duration plus a grace period without a
/// finishing tick, so callers can force-complete rather than stay stuck
/// with interaction disabled.
#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Default for SnapAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(snap::DURATION_MS),
            easing: snap::EASING,
        }
    }
}

impl SnapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The offset this animation is heading toward.
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn start(&mut self, current: f32, target: f32, duration_ms: u64, easing: Easing) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Instant::now();
        self.duration = Duration::from_millis(duration_ms);
        self.easing = easing;
    }

    /// Returns `Some(next_offset)` while animating, `None` when inactive.
    /// The final call returns the exact target and deactivates.
    pub fn tick(&mut self) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = Instant::now().saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        Some(self.start + (self.target - self.start) * self.easing.apply(t))
    }

    /// True when the animation has outlived `duration + grace` without
    /// being finished by a tick.
    pub fn is_expired(&self) -> bool {
        self.active
            && Instant::now().saturating_duration_since(self.started_at)
                >= self.duration + Duration::from_millis(snap::EXPIRY_GRACE_MS)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}
