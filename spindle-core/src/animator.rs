//! Simple time-based tween animator for snapping to a target offset

use std::time::{Duration, Instant};

use spindle_model::Easing;

use crate::constants::snap;

#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Default for SnapAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration: Duration::from_millis(snap::ITEM_DURATION_MS),
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

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn start(
        &mut self,
        current: f32,
        target: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Some(now);
        self.duration = duration;
        self.easing = easing;
    }

    /// Returns Some(next_offset) when animating, or None when finished/inactive.
    ///
    /// The sample that completes the tween is exactly `target`.
    pub fn sample_at(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started_at = self.started_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * eased)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_ends_exactly_on_target() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start(0.0, 100.0, Duration::from_millis(200), Easing::Linear, t0);

        let mid = animator
            .sample_at(t0 + Duration::from_millis(100))
            .expect("active");
        assert!((mid - 50.0).abs() < 1e-3);
        assert!(animator.is_active());

        assert_eq!(
            animator.sample_at(t0 + Duration::from_millis(250)),
            Some(100.0)
        );
        assert!(!animator.is_active());
        assert_eq!(animator.sample_at(t0 + Duration::from_millis(300)), None);
    }

    #[test]
    fn zero_duration_completes_on_first_sample() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start(10.0, -40.0, Duration::ZERO, Easing::EaseOut, t0);
        assert_eq!(animator.sample_at(t0), Some(-40.0));
        assert!(!animator.is_active());
    }

    #[test]
    fn cancel_stops_sampling() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start(0.0, 10.0, Duration::from_millis(100), Easing::EaseIn, t0);
        animator.cancel();
        assert!(!animator.is_active());
        assert_eq!(animator.sample_at(t0 + Duration::from_millis(10)), None);
    }

    #[test]
    fn ease_out_moves_faster_early() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start(0.0, 100.0, Duration::from_millis(100), Easing::EaseOut, t0);
        let early = animator
            .sample_at(t0 + Duration::from_millis(25))
            .expect("active");
        assert!(early > 25.0);
    }
}
