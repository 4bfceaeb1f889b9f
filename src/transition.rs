//! Interpolated state transitions for the alert overlay.

use std::time::{Duration, Instant};

/// An eased interpolation of a value between 0.0 and 1.0.
///
/// Retargeting mid-flight starts the new interpolation from wherever the old
/// one currently is, so the latest target always wins and nothing is queued.
#[derive(Debug, Clone)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    /// A transition already at rest on `value`.
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started_at: Instant::now(),
            duration: Duration::ZERO,
        }
    }

    /// Value the transition is heading towards.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Interpolated value at `now`.
    pub fn progress_at(&self, now: Instant) -> f32 {
        let t = self.fraction_at(now);
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    /// Interpolated value right now.
    pub fn progress(&self) -> f32 {
        self.progress_at(Instant::now())
    }

    /// Whether the value is still moving at `now`.
    pub fn is_running_at(&self, now: Instant) -> bool {
        self.from != self.to && self.fraction_at(now) < 1.0
    }

    /// Restart towards `to`, beginning from the value at `now`.
    pub fn retarget(&mut self, to: f32, duration: Duration, now: Instant) {
        self.from = self.progress_at(now);
        self.to = to.clamp(0.0, 1.0);
        self.started_at = now;
        self.duration = duration;
    }

    fn fraction_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::settled(0.0)
    }
}

/// Smoothstep easing.
fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
