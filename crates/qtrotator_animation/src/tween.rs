//! Time-sampled interpolation between two values

use qtrotator_core::Millis;

use crate::easing::Easing;
use crate::transition::Transition;

/// A running interpolation from `from` to `to`, anchored at a start time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start_ms: Millis,
    duration_ms: Millis,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: Millis, duration_ms: Millis, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Tween driven by a transition descriptor
    pub fn from_transition(transition: &Transition, from: f32, to: f32, start_ms: Millis) -> Self {
        Self::new(from, to, start_ms, transition.duration_ms, transition.easing)
    }

    pub fn start_ms(&self) -> Millis {
        self.start_ms
    }

    pub fn end_ms(&self) -> Millis {
        self.start_ms.saturating_add(self.duration_ms)
    }

    /// Linear time progress in [0, 1], before easing
    pub fn progress(&self, now: Millis) -> f32 {
        if now <= self.start_ms {
            return 0.0;
        }
        if self.duration_ms == 0 || now >= self.end_ms() {
            return 1.0;
        }
        (now - self.start_ms) as f32 / self.duration_ms as f32
    }

    /// Eased value at `now`
    pub fn value_at(&self, now: Millis) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }
}
