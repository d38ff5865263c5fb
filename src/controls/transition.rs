// SPDX-License-Identifier: MPL-2.0
//! Scheduled settle animations.
//!
//! Controls never block waiting for an animation: they start a
//! [`Transition`] and apply the follow-up effect when a later `tick`
//! observes completion. This keeps "animate, then commit" sequencing
//! event-driven.

use std::time::{Duration, Instant};

/// A linear position animation with a fixed deadline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Transition {
    /// Schedules a transition starting now.
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Final position of the transition.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Interpolated position at `now`, clamped to the target once settled.
    #[must_use]
    pub fn position(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * progress
    }

    /// Returns true once the deadline has passed.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}
