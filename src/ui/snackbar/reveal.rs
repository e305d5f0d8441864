// SPDX-License-Identifier: MPL-2.0
//! Slide-in animation state.
//!
//! The overlay grows linearly from zero height to its natural height over a
//! fixed duration. Progress is advanced by frame ticks delivered through the
//! controller's subscription.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    started_at: Instant,
    duration: Duration,
    progress: f32,
}

impl Reveal {
    /// Starts a reveal at `now`. A zero duration is shown fully at once.
    #[must_use]
    pub fn start(now: Instant, duration: Duration) -> Self {
        let progress = if duration.is_zero() { 1.0 } else { 0.0 };
        Self {
            started_at: now,
            duration,
            progress,
        }
    }

    /// Updates progress for a frame observed at `now`.
    pub fn advance(&mut self, now: Instant) {
        if self.duration.is_zero() {
            self.progress = 1.0;
            return;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let ratio = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.progress = ratio.clamp(0.0, 1.0);
    }

    /// Fraction of the natural height currently shown, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.progress < 1.0
    }
}
