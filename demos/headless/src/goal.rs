//! Periodic goal randomiser.
//!
//! Picks a fresh goal uniformly inside `±half_width × ±half_height` every
//! `interval` seconds of host time.  The flock itself only consumes the
//! current goal; the policy lives here in the host.

use boids_core::{FlockRng, Vec2};

pub struct GoalSchedule {
    rng:         FlockRng,
    interval:    f64,
    next_at:     f64,
    half_width:  f64,
    half_height: f64,
}

impl GoalSchedule {
    pub fn new(rng: FlockRng, interval: f64, half_width: f64, half_height: f64) -> Self {
        Self { rng, interval, next_at: 0.0, half_width, half_height }
    }

    /// A new goal if `now` has reached the next change point.
    pub fn poll(&mut self, now: f64) -> Option<Vec2> {
        if now < self.next_at {
            return None;
        }
        self.next_at = now + self.interval;
        Some(self.rng.vec_in_rect(self.half_width, self.half_height))
    }
}
