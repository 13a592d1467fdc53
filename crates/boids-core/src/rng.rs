//! Deterministic flock-level RNG wrapper.
//!
//! A single `SmallRng` seeds the initial positions and velocities of every
//! agent in index order, so the same seed and agent count always produce the
//! same starting flock.  Hosts that also randomise the goal should derive a
//! [`FlockRng::child`] rather than share the spawn RNG, so goal draws do not
//! shift the spawn sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct FlockRng(SmallRng);

impl FlockRng {
    pub fn new(seed: u64) -> Self {
        FlockRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a fresh seed from the thread RNG.  Returned so callers can log it
    /// and reproduce the run later.
    pub fn entropy_seed() -> u64 {
        rand::thread_rng().r#gen()
    }

    /// Derive an independent child RNG from this one.
    pub fn child(&mut self, offset: u64) -> FlockRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        FlockRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Uniform value in `[-limit, limit)`.  A zero limit yields `0.0`.
    #[inline]
    pub fn plus_minus(&mut self, limit: f64) -> f64 {
        (self.0.r#gen::<f64>() - 0.5) * limit * 2.0
    }

    /// Vector whose components are independently uniform in `±extent`.
    #[inline]
    pub fn vec_in_box(&mut self, extent: f64) -> Vec2 {
        Vec2::new(self.plus_minus(extent), self.plus_minus(extent))
    }

    /// Vector uniform within the axis-aligned box `±half_x` × `±half_y`.
    #[inline]
    pub fn vec_in_rect(&mut self, half_x: f64, half_y: f64) -> Vec2 {
        Vec2::new(self.plus_minus(half_x), self.plus_minus(half_y))
    }
}
