//! Per-frame kinematic update.
//!
//! For every agent, in this exact order:
//!
//! ```text
//! v' = clamp(v + a·dt, MIN_VELOCITY, MAX_VELOCITY)
//! x' = x + v'·dt + ½·a·dt²
//! ```
//!
//! The position term deliberately uses the already-clamped `v'` together with
//! the frame's acceleration `a`.  Swapping the order changes the numerical
//! behavior of the flock.

use boids_core::{FlockParams, Vec2};

use crate::FlockStore;

/// Advance velocity then position by `dt` seconds using the accelerations
/// already stored in `store`.
///
/// `dt == 0` is a no-op: neither velocity nor position is touched, even if a
/// velocity currently sits outside the speed band.
pub fn integrate(store: &mut FlockStore, dt: f64, params: &FlockParams) {
    if dt == 0.0 {
        return;
    }
    integrate_velocity(store, dt, params);
    integrate_position(store, dt);
}

/// `v = clamp(v + a·dt)` for every agent.
pub fn integrate_velocity(store: &mut FlockStore, dt: f64, params: &FlockParams) {
    for (v, &a) in store.velocity.iter_mut().zip(&store.acceleration) {
        *v = clamp_speed(*v, *v + a * dt, params.min_velocity, params.max_velocity);
    }
}

/// `x = x + v·dt + ½·a·dt²` for every agent.
pub fn integrate_position(store: &mut FlockStore, dt: f64) {
    let half_dt2 = 0.5 * dt * dt;
    for ((x, &v), &a) in store
        .position
        .iter_mut()
        .zip(&store.velocity)
        .zip(&store.acceleration)
    {
        *x = *x + v * dt + a * half_dt2;
    }
}

/// Clamp `candidate` into the speed band.
///
/// If the candidate velocity is exactly zero it has no direction to stretch
/// to `min`; the agent keeps flying along `previous` at `min` instead.  Only
/// when both are zero does the result stay zero.
#[inline]
fn clamp_speed(previous: Vec2, candidate: Vec2, min: f64, max: f64) -> Vec2 {
    let clamped = candidate.clamp_magnitude(min, max);
    if clamped == Vec2::ZERO && min > 0.0 {
        return previous.unit() * min;
    }
    clamped
}
