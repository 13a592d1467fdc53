//! Structure-of-Arrays storage for per-agent kinematic state.

use boids_core::{FlockParams, FlockRng, Vec2};
use boids_steer::FlockContext;

/// Position, velocity, and acceleration for every agent.
///
/// Every `Vec` has exactly `count` elements and the agent index is the index
/// into all of them.  Position and velocity persist across frames;
/// acceleration is overwritten by every force pass.
#[derive(Clone, Debug, PartialEq)]
pub struct FlockStore {
    /// Number of agents.  Equals the length of every SoA `Vec` and never
    /// changes after construction.
    pub count: usize,

    pub position: Vec<Vec2>,

    pub velocity: Vec<Vec2>,

    pub acceleration: Vec<Vec2>,
}

impl FlockStore {
    /// `count` agents at rest at the origin.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position:     vec![Vec2::ZERO; count],
            velocity:     vec![Vec2::ZERO; count],
            acceleration: vec![Vec2::ZERO; count],
        }
    }

    /// `count` agents with positions uniform in `±position_extent` and
    /// velocities drawn in `±velocity_extent` (per axis), then pulled into the
    /// speed band of `params`.
    ///
    /// Each agent draws its velocity, then its position, in index order, so
    /// a given seed always reproduces the same flock.
    pub fn spawn(
        count:           usize,
        rng:             &mut FlockRng,
        position_extent: f64,
        velocity_extent: f64,
        params:          &FlockParams,
    ) -> Self {
        let mut store = Self::new(count);
        for i in 0..count {
            store.velocity[i] = spawn_velocity(rng.vec_in_box(velocity_extent), params);
            store.position[i] = rng.vec_in_box(position_extent);
        }
        store
    }

    /// Read-only snapshot for the force pass.
    #[inline]
    pub fn context(&self, goal: Vec2) -> FlockContext<'_> {
        FlockContext::new(&self.position, &self.velocity, goal)
    }
}

/// Clamp a drawn velocity into the speed band.  A zero draw has no direction,
/// so it starts heading screen-up at the minimum speed.
fn spawn_velocity(draw: Vec2, params: &FlockParams) -> Vec2 {
    if draw == Vec2::ZERO {
        Vec2::UP * params.min_velocity
    } else {
        draw.clamp_magnitude(params.min_velocity, params.max_velocity)
    }
}
