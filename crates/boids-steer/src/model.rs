//! The `SteeringModel` trait and the classic boids implementation.

use boids_core::{FlockParams, SteeringWeights, Vec2};

use crate::{FlockContext, SteeringForces, goal_seeking, repel_vector, sees};

/// Pluggable per-agent steering.
///
/// Implementations compute one agent's force breakdown from a read-only
/// [`FlockContext`].  They must not depend on the order in which agents are
/// visited: the force pass may visit agents in any order, or in parallel.
///
/// # Thread safety
///
/// With the `parallel` feature the force pass runs on Rayon's thread pool, so
/// implementations must be `Send + Sync`.
pub trait SteeringModel: Send + Sync + 'static {
    /// Force breakdown for `agent` given the frame snapshot `ctx`.
    fn forces(&self, agent: usize, ctx: &FlockContext<'_>) -> SteeringForces;

    /// Neighbour radius, exposed so renderers can draw the tracked agent's
    /// field of view.
    fn neighbour_radius(&self) -> f64;
}

/// Separation, alignment, cohesion, and goal-seeking over a forward cone.
#[derive(Clone, Debug, Default)]
pub struct BoidSteering {
    pub params:  FlockParams,
    pub weights: SteeringWeights,
}

impl BoidSteering {
    pub fn new(params: FlockParams, weights: SteeringWeights) -> Self {
        Self { params, weights }
    }
}

impl SteeringModel for BoidSteering {
    fn forces(&self, agent: usize, ctx: &FlockContext<'_>) -> SteeringForces {
        let here     = ctx.positions[agent];
        let velocity = ctx.velocities[agent];
        let w        = &self.weights;

        let mut repel     = Vec2::ZERO;
        let mut headings  = Vec::new();
        let mut centroids = Vec::new();

        for (j, (&there, &their_velocity)) in
            ctx.positions.iter().zip(ctx.velocities).enumerate()
        {
            if j == agent {
                continue;
            }
            let delta = there - here;
            if sees(delta, velocity, &self.params) {
                repel = repel + repel_vector(delta, w.repel_strength) * w.repel_scale;
                headings.push(their_velocity);
                centroids.push(delta);
            }
        }

        SteeringForces {
            repel,
            heading:  Vec2::mean(&headings) * w.alignment,
            centroid: Vec2::mean(&centroids) * w.cohesion,
            goal:     goal_seeking(here, ctx.goal, self.params.goal_limit) * w.goal,
        }
    }

    fn neighbour_radius(&self) -> f64 {
        self.params.neighbour_radius
    }
}

/// Compute every agent's force breakdown from one snapshot.
///
/// `out` is cleared and refilled with `ctx.len()` entries, indexed by agent.
/// With the `parallel` Cargo feature the agents are processed on Rayon's
/// thread pool; each entry depends only on `ctx`, so the result is identical.
pub fn compute_forces<S: SteeringModel>(
    model: &S,
    ctx:   &FlockContext<'_>,
    out:   &mut Vec<SteeringForces>,
) {
    out.clear();

    #[cfg(not(feature = "parallel"))]
    {
        out.extend((0..ctx.len()).map(|i| model.forces(i, ctx)));
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..ctx.len())
            .into_par_iter()
            .map(|i| model.forces(i, ctx))
            .collect_into_vec(out);
    }
}
