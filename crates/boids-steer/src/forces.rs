//! Individual steering contributions and their per-agent breakdown.

use boids_core::Vec2;

/// The four named steering contributions for one agent in one frame.
///
/// Acceleration is their plain sum (unit mass).  The breakdown is kept
/// separately so a renderer can draw each force for the tracked agent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringForces {
    /// Separation: inverse-distance push away from every visible neighbour.
    pub repel: Vec2,
    /// Alignment: mean velocity of visible neighbours.
    pub heading: Vec2,
    /// Cohesion: mean displacement to visible neighbours.
    pub centroid: Vec2,
    /// Goal-seeking: displacement to the goal, magnitude-capped.
    pub goal: Vec2,
}

impl SteeringForces {
    pub const ZERO: SteeringForces = SteeringForces {
        repel:    Vec2::ZERO,
        heading:  Vec2::ZERO,
        centroid: Vec2::ZERO,
        goal:     Vec2::ZERO,
    };

    /// Total acceleration: `repel + heading + centroid + goal`.
    #[inline]
    pub fn total(&self) -> Vec2 {
        self.repel + self.heading + self.centroid + self.goal
    }
}

/// Repulsion from one neighbour at displacement `delta`.
///
/// Points away from the neighbour with magnitude `strength / |delta|`.
/// Coincident agents (`delta == 0`) contribute nothing.
#[inline]
pub fn repel_vector(delta: Vec2, strength: f64) -> Vec2 {
    let distance = delta.magnitude();
    if distance == 0.0 {
        return Vec2::ZERO;
    }
    delta.unit() * (-strength / distance)
}

/// Pull from `from` toward `goal`, capped at `limit`.
#[inline]
pub fn goal_seeking(from: Vec2, goal: Vec2, limit: f64) -> Vec2 {
    (goal - from).clamp_magnitude(0.0, limit)
}
