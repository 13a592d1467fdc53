//! Range-limited, forward-biased field of view.

use boids_core::{FlockParams, Vec2};

/// Does an agent moving with `velocity` see a neighbour displaced by `delta`?
///
/// `delta` is `position[j] - position[i]`.  The neighbour is seen iff it is
/// within `params.neighbour_radius` (inclusive) **and** the angle between the
/// observer's velocity and `delta` is strictly less than
/// `params.visible_angle`.  Neighbours inside the blind cone behind the agent
/// are ignored however close they are.
///
/// A zero `delta` or zero `velocity` has an undefined angle, taken as `0`, so
/// coincident agents and stationary observers see within range in every
/// direction.
#[inline]
pub fn sees(delta: Vec2, velocity: Vec2, params: &FlockParams) -> bool {
    delta.magnitude() <= params.neighbour_radius
        && velocity.angle_between(delta) < params.visible_angle
}
