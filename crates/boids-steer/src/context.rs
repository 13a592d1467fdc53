//! Read-only flock state passed to every steering callback.

use boids_core::Vec2;

/// A read-only snapshot of the flock at the start of a frame.
///
/// Built once per frame by boids-sim and shared immutably by every agent's
/// force computation.  The borrows live for the duration of the force pass;
/// the integrator only gains mutable access to the arrays after the pass has
/// produced every acceleration.
#[derive(Clone, Copy)]
pub struct FlockContext<'a> {
    /// Agent positions, indexed by agent.
    pub positions: &'a [Vec2],

    /// Agent velocities, indexed by agent.  Same length as `positions`.
    pub velocities: &'a [Vec2],

    /// The shared goal point for this frame.
    pub goal: Vec2,
}

impl<'a> FlockContext<'a> {
    #[inline]
    pub fn new(positions: &'a [Vec2], velocities: &'a [Vec2], goal: Vec2) -> Self {
        debug_assert_eq!(positions.len(), velocities.len());
        Self { positions, velocities, goal }
    }

    /// Number of agents in the snapshot.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
