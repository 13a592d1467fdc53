//! Force breakdown retained for a single tracked agent.

use boids_steer::SteeringForces;

/// The last computed steering breakdown for the tracked agent.
///
/// Overwritten every frame.  Stays at [`SteeringForces::ZERO`] until the
/// first frame, and forever if the tracked index is outside the flock.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Index of the tracked agent.
    pub agent: usize,

    /// Frame number the snapshot was taken on; `0` before the first frame.
    pub frame: u64,

    /// `repel`, `heading`, `centroid`, and `goal` vectors for `agent`.
    pub forces: SteeringForces,
}

impl Diagnostics {
    pub fn new(agent: usize) -> Self {
        Self { agent, frame: 0, forces: SteeringForces::ZERO }
    }

    /// Copy the tracked agent's entry out of this frame's force pass.
    pub(crate) fn capture(&mut self, forces: &[SteeringForces], frame: u64) {
        if let Some(&f) = forces.get(self.agent) {
            self.forces = f;
            self.frame = frame;
        }
    }
}
