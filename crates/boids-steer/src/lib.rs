//! `boids-steer`: who each agent sees, and how hard it steers.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`context`]     | `FlockContext<'a>`: read-only frame snapshot               |
//! | [`visibility`]  | `sees`: range + forward-cone neighbour test                |
//! | [`forces`]      | `SteeringForces`, `repel_vector`, `goal_seeking`            |
//! | [`model`]       | `SteeringModel` trait, `BoidSteering`, `compute_forces`     |
//!
//! # Simultaneous update
//!
//! Every agent's forces are computed from the same [`FlockContext`], which
//! borrows the position and velocity arrays immutably for the whole pass.  No
//! agent can observe another agent's already-updated state within a frame, so
//! the pass is order-independent and safe to run in parallel (`parallel`
//! feature).
//!
//! The neighbour scan is O(N²) per frame.  That is comfortable at the target
//! scale of ~100 agents; much larger flocks would want a spatial index.

pub mod context;
pub mod forces;
pub mod model;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use context::FlockContext;
pub use forces::{SteeringForces, goal_seeking, repel_vector};
pub use model::{BoidSteering, SteeringModel, compute_forces};
pub use visibility::sees;
