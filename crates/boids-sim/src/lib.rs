//! `boids-sim`: frame orchestrator for the boids flocking core.
//!
//! # Per-frame pipeline
//!
//! ```text
//! step(timestamp):
//!   ⓪ Paused?   ignore the call entirely.
//!   ① Clock     dt = timestamp − previous (0 on the first frame since
//!                 construction or resume).
//!   ② Forces    every agent's SteeringForces from one read-only snapshot
//!                 (parallel with the `parallel` feature); acceleration = sum.
//!   ③ Velocity  v = clamp(v + a·dt, MIN_VELOCITY, MAX_VELOCITY).
//!   ④ Position  x = x + v·dt + ½·a·dt².
//!   ⑤ Snapshot  tracked agent's force breakdown → Diagnostics.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the force pass on Rayon's thread pool.            |
//! | `serde`    | Serialize/Deserialize on config and snapshot types.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use boids_core::Vec2;
//! use boids_sim::Flock;
//!
//! let mut flock = Flock::new(100);
//! flock.set_goal(Vec2::new(80.0, -20.0));
//! flock.step(0.0);
//! flock.step(1.0 / 60.0);
//! let repel = flock.diagnostics().forces.repel;
//! ```

pub mod builder;
pub mod diagnostics;
pub mod error;
pub mod flock;
pub mod integrator;
pub mod observer;
pub mod store;


pub use builder::FlockBuilder;
pub use diagnostics::Diagnostics;
pub use error::{SimError, SimResult};
pub use flock::{Flock, RunState};
pub use observer::{FlockObserver, NoopObserver};
pub use store::FlockStore;
