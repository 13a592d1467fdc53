//! `boids-core`: foundational types for the boids flocking core.
//!
//! This crate is a dependency of every other `boids-*` crate.  It has no
//! `boids-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`vector`]   | `Vec2` value type and its degenerate-input policy        |
//! | [`config`]   | `FlockConfig`, `FlockParams`, `SteeringWeights`          |
//! | [`clock`]    | `FrameClock`, `effective_dt`                             |
//! | [`rng`]      | `FlockRng`                                               |
//! | [`error`]    | `FlockError`, `FlockResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{FrameClock, effective_dt};
pub use config::{FlockConfig, FlockParams, SteeringWeights};
pub use error::{FlockError, FlockResult};
pub use rng::FlockRng;
pub use vector::Vec2;
