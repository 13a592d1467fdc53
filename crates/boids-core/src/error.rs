//! Core error type.
//!
//! Only configuration can fail.  Steady-state stepping resolves degenerate
//! geometry locally and never produces an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlockError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for the `boids-*` crates.
pub type FlockResult<T> = Result<T, FlockError>;
