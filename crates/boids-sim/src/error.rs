use boids_core::FlockError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] FlockError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("tracked agent {index} out of range for {count} agents")]
    TrackedAgentOutOfRange {
        index: usize,
        count: usize,
    },

    #[error("seeded {what} for agent {index} is not finite")]
    NonFinite {
        what:  &'static str,
        index: usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
