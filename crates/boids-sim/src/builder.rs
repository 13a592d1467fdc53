//! Fluent builder for constructing a [`Flock`].

use boids_core::{FlockConfig, FlockParams, FlockRng, FrameClock, SteeringWeights, Vec2};
use boids_steer::{BoidSteering, SteeringModel};
use log::debug;

use crate::{Diagnostics, Flock, FlockStore, RunState, SimError, SimResult};

/// Fluent builder for [`Flock<S>`].
///
/// # Required inputs
///
/// - Agent count, or a full [`FlockConfig`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                  |
/// |-------------------------|------------------------------------------|
/// | `.seed(s)`              | Fresh OS-drawn seed (logged at `debug`)  |
/// | `.params(p)`            | `FlockParams::default()`                 |
/// | `.weights(w)`           | `SteeringWeights::default()`             |
/// | `.tracked_agent(i)`     | `1`                                      |
/// | `.goal(p)`              | Origin                                   |
/// | `.positions(v)`         | Uniform in ±200 per axis                 |
/// | `.velocities(v)`        | ±100 per axis, clamped to the speed band |
/// | `.steering(model)`      | [`BoidSteering`] from params + weights   |
///
/// # Example
///
/// ```rust,ignore
/// let mut flock = FlockBuilder::new(100)
///     .seed(42)
///     .goal(Vec2::new(120.0, -40.0))
///     .build()?;
/// flock.step(0.0);
/// flock.step(0.016);
/// ```
pub struct FlockBuilder<S: SteeringModel = BoidSteering> {
    config:           FlockConfig,
    tracked_explicit: bool,
    positions:        Option<Vec<Vec2>>,
    velocities:       Option<Vec<Vec2>>,
    goal:             Vec2,
    steering:         S,
}

impl FlockBuilder<BoidSteering> {
    /// Builder for `agent_count` agents with default constants.
    pub fn new(agent_count: usize) -> Self {
        Self::from_config(FlockConfig::with_agents(agent_count))
    }

    /// Builder seeded from a complete configuration.
    pub fn from_config(config: FlockConfig) -> Self {
        let steering = BoidSteering::new(config.params.clone(), config.weights.clone());
        Self {
            config,
            tracked_explicit: false,
            positions:        None,
            velocities:       None,
            goal:             Vec2::ZERO,
            steering,
        }
    }

    /// Replace the speed band, field of view, and goal limit.
    pub fn params(mut self, params: FlockParams) -> Self {
        self.steering.params = params.clone();
        self.config.params = params;
        self
    }

    /// Replace the steering weights.
    pub fn weights(mut self, weights: SteeringWeights) -> Self {
        self.steering.weights = weights.clone();
        self.config.weights = weights;
        self
    }
}

impl<S: SteeringModel> FlockBuilder<S> {
    /// Swap in a different steering model.  The speed band still comes from
    /// the builder's [`FlockParams`].
    pub fn steering<T: SteeringModel>(self, steering: T) -> FlockBuilder<T> {
        FlockBuilder {
            config:           self.config,
            tracked_explicit: self.tracked_explicit,
            positions:        self.positions,
            velocities:       self.velocities,
            goal:             self.goal,
            steering,
        }
    }

    /// Fix the RNG seed so the initial flock is reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Choose which agent's force breakdown is retained.
    ///
    /// Must be `< agent_count`; [`build`](Self::build) rejects it otherwise.
    pub fn tracked_agent(mut self, index: usize) -> Self {
        self.config.tracked_agent = index;
        self.tracked_explicit = true;
        self
    }

    /// Initial goal point.
    pub fn goal(mut self, goal: Vec2) -> Self {
        self.goal = goal;
        self
    }

    /// Random spawn extents: positions in `±position`, velocities in
    /// `±velocity`, per axis.
    pub fn spawn_extents(mut self, position: f64, velocity: f64) -> Self {
        self.config.spawn_position_extent = position;
        self.config.spawn_velocity_extent = velocity;
        self
    }

    /// Explicit initial positions (must be length `agent_count`).
    pub fn positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Explicit initial velocities (must be length `agent_count`).
    ///
    /// Velocities outside the speed band are accepted as-is; the first frame
    /// with `dt > 0` pulls them into the band.
    pub fn velocities(mut self, velocities: Vec<Vec2>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    /// Validate inputs and return a ready-to-step [`Flock`].
    pub fn build(self) -> SimResult<Flock<S>> {
        self.config.validate()?;
        let count = self.config.agent_count;

        for (what, seeded) in [
            ("initial positions", &self.positions),
            ("initial velocities", &self.velocities),
        ] {
            let Some(values) = seeded else { continue };
            if values.len() != count {
                return Err(SimError::AgentCountMismatch {
                    expected: count,
                    got:      values.len(),
                    what,
                });
            }
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(SimError::NonFinite { what, index });
            }
        }

        if self.tracked_explicit && self.config.tracked_agent >= count {
            return Err(SimError::TrackedAgentOutOfRange {
                index: self.config.tracked_agent,
                count,
            });
        }

        if !self.goal.is_finite() {
            return Err(SimError::NonFinite { what: "goal", index: 0 });
        }

        Ok(self.assemble())
    }

    /// Construct the flock without validation.  Callers guarantee the
    /// configuration is valid (e.g. it is the default one).
    pub(crate) fn assemble(self) -> Flock<S> {
        let count = self.config.agent_count;
        let seed = self.config.seed.unwrap_or_else(FlockRng::entropy_seed);
        let mut rng = FlockRng::new(seed);

        let mut store = FlockStore::spawn(
            count,
            &mut rng,
            self.config.spawn_position_extent,
            self.config.spawn_velocity_extent,
            &self.config.params,
        );
        if let Some(p) = self.positions {
            store.position = p;
        }
        if let Some(v) = self.velocities {
            store.velocity = v;
        }

        debug!(
            "flock created: {count} agents, seed {seed}, tracked agent {}",
            self.config.tracked_agent
        );

        Flock {
            store,
            steering:    self.steering,
            params:      self.config.params,
            goal:        self.goal,
            state:       RunState::Running,
            clock:       FrameClock::new(),
            forces:      Vec::with_capacity(count),
            diagnostics: Diagnostics::new(self.config.tracked_agent),
            seed,
        }
    }
}
