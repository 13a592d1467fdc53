//! Physical constants, steering weights, and top-level flock configuration.
//!
//! # Defaults
//!
//! | Constant           | Default   | Field                              |
//! |--------------------|-----------|------------------------------------|
//! | `NEIGHBOUR_RADIUS` | 75        | [`FlockParams::neighbour_radius`]  |
//! | `VISIBLE_ANGLE`    | 0.8 π     | [`FlockParams::visible_angle`]     |
//! | `MIN_VELOCITY`     | 40        | [`FlockParams::min_velocity`]      |
//! | `MAX_VELOCITY`     | 150       | [`FlockParams::max_velocity`]      |
//! | `GOAL_LIMIT`       | 150       | [`FlockParams::goal_limit`]        |

use std::f64::consts::PI;

use crate::{FlockError, FlockResult};

pub const DEFAULT_AGENT_COUNT: usize = 100;
pub const DEFAULT_TRACKED_AGENT: usize = 1;
pub const NEIGHBOUR_RADIUS: f64 = 75.0;
pub const VISIBLE_ANGLE: f64 = PI * 0.8;
pub const MIN_VELOCITY: f64 = 40.0;
pub const MAX_VELOCITY: f64 = 150.0;
pub const GOAL_LIMIT: f64 = 150.0;

// ── FlockParams ───────────────────────────────────────────────────────────────

/// Speed band, field of view, and goal pull limit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockParams {
    /// Maximum distance at which a neighbour can be seen.
    pub neighbour_radius: f64,

    /// Half-width of the forward visibility cone, in radians.  A neighbour is
    /// seen only if the angle between the observer's velocity and the
    /// displacement to the neighbour is strictly less than this.
    pub visible_angle: f64,

    /// Lower bound on speed after every integration step.
    pub min_velocity: f64,

    /// Upper bound on speed after every integration step.
    pub max_velocity: f64,

    /// Magnitude cap on the goal-seeking force.
    pub goal_limit: f64,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            neighbour_radius: NEIGHBOUR_RADIUS,
            visible_angle:    VISIBLE_ANGLE,
            min_velocity:     MIN_VELOCITY,
            max_velocity:     MAX_VELOCITY,
            goal_limit:       GOAL_LIMIT,
        }
    }
}

impl FlockParams {
    pub fn validate(&self) -> FlockResult<()> {
        check_non_negative("neighbour_radius", self.neighbour_radius)?;
        check_non_negative("visible_angle", self.visible_angle)?;
        check_non_negative("min_velocity", self.min_velocity)?;
        check_non_negative("max_velocity", self.max_velocity)?;
        check_non_negative("goal_limit", self.goal_limit)?;
        if self.min_velocity > self.max_velocity {
            return Err(FlockError::Config(format!(
                "min_velocity {} exceeds max_velocity {}",
                self.min_velocity, self.max_velocity
            )));
        }
        Ok(())
    }
}

// ── SteeringWeights ───────────────────────────────────────────────────────────

/// Scale factors applied to each steering contribution.
///
/// Repulsion per visible neighbour is
/// `unit(delta) * (-repel_strength / |delta|) * repel_scale`, i.e. an
/// inverse-distance push of magnitude `repel_scale * repel_strength / |delta|`.
/// Setting a scale to `0.0` disables that contribution entirely.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SteeringWeights {
    pub repel_strength: f64,
    pub repel_scale:    f64,
    pub alignment:      f64,
    pub cohesion:       f64,
    pub goal:           f64,
}

impl Default for SteeringWeights {
    fn default() -> Self {
        Self {
            repel_strength: 30.0,
            repel_scale:    15.0,
            alignment:      1.5,
            cohesion:       1.0,
            goal:           1.0,
        }
    }
}

impl SteeringWeights {
    pub fn validate(&self) -> FlockResult<()> {
        for (name, value) in [
            ("repel_strength", self.repel_strength),
            ("repel_scale", self.repel_scale),
            ("alignment", self.alignment),
            ("cohesion", self.cohesion),
            ("goal", self.goal),
        ] {
            if !value.is_finite() {
                return Err(FlockError::Config(format!("weight {name} is not finite")));
            }
        }
        Ok(())
    }
}

// ── FlockConfig ───────────────────────────────────────────────────────────────

/// Top-level flock configuration.
///
/// Typically built from `Default` and tweaked, or loaded from JSON by the
/// host application (with the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    /// Number of agents.  Fixed for the lifetime of a flock.
    pub agent_count: usize,

    /// Master RNG seed.  `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,

    /// Index of the agent whose force breakdown is retained.
    pub tracked_agent: usize,

    /// Initial positions are uniform in `±spawn_position_extent` per axis.
    pub spawn_position_extent: f64,

    /// Initial velocities are uniform in `±spawn_velocity_extent` per axis.
    pub spawn_velocity_extent: f64,

    pub params: FlockParams,

    pub weights: SteeringWeights,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            agent_count:           DEFAULT_AGENT_COUNT,
            seed:                  None,
            tracked_agent:         DEFAULT_TRACKED_AGENT,
            spawn_position_extent: 200.0,
            spawn_velocity_extent: 100.0,
            params:                FlockParams::default(),
            weights:               SteeringWeights::default(),
        }
    }
}

impl FlockConfig {
    /// Default configuration for `agent_count` agents.
    pub fn with_agents(agent_count: usize) -> Self {
        Self { agent_count, ..Self::default() }
    }

    pub fn validate(&self) -> FlockResult<()> {
        check_non_negative("spawn_position_extent", self.spawn_position_extent)?;
        check_non_negative("spawn_velocity_extent", self.spawn_velocity_extent)?;
        self.params.validate()?;
        self.weights.validate()
    }
}

fn check_non_negative(name: &str, value: f64) -> FlockResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FlockError::Config(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}
