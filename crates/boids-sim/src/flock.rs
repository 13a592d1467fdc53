//! The `Flock` controller and its frame pipeline.

use boids_core::{FlockConfig, FlockParams, FrameClock, Vec2, effective_dt};
use boids_steer::{BoidSteering, SteeringForces, SteeringModel, compute_forces};
use log::{debug, trace, warn};

use crate::integrator::integrate;
use crate::{Diagnostics, FlockBuilder, FlockObserver, FlockStore, NoopObserver, SimResult};

/// Whether the host should keep driving frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    Running,
    Paused,
}

/// The flock controller.
///
/// `Flock<S>` owns every agent array and drives the per-frame pipeline:
///
/// 1. **Force pass**: build a read-only [`FlockContext`] from the current
///    positions and velocities and compute every agent's
///    [`SteeringForces`] (optionally parallel with the `parallel` feature).
///    Accelerations are the per-agent totals.
/// 2. **Velocity**: `v = clamp(v + a·dt)` for every agent.
/// 3. **Position**: `x = x + v·dt + ½·a·dt²` for every agent.
/// 4. **Diagnostics**: copy the tracked agent's force breakdown.
///
/// The flock never schedules itself.  A host calls [`step`](Self::step) with
/// wall-clock timestamps (or [`advance`](Self::advance) with an explicit
/// `dt`), and uses [`pause`](Self::pause) / [`resume`](Self::resume) to stop
/// and restart.  A `Flock` assumes exclusive access during a call; a
/// multi-threaded host must serialise calls itself.
///
/// Create via [`FlockBuilder`] or [`Flock::new`].
///
/// [`FlockContext`]: boids_steer::FlockContext
pub struct Flock<S: SteeringModel = BoidSteering> {
    pub(crate) store:       FlockStore,
    pub(crate) steering:    S,
    pub(crate) params:      FlockParams,
    pub(crate) goal:        Vec2,
    pub(crate) state:       RunState,
    pub(crate) clock:       FrameClock,
    /// Force breakdown of the last frame, indexed by agent.
    pub(crate) forces:      Vec<SteeringForces>,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) seed:        u64,
}

impl Flock<BoidSteering> {
    /// A running flock of `agent_count` agents with default constants,
    /// random initial state, and the goal at the origin.
    ///
    /// `agent_count == 0` is allowed; every per-agent operation is then a
    /// no-op.
    pub fn new(agent_count: usize) -> Self {
        FlockBuilder::new(agent_count).assemble()
    }

    /// Validate `config` and build a flock from it.
    pub fn from_config(config: FlockConfig) -> SimResult<Self> {
        FlockBuilder::from_config(config).build()
    }
}

impl<S: SteeringModel> Flock<S> {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Advance to wall-clock `timestamp` (seconds).
    ///
    /// `dt` is measured from the previous `step` since the flock last started
    /// running; the first call after construction or [`resume`](Self::resume)
    /// uses `dt = 0`.  Ignored while paused.
    pub fn step(&mut self, timestamp: f64) {
        self.step_observed(timestamp, &mut NoopObserver);
    }

    /// [`step`](Self::step) with observer callbacks.
    pub fn step_observed<O: FlockObserver>(&mut self, timestamp: f64, observer: &mut O) {
        if self.state == RunState::Paused {
            trace!("step({timestamp}) ignored while paused");
            observer.on_paused_step(timestamp);
            return;
        }
        let raw = self.clock.delta(timestamp);
        let dt = effective_dt(raw);
        if dt != raw {
            warn!("timestamp {timestamp} gives unusable dt {raw}; integrating with dt = 0");
        }
        self.run_frame(dt, observer);
    }

    /// Advance by an explicit `dt` seconds, bypassing the timestamp clock.
    ///
    /// Negative or non-finite `dt` is treated as 0.  Ignored while paused.
    pub fn advance(&mut self, dt: f64) {
        self.advance_observed(dt, &mut NoopObserver);
    }

    /// [`advance`](Self::advance) with observer callbacks.
    pub fn advance_observed<O: FlockObserver>(&mut self, dt: f64, observer: &mut O) {
        if self.state == RunState::Paused {
            trace!("advance({dt}) ignored while paused");
            observer.on_paused_step(dt);
            return;
        }
        let applied = effective_dt(dt);
        if applied != dt {
            warn!("unusable dt {dt}; integrating with dt = 0");
        }
        self.run_frame(applied, observer);
    }

    /// Stop accepting frames.  Idempotent; never touches agent state.
    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
            debug!("flock paused at {}", self.clock);
        }
    }

    /// Start accepting frames again.  Idempotent.
    ///
    /// Clears the timestamp baseline so the next [`step`](Self::step) starts
    /// from `dt = 0` rather than spanning the paused interval.
    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            self.state = RunState::Running;
            self.clock.reset();
            debug!("flock resumed at {}", self.clock);
        }
    }

    /// Flip between running and paused.
    pub fn toggle(&mut self) {
        match self.state {
            RunState::Running => self.pause(),
            RunState::Paused  => self.resume(),
        }
    }

    /// Map a host visibility signal onto pause / resume.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Move the shared goal.  Takes effect on the next frame.
    pub fn set_goal(&mut self, goal: Vec2) {
        if !goal.is_finite() {
            warn!("ignoring non-finite goal {goal}");
            return;
        }
        self.goal = goal;
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    /// Current agent positions, ordered by index.
    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.store.position
    }

    /// Current agent velocities, ordered by index.
    #[inline]
    pub fn velocities(&self) -> &[Vec2] {
        &self.store.velocity
    }

    /// Accelerations from the last force pass (zero before the first frame).
    #[inline]
    pub fn accelerations(&self) -> &[Vec2] {
        &self.store.acceleration
    }

    /// Last force breakdown of the tracked agent.
    #[inline]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[inline]
    pub fn store(&self) -> &FlockStore {
        &self.store
    }

    #[inline]
    pub fn goal(&self) -> Vec2 {
        self.goal
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.count == 0
    }

    #[inline]
    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    /// Frames executed so far (including `dt = 0` frames).
    #[inline]
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    /// Simulated seconds elapsed across all frames.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Frames per second implied by the last frame's `dt`.
    #[inline]
    pub fn frame_rate(&self) -> Option<f64> {
        self.clock.frame_rate()
    }

    /// The seed the initial flock was drawn from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn tracked_agent(&self) -> usize {
        self.diagnostics.agent
    }

    /// Radius of the tracked agent's field of view, for drawing.
    #[inline]
    pub fn neighbour_radius(&self) -> f64 {
        self.steering.neighbour_radius()
    }

    /// Signed rotation from screen-up to agent `i`'s heading, or `None` if
    /// `i` is out of range.
    pub fn heading_angle(&self, i: usize) -> Option<f64> {
        self.store.velocity.get(i).map(|v| v.heading_rotation())
    }

    // ── Frame pipeline ────────────────────────────────────────────────────

    fn run_frame<O: FlockObserver>(&mut self, dt: f64, observer: &mut O) {
        let frame = self.clock.frame() + 1;
        observer.on_frame_start(frame);

        // ── Force pass (reads the start-of-frame snapshot only) ───────────
        let ctx = self.store.context(self.goal);
        compute_forces(&self.steering, &ctx, &mut self.forces);

        for (a, f) in self.store.acceleration.iter_mut().zip(&self.forces) {
            *a = f.total();
        }

        // ── Integrate velocity, then position ─────────────────────────────
        integrate(&mut self.store, dt, &self.params);

        self.diagnostics.capture(&self.forces, frame);
        self.clock.record(dt);
        trace!("frame {frame}: dt {dt:.5}");

        observer.on_frame_end(frame, dt, &self.store, &self.diagnostics);
    }
}
