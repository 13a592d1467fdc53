//! Flock observer trait for frame-rate reporting and data collection.

use crate::{Diagnostics, FlockStore};

/// Callbacks invoked by [`Flock::step_observed`][crate::Flock::step_observed]
/// and [`Flock::advance_observed`][crate::Flock::advance_observed].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: frame-rate logger
///
/// ```rust,ignore
/// struct FrameRate;
///
/// impl FlockObserver for FrameRate {
///     fn on_frame_end(&mut self, frame: u64, dt: f64, _: &FlockStore, _: &Diagnostics) {
///         if dt > 0.0 {
///             log::info!("frame {frame}: {:.2} fps", 1.0 / dt);
///         }
///     }
/// }
/// ```
pub trait FlockObserver {
    /// Called before the force pass of each frame.
    fn on_frame_start(&mut self, _frame: u64) {}

    /// Called after integration, with the state the renderer should draw.
    ///
    /// `dt` is the time step actually applied (0 on the first frame after
    /// construction or resume).
    fn on_frame_end(
        &mut self,
        _frame:       u64,
        _dt:          f64,
        _store:       &FlockStore,
        _diagnostics: &Diagnostics,
    ) {}

    /// Called when a step request arrives while the flock is paused and is
    /// therefore ignored.  Receives the timestamp passed to `step`, or the
    /// `dt` passed to `advance`.
    fn on_paused_step(&mut self, _requested: f64) {}
}

/// A [`FlockObserver`] that does nothing.
pub struct NoopObserver;

impl FlockObserver for NoopObserver {}
