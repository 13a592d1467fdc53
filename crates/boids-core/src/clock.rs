//! Frame timing: converts host timestamps into per-frame `dt`.
//!
//! # Design
//!
//! The flock never schedules itself.  A host (render loop, timer, test
//! harness) calls `step(timestamp)` with a wall-clock reading in seconds and
//! `FrameClock` turns consecutive readings into a time delta:
//!
//!   dt = timestamp - previous_timestamp      (0 on the first frame)
//!
//! After a pause the baseline is cleared with [`FrameClock::reset`], so the
//! first frame after resuming is again `dt = 0` instead of spanning the whole
//! paused interval.

use std::fmt;

/// Tracks the timestamp baseline, frame count, and accumulated simulated time.
///
/// Cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrameClock {
    /// Timestamp of the previous frame, `None` until the first frame after
    /// construction or a reset.
    last_timestamp: Option<f64>,
    /// Frames executed since construction.
    frame: u64,
    /// Sum of every applied `dt`, in simulated seconds.
    elapsed: f64,
    /// The most recent applied `dt`.
    last_dt: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time delta from the previous reading to `timestamp`.
    ///
    /// Returns `0.0` on the first reading since construction or [`reset`].
    /// The baseline only moves on finite readings; a non-finite timestamp
    /// returns `f64::NAN` and leaves the baseline untouched.  The returned
    /// delta may be negative if the host clock runs backwards; callers pass
    /// it through [`effective_dt`] before integrating.
    ///
    /// [`reset`]: FrameClock::reset
    pub fn delta(&mut self, timestamp: f64) -> f64 {
        if !timestamp.is_finite() {
            return f64::NAN;
        }
        let dt = match self.last_timestamp {
            None       => 0.0,
            Some(prev) => timestamp - prev,
        };
        self.last_timestamp = Some(timestamp);
        dt
    }

    /// Record that a frame advancing by `dt` has completed.
    #[inline]
    pub fn record(&mut self, dt: f64) {
        self.frame += 1;
        self.elapsed += dt;
        self.last_dt = dt;
    }

    /// Forget the timestamp baseline.  Frame count and elapsed time survive.
    #[inline]
    pub fn reset(&mut self) {
        self.last_timestamp = None;
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn last_dt(&self) -> f64 {
        self.last_dt
    }

    #[inline]
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }

    /// Frames per second implied by the last frame, `None` when `dt` was 0.
    pub fn frame_rate(&self) -> Option<f64> {
        (self.last_dt > 0.0).then(|| 1.0 / self.last_dt)
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{} ({:.3} s)", self.frame, self.elapsed)
    }
}

/// Clamp a raw time delta to one that is safe to integrate.
///
/// Negative and non-finite deltas collapse to `0.0`, which makes the
/// integration step a no-op.
#[inline]
pub fn effective_dt(dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
