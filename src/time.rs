//! Process-wide frame timing.

use web_time::Instant;

/// Frame delta supplied to every navigation tick.
///
/// The host refreshes it once per frame, before the registry ticks, either
/// from the wall clock ([`advance`](Self::advance)) or with a fixed step
/// ([`set_delta`](Self::set_delta)).
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Seconds between the two most recent frames
    delta: f32,
    /// Upper bound on a measured delta, so a stall does not fling the camera
    max_delta: f32,
    frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Longest delta [`advance`](Self::advance) reports, in seconds.
    pub const DEFAULT_MAX_DELTA: f32 = 0.25;

    /// Start a clock at the current instant with a zero delta.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: 0.0,
            max_delta: Self::DEFAULT_MAX_DELTA,
            frames: 0,
        }
    }

    /// Change the cap applied to measured deltas.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta.max(0.0);
        self
    }

    /// Measure the wall time since the previous frame, capped at the
    /// maximum delta, and make it the current delta. Returns the new delta.
    pub fn advance(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.set_delta(elapsed.min(self.max_delta))
    }

    /// Use a host-supplied delta for this frame as is. Negative or
    /// non-finite values become zero. Returns the stored delta.
    pub fn set_delta(&mut self, dt: f32) -> f32 {
        self.delta = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.frames += 1;
        self.delta
    }

    /// Current frame delta in seconds.
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Number of frames started so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
