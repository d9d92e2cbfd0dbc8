//! Frame clock
//!
//! Converts host refresh timestamps into per-frame deltas.

use std::time::Instant;

/// Largest delta a single frame may report, in seconds.
///
/// A frame arriving after the app was backgrounded or after a long stall
/// would otherwise jump every animation forward at once.
pub const MAX_FRAME_DELTA: f32 = 0.032;

/// Tracks the previous frame timestamp and yields clamped deltas
#[derive(Clone, Debug)]
pub struct FrameClock {
    previous: Option<f64>,
    max_delta: f32,
    origin: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_delta(MAX_FRAME_DELTA)
    }

    pub fn with_max_delta(max_delta: f32) -> Self {
        Self {
            previous: None,
            max_delta: max_delta.max(0.0),
            origin: Instant::now(),
        }
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    pub fn set_max_delta(&mut self, max_delta: f32) {
        self.max_delta = max_delta.max(0.0);
    }

    /// Record a frame at `timestamp` (seconds) and return the delta since the
    /// previous frame.
    ///
    /// The first frame after construction or [`reset`](Self::reset) yields
    /// `0.0`. Timestamps that go backwards yield `0.0`.
    pub fn tick(&mut self, timestamp: f64) -> f32 {
        let dt = match self.previous {
            Some(previous) => (timestamp - previous).max(0.0) as f32,
            None => 0.0,
        };
        self.previous = Some(timestamp);
        dt.min(self.max_delta)
    }

    /// Forget the previous frame so the next tick starts from zero
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Seconds since this clock was created, for hosts without their own
    /// frame timestamps
    pub fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
