//! Per-point transitions
//!
//! A [`PointAnimation`] moves one graph point from a start position to an end
//! position over a duration, after an optional delay. It does not own the
//! point: it carries the point's index and writes through the
//! [`PointStore`] each time it advances.

use scrollgraph_core::{GraphError, Point, PointStore, Result};

use crate::easing::Easing;
use crate::scheduler::FrameTask;

/// One in-flight transition of a single graph point
#[derive(Clone, Debug)]
pub struct PointAnimation {
    point: usize,
    from: Point,
    to: Point,
    easing: Easing,
    /// Seconds
    duration: f32,
    /// Seconds before the transition starts moving
    delay: f32,
    elapsed: f32,
    finished: bool,
}

impl PointAnimation {
    /// Create an animation for the point at index `point`.
    ///
    /// Fails with [`GraphError::InvalidDuration`] when `duration` or `delay`
    /// is negative or not finite.
    pub fn new(point: usize, from: Point, to: Point, duration: f32, delay: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(duration) || !valid(delay) {
            return Err(GraphError::InvalidDuration { duration, delay });
        }

        Ok(Self {
            point,
            from,
            to,
            easing: Easing::EaseOutQuad,
            duration,
            delay,
            elapsed: 0.0,
            finished: false,
        })
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns the point's new position, or `None` while the delay has not
    /// elapsed yet (or once the animation is already finished).
    pub fn advance(&mut self, dt: f32) -> Option<Point> {
        if self.finished {
            return None;
        }

        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.total());
        if self.elapsed < self.delay {
            return None;
        }

        // Decide completion on elapsed time: `(delay + duration) - delay` can
        // round below `duration` in f32
        if self.elapsed >= self.total() || self.duration <= 0.0 {
            self.finished = true;
            return Some(self.to);
        }

        let progress = ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0);
        Some(self.from.lerp(self.to, self.easing.apply(progress)))
    }

    /// Jump to the end: marks the animation finished and returns the target
    pub fn force_finish(&mut self) -> Point {
        self.elapsed = self.total();
        self.finished = true;
        self.to
    }

    /// Index of the point this animation moves
    pub fn point_index(&self) -> usize {
        self.point
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether the delay has elapsed and the point has started moving
    pub fn has_started(&self) -> bool {
        self.elapsed >= self.delay
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn total(&self) -> f32 {
        self.delay + self.duration
    }
}

impl FrameTask<PointStore> for PointAnimation {
    fn advance(&mut self, dt: f32, points: &mut PointStore) {
        let Some(position) = PointAnimation::advance(self, dt) else {
            return;
        };
        match points.get_mut(self.point) {
            Some(point) => point.set_position(position),
            None => {
                tracing::warn!(
                    index = self.point,
                    "animated point no longer exists; dropping animation"
                );
                self.finished = true;
            }
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn finish(&mut self, points: &mut PointStore) {
        let position = self.force_finish();
        if let Some(point) = points.get_mut(self.point) {
            point.set_position(position);
        }
    }
}
