//! Plot controller
//!
//! A [`Plot`] owns the positions of its graph points and the animations that
//! move them. Callers hand it `(index, value)` pairs; the drawing delegate
//! turns those into rendering-space positions, which the plot either applies
//! directly or animates towards.
//!
//! Typical lifecycle for a scrollable graph:
//!
//! 1. [`create_points`](Plot::create_points) at startup, so nothing animates
//!    in from an undefined location.
//! 2. [`set_positions`](Plot::set_positions) for points that scroll into view.
//! 3. [`animate_to_positions`](Plot::animate_to_positions) when the visible
//!    value range changes.
//! 4. Deliver display frames with [`on_frame`](Plot::on_frame) while
//!    [`wants_frames`](Plot::wants_frames) is true.

use scrollgraph_animation::{
    AnimationId, AnimationScheduler, FrameClock, PointAnimation, SchedulerState,
};
use rustc_hash::FxHashSet;
use scrollgraph_core::{GraphError, GraphPoint, Point, PointStore, Result};

use crate::config::{OverlapPolicy, PlotConfig};
use crate::delegate::DrawingDelegate;

pub struct Plot {
    config: PlotConfig,
    delegate: Box<dyn DrawingDelegate>,
    points: PointStore,
    scheduler: AnimationScheduler<PointAnimation>,
}

impl Plot {
    /// Create a plot with its frame driver attached and idle
    pub fn new(config: PlotConfig, delegate: Box<dyn DrawingDelegate>) -> Result<Self> {
        config.validate()?;
        let mut scheduler =
            AnimationScheduler::with_clock(FrameClock::with_max_delta(config.max_frame_delta));
        scheduler.start();

        Ok(Self {
            config,
            delegate,
            points: PointStore::new(),
            scheduler,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.config.identifier
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Replace the configuration. In-flight animations keep the timing they
    /// were created with.
    pub fn set_config(&mut self, config: PlotConfig) -> Result<()> {
        config.validate()?;
        self.scheduler
            .clock_mut()
            .set_max_delta(config.max_frame_delta);
        self.config = config;
        Ok(())
    }

    pub fn set_drawing_delegate(&mut self, delegate: Box<dyn DrawingDelegate>) {
        self.delegate = delegate;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Point positions
    // ─────────────────────────────────────────────────────────────────────

    /// Replace every point with `count` points positioned for
    /// `initial_value` at their own index
    pub fn create_points(&mut self, count: usize, initial_value: f64) {
        let delegate = &self.delegate;
        self.points
            .fill_with(count, |index| delegate.calculate_position(index, initial_value));
        tracing::debug!(plot = %self.config.identifier, count, "points created");
    }

    /// Place points for `indices` directly at the positions for `values`,
    /// creating any that do not exist yet.
    ///
    /// Used for points entering the visible window, which should appear in
    /// place rather than animate in from the previous window's geometry.
    pub fn set_positions<I>(&mut self, indices: I, values: &[f64]) -> Result<()>
    where
        I: IntoIterator<Item = usize>,
    {
        let indices: Vec<usize> = indices.into_iter().collect();
        check_arity(&indices, values)?;

        for (&index, &value) in indices.iter().zip(values) {
            let position = self.delegate.calculate_position(index, value);
            match self.points.get_mut(index) {
                Some(point) => point.set_position(position),
                None => self.points.upsert(index, GraphPoint::from(position)),
            }
        }
        Ok(())
    }

    /// Animate existing points for `indices` towards the positions for
    /// `values`.
    ///
    /// The n-th index starts moving after `n * stagger_delay` seconds. Every
    /// index must already have a point; if any is missing nothing is
    /// enqueued. Returns the ids of the enqueued animations in index order.
    ///
    /// Under [`OverlapPolicy::CancelPrevious`] an index listed more than once
    /// only keeps its last entry, along with that entry's stagger delay.
    pub fn animate_to_positions<I>(
        &mut self,
        indices: I,
        values: &[f64],
        stagger_delay: f32,
    ) -> Result<Vec<AnimationId>>
    where
        I: IntoIterator<Item = usize>,
    {
        let indices: Vec<usize> = indices.into_iter().collect();
        check_arity(&indices, values)?;
        if !stagger_delay.is_finite() || stagger_delay < 0.0 {
            return Err(GraphError::InvalidDuration {
                duration: self.config.animation_duration,
                delay: stagger_delay,
            });
        }

        let easing = self.config.easing();
        let mut animations = Vec::with_capacity(indices.len());
        for (order, (&index, &value)) in indices.iter().zip(values).enumerate() {
            let from = self.points.position(index)?;
            let to = self.delegate.calculate_position(index, value);
            let delay = order as f32 * stagger_delay;
            let animation =
                PointAnimation::new(index, from, to, self.config.animation_duration, delay)?
                    .with_easing(easing);
            animations.push(animation);
        }

        if self.config.overlap == OverlapPolicy::CancelPrevious {
            // Last entry wins for indices listed more than once
            let mut targeted = FxHashSet::default();
            let listed = animations.len();
            animations.reverse();
            animations.retain(|animation| targeted.insert(animation.point_index()));
            animations.reverse();
            if animations.len() < listed {
                tracing::debug!(
                    plot = %self.config.identifier,
                    dropped = listed - animations.len(),
                    "duplicate indices collapsed"
                );
            }

            let cancelled = self
                .scheduler
                .cancel_where(|active| targeted.contains(&active.point_index()));
            if cancelled > 0 {
                tracing::debug!(
                    plot = %self.config.identifier,
                    cancelled,
                    "retargeted in-flight animations"
                );
            }
        }

        let ids: Vec<AnimationId> = animations
            .into_iter()
            .map(|animation| self.scheduler.enqueue(animation))
            .collect();
        tracing::debug!(
            plot = %self.config.identifier,
            enqueued = ids.len(),
            stagger_delay,
            "point animations enqueued"
        );
        Ok(ids)
    }

    /// Current position of the point at `index`
    pub fn point(&self, index: usize) -> Result<Point> {
        self.points.position(index)
    }

    pub fn points(&self) -> &PointStore {
        &self.points
    }

    // ─────────────────────────────────────────────────────────────────────
    // Frame driver
    // ─────────────────────────────────────────────────────────────────────

    /// Attach the frame driver
    pub fn start(&mut self) {
        self.scheduler.start();
    }

    /// Cancel animations and detach the frame driver
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Handle a display frame delivered at `timestamp` seconds.
    ///
    /// Returns whether any animation advanced, in which case the delegate
    /// has been asked to update its paths.
    pub fn on_frame(&mut self, timestamp: f64) -> bool {
        let advanced = self.scheduler.on_frame(timestamp, &mut self.points);
        self.after_frame(advanced)
    }

    /// Handle a display frame timed by the plot's own clock
    pub fn tick(&mut self) -> bool {
        let advanced = self.scheduler.tick(&mut self.points);
        self.after_frame(advanced)
    }

    /// Advance animations by exactly `dt` seconds, ignoring the frame clock
    /// and the driver state
    pub fn step(&mut self, dt: f32) -> bool {
        let advanced = self.scheduler.step(dt, &mut self.points);
        self.after_frame(advanced)
    }

    fn after_frame(&mut self, advanced: bool) -> bool {
        if advanced {
            self.delegate.update_paths();
        }
        advanced
    }

    /// Snap every in-flight animation to its target and empty the queue
    pub fn finish_animations(&mut self) {
        if self.scheduler.is_empty() {
            return;
        }
        self.scheduler.finish_all(&mut self.points);
        self.delegate.update_paths();
    }

    /// Drop every point and cancel every animation where it stands.
    ///
    /// Unlike a display-link teardown, the frame driver stays attached: the
    /// scheduler is Idle, so frames are ignored until the plot is filled and
    /// animated again. Use [`invalidate`](Self::invalidate) to also stop the
    /// frame callback.
    pub fn reset(&mut self) {
        self.scheduler.clear();
        self.points.clear();
        tracing::debug!(plot = %self.config.identifier, "plot reset");
    }

    /// Same teardown as [`reset`](Self::reset), but also detaches the frame
    /// driver until [`start`](Self::start) is called again
    pub fn invalidate(&mut self) {
        self.scheduler.stop();
        self.points.clear();
        tracing::debug!(plot = %self.config.identifier, "plot invalidated");
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Whether the host should keep delivering display frames
    pub fn wants_frames(&self) -> bool {
        self.scheduler.wants_frames()
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    /// Number of in-flight animations
    pub fn active_animations(&self) -> usize {
        self.scheduler.len()
    }

    pub fn animation(&self, id: AnimationId) -> Option<&PointAnimation> {
        self.scheduler.get(id)
    }

    /// In-flight animations in the order they were enqueued
    pub fn animations(&self) -> impl Iterator<Item = (AnimationId, &PointAnimation)> {
        self.scheduler.iter()
    }
}

impl std::fmt::Debug for Plot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plot")
            .field("identifier", &self.config.identifier)
            .field("points", &self.points.len())
            .field("animations", &self.scheduler.len())
            .field("state", &self.scheduler.state())
            .finish()
    }
}

fn check_arity(indices: &[usize], values: &[f64]) -> Result<()> {
    if indices.len() != values.len() {
        return Err(GraphError::ArityMismatch {
            indices: indices.len(),
            values: values.len(),
        });
    }
    Ok(())
}
