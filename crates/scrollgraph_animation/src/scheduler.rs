//! Animation scheduler
//!
//! Owns every in-flight animation and advances them once per display frame.
//!
//! The scheduler has two run states. It is **Idle** while the active set is
//! empty: frames delivered by the host are ignored. The first
//! [`enqueue`](AnimationScheduler::enqueue) moves it to **Running**, and it
//! drops back to Idle in the frame that removes the last finished task.
//!
//! Separately the frame driver can be attached ([`start`](AnimationScheduler::start))
//! or detached ([`stop`](AnimationScheduler::stop)). A detached driver never
//! advances anything, whatever its run state.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::clock::FrameClock;

new_key_type! {
    /// Identity of an enqueued animation
    pub struct AnimationId;
}

/// Something the scheduler can advance once per frame.
///
/// `C` is the state the task mutates as it advances (for point animations,
/// the point store). Tasks never see the scheduler's active set.
pub trait FrameTask<C: ?Sized> {
    /// Advance by `dt` seconds
    fn advance(&mut self, dt: f32, ctx: &mut C);

    fn is_finished(&self) -> bool;

    /// Jump straight to the final state
    fn finish(&mut self, ctx: &mut C);
}

/// Scheduler run state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchedulerState {
    /// No active animations; frames are ignored
    #[default]
    Idle,
    /// At least one active animation; every frame advances them
    Running,
}

/// The animation scheduler that ticks all active animations
pub struct AnimationScheduler<T> {
    tasks: SlotMap<AnimationId, T>,
    /// Insertion order of `tasks`
    order: Vec<AnimationId>,
    state: SchedulerState,
    attached: bool,
    clock: FrameClock,
}

impl<T> AnimationScheduler<T> {
    /// Create a scheduler with its frame driver detached
    pub fn new() -> Self {
        Self::with_clock(FrameClock::new())
    }

    pub fn with_clock(clock: FrameClock) -> Self {
        Self {
            tasks: SlotMap::with_key(),
            order: Vec::new(),
            state: SchedulerState::Idle,
            attached: false,
            clock,
        }
    }

    /// Attach the frame driver. The run state is unchanged.
    pub fn start(&mut self) {
        if !self.attached {
            tracing::debug!("frame driver attached");
        }
        self.attached = true;
        self.clock.reset();
    }

    /// Cancel every animation without finishing it and detach the frame
    /// driver
    pub fn stop(&mut self) {
        self.clear();
        if self.attached {
            tracing::debug!("frame driver detached");
        }
        self.attached = false;
    }

    /// Add a task to the active set, starting the loop if it was idle
    pub fn enqueue(&mut self, task: T) -> AnimationId {
        let id = self.tasks.insert(task);
        self.order.push(id);
        if self.state == SchedulerState::Idle {
            self.clock.reset();
            self.set_state(SchedulerState::Running);
        }
        id
    }

    /// Remove a task by identity, stopping the loop when the set empties
    pub fn dequeue(&mut self, id: AnimationId) -> Option<T> {
        let task = self.tasks.remove(id)?;
        self.order.retain(|queued| *queued != id);
        self.sync_state();
        Some(task)
    }

    /// Remove every task matching `pred` without finishing it.
    ///
    /// Returns how many tasks were cancelled.
    pub fn cancel_where<P>(&mut self, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| !pred(task));
        let tasks = &self.tasks;
        self.order.retain(|id| tasks.contains_key(*id));
        self.sync_state();
        before - self.tasks.len()
    }

    /// Drop every task where it stands, without finishing it
    pub fn clear(&mut self) {
        if !self.tasks.is_empty() {
            tracing::debug!(cancelled = self.tasks.len(), "animations cancelled");
        }
        self.tasks.clear();
        self.order.clear();
        self.clock.reset();
        self.sync_state();
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether the host should keep delivering frames
    pub fn wants_frames(&self) -> bool {
        self.attached && self.is_running()
    }

    pub fn get(&self, id: AnimationId) -> Option<&T> {
        self.tasks.get(id)
    }

    /// Iterate over active tasks in the order they were enqueued
    pub fn iter(&self) -> impl Iterator<Item = (AnimationId, &T)> {
        self.order
            .iter()
            .filter_map(move |id| self.tasks.get(*id).map(|task| (*id, task)))
    }

    /// Get the number of active tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    fn sync_state(&mut self) {
        let next = if self.tasks.is_empty() {
            SchedulerState::Idle
        } else {
            SchedulerState::Running
        };
        self.set_state(next);
    }

    fn set_state(&mut self, next: SchedulerState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "animation loop state changed");
            self.state = next;
        }
    }
}

impl<T> AnimationScheduler<T> {
    /// Handle a display frame delivered at `timestamp` seconds.
    ///
    /// Inert while idle or detached. Returns whether any task advanced.
    pub fn on_frame<C: ?Sized>(&mut self, timestamp: f64, ctx: &mut C) -> bool
    where
        T: FrameTask<C>,
    {
        if !self.wants_frames() {
            return false;
        }
        let dt = self.clock.tick(timestamp);
        self.step(dt, ctx)
    }

    /// Handle a display frame using the scheduler clock's own timestamp
    pub fn tick<C: ?Sized>(&mut self, ctx: &mut C) -> bool
    where
        T: FrameTask<C>,
    {
        let now = self.clock.now();
        self.on_frame(now, ctx)
    }

    /// Advance every active task by `dt` seconds, bypassing the clock.
    ///
    /// Finished tasks are collected during the pass and removed after it, so
    /// the run state changes at most once per step.
    pub fn step<C: ?Sized>(&mut self, dt: f32, ctx: &mut C) -> bool
    where
        T: FrameTask<C>,
    {
        if self.tasks.is_empty() {
            return false;
        }

        let mut finished: SmallVec<[AnimationId; 8]> = SmallVec::new();
        for id in &self.order {
            let Some(task) = self.tasks.get_mut(*id) else {
                continue;
            };
            task.advance(dt, ctx);
            if task.is_finished() {
                finished.push(*id);
            }
        }

        for id in &finished {
            self.tasks.remove(*id);
        }
        if !finished.is_empty() {
            let tasks = &self.tasks;
            self.order.retain(|id| tasks.contains_key(*id));
        }
        tracing::trace!(
            dt,
            finished = finished.len(),
            active = self.tasks.len(),
            "animation frame"
        );
        self.sync_state();
        true
    }

    /// Finish every task in place, then empty the active set
    pub fn finish_all<C: ?Sized>(&mut self, ctx: &mut C)
    where
        T: FrameTask<C>,
    {
        for id in &self.order {
            if let Some(task) = self.tasks.get_mut(*id) {
                task.finish(ctx);
            }
        }
        self.tasks.clear();
        self.order.clear();
        self.sync_state();
    }
}

impl<T> Default for AnimationScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
