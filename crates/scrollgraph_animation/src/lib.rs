//! scrollgraph Animation System
//!
//! Per-point transitions and the frame-driven scheduler that advances them.
//!
//! # Features
//!
//! - **Easing**: linear, quadratic ease-out, elastic overshoot and
//!   caller-supplied curves
//! - **Point Animations**: delayed, eased transitions of a single graph point
//! - **Scheduler**: idle/running frame loop with clamped frame deltas
//!
//! # Example
//!
//! ```rust
//! use scrollgraph_animation::{AnimationScheduler, Easing, PointAnimation};
//! use scrollgraph_core::{GraphPoint, Point, PointStore};
//!
//! let mut points = PointStore::new();
//! points.upsert(0, GraphPoint::new(0.0, 300.0));
//!
//! let mut scheduler = AnimationScheduler::new();
//! scheduler.start();
//! let anim = PointAnimation::new(0, Point::new(0.0, 300.0), Point::new(0.0, 120.0), 0.5, 0.0)?
//!     .with_easing(Easing::EaseOutElastic);
//! scheduler.enqueue(anim);
//!
//! while scheduler.is_running() {
//!     scheduler.step(1.0 / 60.0, &mut points);
//! }
//! assert_eq!(points.position(0)?, Point::new(0.0, 120.0));
//! # Ok::<(), scrollgraph_core::GraphError>(())
//! ```

pub mod clock;
pub mod easing;
pub mod point_animation;
pub mod scheduler;

pub use clock::{FrameClock, MAX_FRAME_DELTA};
pub use easing::Easing;
pub use point_animation::PointAnimation;
pub use scheduler::{AnimationId, AnimationScheduler, FrameTask, SchedulerState};
