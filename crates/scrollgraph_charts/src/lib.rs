//! scrollgraph_charts
//!
//! Plot controller for animated, scrollable line and bar graphs.
//!
//! A plot keeps one graph point per data index and glides those points to
//! new positions whenever the visible value range changes. Drawing, gesture
//! handling and path smoothing live in the host; the host plugs in through
//! [`DrawingDelegate`] and delivers display frames to [`Plot::on_frame`].

mod config;
mod delegate;
mod plot;

pub use config::{AnimationType, OverlapPolicy, PlotConfig};
pub use delegate::DrawingDelegate;
pub use plot::Plot;

/// Common imports for plot users.
pub mod prelude {
    pub use crate::config::{AnimationType, OverlapPolicy, PlotConfig};
    pub use crate::delegate::DrawingDelegate;
    pub use crate::plot::Plot;
    pub use scrollgraph_animation::{AnimationId, Easing, SchedulerState};
    pub use scrollgraph_core::{GraphError, Point};
}
