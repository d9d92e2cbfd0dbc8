//! scrollgraph Core
//!
//! Foundational types shared by the scrollgraph crates:
//!
//! - **Geometry**: `Point` in rendering space with per-axis interpolation
//! - **Point Store**: index-keyed ownership of every plotted point's position
//! - **Errors**: the contract violations callers can trigger
//!
//! # Example
//!
//! ```rust
//! use scrollgraph_core::{GraphError, Point, PointStore};
//!
//! let mut store = PointStore::new();
//! store.fill_with(3, |i| Point::new(i as f32 * 10.0, 300.0));
//!
//! assert_eq!(store.position(2), Ok(Point::new(20.0, 300.0)));
//! assert_eq!(store.position(7), Err(GraphError::MissingPoint { index: 7 }));
//! ```

pub mod error;
pub mod geometry;
pub mod points;

pub use error::{GraphError, Result};
pub use geometry::{lerp_f32, Point};
pub use points::{GraphPoint, PointStore};
