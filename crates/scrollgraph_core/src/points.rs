//! Graph point storage
//!
//! Every plotted data point is identified by its logical index and owns a
//! mutable position in rendering space. The store is the single owner of
//! those positions; animations refer to points by index and resolve them
//! through the store each time they advance.

use rustc_hash::FxHashMap;

use crate::error::{GraphError, Result};
use crate::geometry::Point;

/// A single plotted point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GraphPoint {
    pub x: f32,
    pub y: f32,
}

impl GraphPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }
}

impl From<Point> for GraphPoint {
    fn from(position: Point) -> Self {
        Self::new(position.x, position.y)
    }
}

/// Index-keyed store of graph points
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    points: FxHashMap<usize, GraphPoint>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every point
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Insert a point, or overwrite the position of an existing one
    pub fn upsert(&mut self, index: usize, point: GraphPoint) {
        self.points.insert(index, point);
    }

    /// Look up a point that the caller must already have created
    pub fn get(&self, index: usize) -> Result<&GraphPoint> {
        self.points
            .get(&index)
            .ok_or(GraphError::MissingPoint { index })
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut GraphPoint> {
        self.points.get_mut(&index)
    }

    /// Current position of the point at `index`
    pub fn position(&self, index: usize) -> Result<Point> {
        self.get(index).map(GraphPoint::position)
    }

    /// Replace the store contents with `count` points, all at `position`
    pub fn fill(&mut self, count: usize, position: Point) {
        self.fill_with(count, |_| position);
    }

    /// Replace the store contents with `count` points at `0..count`,
    /// positioned by `position_for(index)`
    pub fn fill_with<F>(&mut self, count: usize, mut position_for: F)
    where
        F: FnMut(usize) -> Point,
    {
        self.points.clear();
        self.points.reserve(count);
        for index in 0..count {
            self.points.insert(index, position_for(index).into());
        }
        tracing::trace!(count, "point store filled");
    }

    pub fn contains(&self, index: usize) -> bool {
        self.points.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All stored indices in ascending order
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.points.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Iterate over `(index, point)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &GraphPoint)> {
        self.points.iter().map(|(index, point)| (*index, point))
    }
}
