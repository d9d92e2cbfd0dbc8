use scrollgraph_core::Point;

/// The drawing layer a [`Plot`](crate::Plot) reports to.
///
/// The plot never maps data to screen space itself; it asks the delegate for
/// every position and tells it when animated points have moved.
pub trait DrawingDelegate {
    /// Rendering-space position of `value` plotted at `index`
    fn calculate_position(&self, index: usize, value: f64) -> Point;

    /// Called once per frame in which any animated point moved
    fn update_paths(&mut self);
}

impl<F> DrawingDelegate for F
where
    F: Fn(usize, f64) -> Point,
{
    fn calculate_position(&self, index: usize, value: f64) -> Point {
        self(index, value)
    }

    fn update_paths(&mut self) {}
}
