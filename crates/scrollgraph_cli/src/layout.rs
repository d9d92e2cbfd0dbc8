//! Linear index/value mapping used as the headless drawing delegate

use std::cell::Cell;
use std::rc::Rc;

use scrollgraph_charts::DrawingDelegate;
use scrollgraph_core::Point;

use crate::config::GraphSettings;

/// Maps point `i` to `left_margin + i * spacing` and values in
/// `range_min..=range_max` onto the vertical space between the margins, with
/// larger values drawn higher (smaller y).
pub struct LinearLayout {
    settings: GraphSettings,
    redraws: Rc<Cell<u64>>,
}

impl LinearLayout {
    pub fn new(settings: GraphSettings) -> Self {
        Self {
            settings,
            redraws: Rc::new(Cell::new(0)),
        }
    }

    /// Shared counter of `update_paths` calls, readable after the layout has
    /// been handed to a plot
    pub fn redraw_counter(&self) -> Rc<Cell<u64>> {
        self.redraws.clone()
    }
}

impl DrawingDelegate for LinearLayout {
    fn calculate_position(&self, index: usize, value: f64) -> Point {
        let s = &self.settings;
        let x = s.left_margin + index as f32 * s.data_point_spacing;

        let span = (s.range_max - s.range_min) as f32;
        let usable = s.height - s.top_margin - s.bottom_margin;
        let t = (value - s.range_min) as f32 / span;
        let y = s.height - s.bottom_margin - t * usable;

        Point::new(x, y)
    }

    fn update_paths(&mut self) {
        self.redraws.set(self.redraws.get() + 1);
    }
}
