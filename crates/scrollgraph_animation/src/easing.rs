//! Easing curves for point animations

use std::f32::consts::PI;

/// Progress curve applied between a point's start and end positions.
///
/// Every built-in curve maps `0.0 → 0.0` and `1.0 → 1.0`. `EaseOutElastic`
/// overshoots past `1.0` before settling.
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    Linear,
    /// Fast start, decelerating into the target
    #[default]
    EaseOutQuad,
    /// Decaying oscillation around the target
    EaseOutElastic,
    /// Caller-supplied curve
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// Map linear progress `t` in `0.0..=1.0` onto the curve
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => {
                let rest = 1.0 - t;
                1.0 - rest * rest
            }
            Easing::EaseOutElastic => ease_out_elastic(t),
            Easing::Custom(curve) => curve(t),
        }
    }
}

/// Decaying sine with a 0.3 period; endpoints pinned so a finished
/// animation lands exactly on its target.
fn ease_out_elastic(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let period = 0.3;
    let shift = period / 4.0;
    2.0_f32.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / period).sin() + 1.0
}
