//! Plot animation settings

use scrollgraph_animation::{Easing, MAX_FRAME_DELTA};
use scrollgraph_core::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Which curve a plot uses when its points adapt to a new range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationType {
    /// Quadratic ease-out
    #[default]
    EaseOut,
    /// Elastic ease-out with overshoot
    Elastic,
    /// Constant speed
    Linear,
    /// [`PlotConfig::custom_easing`], falling back to `EaseOut` when unset
    Custom,
}

/// What happens when a point that is already animating gets a new target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// The new animation replaces the old one and starts from wherever the
    /// point currently is
    #[default]
    CancelPrevious,
    /// Both keep running; the one advanced last in a frame wins that frame
    RunConcurrently,
}

/// Per-plot configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Identifier used by data sources to pick this plot's values
    pub identifier: String,
    /// Seconds a point takes to reach its new position
    pub animation_duration: f32,
    pub animation_type: AnimationType,
    /// Curve used when `animation_type` is `Custom`
    #[serde(skip)]
    pub custom_easing: Option<fn(f32) -> f32>,
    pub overlap: OverlapPolicy,
    /// Largest frame delta in seconds
    pub max_frame_delta: f32,
}

impl PlotConfig {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.animation_duration = seconds;
        self
    }

    pub fn with_animation_type(mut self, animation_type: AnimationType) -> Self {
        self.animation_type = animation_type;
        self
    }

    /// Use `curve` for adapt animations; also switches the type to `Custom`
    pub fn with_custom_easing(mut self, curve: fn(f32) -> f32) -> Self {
        self.custom_easing = Some(curve);
        self.animation_type = AnimationType::Custom;
        self
    }

    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    /// Resolve the easing curve for the configured animation type
    pub fn easing(&self) -> Easing {
        match (self.animation_type, self.custom_easing) {
            (AnimationType::Elastic, _) => Easing::EaseOutElastic,
            (AnimationType::Linear, _) => Easing::Linear,
            (AnimationType::Custom, Some(curve)) => Easing::Custom(curve),
            (AnimationType::Custom, None) | (AnimationType::EaseOut, _) => Easing::EaseOutQuad,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.animation_duration.is_finite() || self.animation_duration < 0.0 {
            return Err(GraphError::InvalidDuration {
                duration: self.animation_duration,
                delay: 0.0,
            });
        }
        // A zero cap would clamp every frame to no movement at all
        if !self.max_frame_delta.is_finite() || self.max_frame_delta <= 0.0 {
            return Err(GraphError::InvalidFrameDelta {
                max_delta: self.max_frame_delta,
            });
        }
        if self.animation_type == AnimationType::Custom && self.custom_easing.is_none() {
            tracing::warn!(
                plot = %self.identifier,
                "custom animation type without a curve, falling back to ease-out"
            );
        }
        Ok(())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            identifier: String::new(),
            animation_duration: 1.5,
            animation_type: AnimationType::EaseOut,
            custom_easing: None,
            overlap: OverlapPolicy::CancelPrevious,
            max_frame_delta: MAX_FRAME_DELTA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlotConfig::default();
        assert_eq!(config.animation_duration, 1.5);
        assert_eq!(config.animation_type, AnimationType::EaseOut);
        assert_eq!(config.overlap, OverlapPolicy::CancelPrevious);
        assert_eq!(config.max_frame_delta, 0.032);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_easing_resolution() {
        fn half(t: f32) -> f32 {
            t * 0.5
        }

        let easing = PlotConfig::new("a").easing();
        assert!(matches!(easing, Easing::EaseOutQuad));

        let easing = PlotConfig::new("a")
            .with_animation_type(AnimationType::Elastic)
            .easing();
        assert!(matches!(easing, Easing::EaseOutElastic));

        let easing = PlotConfig::new("a")
            .with_animation_type(AnimationType::Linear)
            .easing();
        assert!(matches!(easing, Easing::Linear));

        // Custom without a curve falls back to ease-out
        let easing = PlotConfig::new("a")
            .with_animation_type(AnimationType::Custom)
            .easing();
        assert!(matches!(easing, Easing::EaseOutQuad));

        let easing = PlotConfig::new("a").with_custom_easing(half).easing();
        assert_eq!(easing.apply(0.5), 0.25);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let config = PlotConfig::new("a").with_duration(-0.5);
        assert!(matches!(
            config.validate(),
            Err(GraphError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_frame_delta_must_be_positive() {
        for max_delta in [0.0, -0.016, f32::NAN, f32::INFINITY] {
            let mut config = PlotConfig::new("a");
            config.max_frame_delta = max_delta;
            match config.validate() {
                Err(GraphError::InvalidFrameDelta { max_delta: reported }) => {
                    assert!(reported == max_delta || (reported.is_nan() && max_delta.is_nan()));
                }
                other => panic!("expected InvalidFrameDelta for {max_delta}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: PlotConfig = toml::from_str(
            r#"
            identifier = "two"
            animation_duration = 0.5
            animation_type = "elastic"
            overlap = "run_concurrently"
            "#,
        )
        .unwrap();

        assert_eq!(config.identifier, "two");
        assert_eq!(config.animation_duration, 0.5);
        assert_eq!(config.animation_type, AnimationType::Elastic);
        assert_eq!(config.overlap, OverlapPolicy::RunConcurrently);
        assert_eq!(config.max_frame_delta, MAX_FRAME_DELTA);
        assert!(config.custom_easing.is_none());
    }
}
