//! scrollgraph configuration file handling

use anyhow::{Context, Result};
use scrollgraph_charts::{AnimationType, PlotConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "scrollgraph.toml";

/// Top-level configuration (scrollgraph.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub graph: GraphSettings,
    #[serde(default)]
    pub run: RunSettings,
    #[serde(default, rename = "plot")]
    pub plots: Vec<PlotConfig>,
}

/// Layout of the graph the plots are drawn into
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphSettings {
    #[serde(default)]
    pub range_min: f64,
    #[serde(default = "default_range_max")]
    pub range_max: f64,
    /// Horizontal pixels between neighbouring data points
    #[serde(default = "default_spacing")]
    pub data_point_spacing: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_margin")]
    pub left_margin: f32,
    #[serde(default = "default_margin")]
    pub top_margin: f32,
    #[serde(default = "default_margin")]
    pub bottom_margin: f32,
    /// Seconds between the start of neighbouring points' animations
    #[serde(default)]
    pub stagger: f32,
}

fn default_range_max() -> f64 {
    300.0
}

fn default_spacing() -> f32 {
    10.0
}

fn default_height() -> f32 {
    300.0
}

fn default_margin() -> f32 {
    10.0
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            range_min: 0.0,
            range_max: default_range_max(),
            data_point_spacing: default_spacing(),
            height: default_height(),
            left_margin: default_margin(),
            top_margin: default_margin(),
            bottom_margin: default_margin(),
            stagger: 0.0,
        }
    }
}

/// Headless frame loop settings
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RunSettings {
    /// Logical milliseconds between frames
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Frame budget; the run stops early once every plot is idle
    #[serde(default = "default_max_frames")]
    pub max_frames: u32,
}

fn default_tick_ms() -> u64 {
    16
}

fn default_max_frames() -> u32 {
    600
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            max_frames: default_max_frames(),
        }
    }
}

impl GraphConfig {
    /// Load configuration from a file, or from `scrollgraph.toml` inside a
    /// directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found at {}. Run `scrollgraph init` to create one.",
                CONFIG_FILE,
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: GraphConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Two ease-out plots on a 0-300 range, 10px apart
    pub fn sample() -> Self {
        let plot = |id: &str| {
            PlotConfig::new(id)
                .with_duration(0.5)
                .with_animation_type(AnimationType::EaseOut)
        };
        Self {
            graph: GraphSettings::default(),
            run: RunSettings::default(),
            plots: vec![plot("one"), plot("two")],
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.graph.range_max > self.graph.range_min) {
            anyhow::bail!(
                "range_max ({}) must be greater than range_min ({})",
                self.graph.range_max,
                self.graph.range_min
            );
        }
        if self.graph.top_margin + self.graph.bottom_margin >= self.graph.height {
            anyhow::bail!("margins leave no vertical space inside the graph height");
        }
        if self.run.tick_ms == 0 {
            anyhow::bail!("tick_ms must be > 0");
        }
        for plot in &self.plots {
            plot.validate()
                .with_context(|| format!("plot '{}'", plot.identifier))?;
        }
        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollgraph_charts::OverlapPolicy;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = GraphConfig::from_toml(
            r#"
            [[plot]]
            identifier = "one"
            "#,
        )
        .unwrap();

        assert_eq!(config.graph.range_max, 300.0);
        assert_eq!(config.run.tick_ms, 16);
        assert_eq!(config.plots.len(), 1);
        assert_eq!(config.plots[0].animation_duration, 1.5);
        assert_eq!(config.plots[0].overlap, OverlapPolicy::CancelPrevious);
    }

    #[test]
    fn test_sample_round_trips_through_toml() {
        let text = GraphConfig::sample().to_toml().unwrap();
        let config = GraphConfig::from_toml(&text).unwrap();
        let ids: Vec<_> = config.plots.iter().map(|p| p.identifier.as_str()).collect();
        assert_eq!(ids, ["one", "two"]);
        assert_eq!(config.plots[1].animation_duration, 0.5);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = GraphConfig::from_toml(
            r#"
            [graph]
            range_min = 10.0
            range_max = 5.0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("range_max"));
    }

    #[test]
    fn test_invalid_plot_rejected() {
        let result = GraphConfig::from_toml(
            r#"
            [[plot]]
            identifier = "one"
            animation_duration = -1.0
            "#,
        );
        assert!(result.is_err());
    }
}
