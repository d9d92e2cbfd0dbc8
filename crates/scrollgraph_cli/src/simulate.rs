//! Deterministic headless run of the plots' startup animation.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use scrollgraph_charts::Plot;
use scrollgraph_core::Point;
use serde::Serialize;

use crate::config::GraphConfig;
use crate::layout::LinearLayout;

/// Values per plot identifier
pub type PlotData = BTreeMap<String, Vec<f64>>;

/// Final state of one plot
#[derive(Debug, Clone, Serialize)]
pub struct PlotReport {
    pub identifier: String,
    pub redraws: u64,
    pub points: Vec<Point>,
}

/// Outcome of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub frames: u32,
    pub elapsed_ms: u64,
    /// Whether every plot finished animating within the frame budget
    pub settled: bool,
    pub plots: Vec<PlotReport>,
}

/// Load plot data from a JSON object of `{ "<plot id>": [values...] }`
pub fn load_data(path: &Path) -> Result<PlotData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

struct RunningPlot {
    plot: Plot,
    redraws: Rc<Cell<u64>>,
}

/// Create every configured plot's points at the bottom of the range, animate
/// them to their data values, and deliver frames until all plots are idle or
/// the frame budget runs out.
pub fn run(config: &GraphConfig, data: &PlotData) -> Result<SimulationReport> {
    if config.plots.is_empty() {
        bail!("no plots configured");
    }

    let count = point_count(config, data)?;
    let mut plots = Vec::with_capacity(config.plots.len());
    for plot_config in &config.plots {
        let values = &data[&plot_config.identifier];
        let layout = LinearLayout::new(config.graph.clone());
        let redraws = layout.redraw_counter();
        let mut plot = Plot::new(plot_config.clone(), Box::new(layout))?;

        plot.create_points(count, config.graph.range_min);
        plot.animate_to_positions(0..count, values, config.graph.stagger)?;
        plots.push(RunningPlot { plot, redraws });
    }
    tracing::info!(plots = plots.len(), points = count, "startup animation queued");

    let tick_ms = config.run.tick_ms;
    let mut frames = 0;
    while frames < config.run.max_frames && plots.iter().any(|p| p.plot.wants_frames()) {
        let timestamp = (frames as u64 * tick_ms) as f64 / 1000.0;
        for running in &mut plots {
            running.plot.on_frame(timestamp);
        }
        frames += 1;
    }

    let settled = plots.iter().all(|p| !p.plot.is_animating());
    if settled {
        tracing::info!(frames, "all plots settled");
    } else {
        tracing::warn!(frames, "frame budget exhausted before plots settled");
    }

    let plots = plots
        .into_iter()
        .map(|running| -> Result<PlotReport> {
            let points = (0..count)
                .map(|index| running.plot.point(index))
                .collect::<scrollgraph_core::Result<Vec<_>>>()?;
            Ok(PlotReport {
                identifier: running.plot.identifier().to_string(),
                redraws: running.redraws.get(),
                points,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SimulationReport {
        frames,
        elapsed_ms: frames as u64 * tick_ms,
        settled,
        plots,
    })
}

/// Every configured plot needs data, and all plots share one point count
fn point_count(config: &GraphConfig, data: &PlotData) -> Result<usize> {
    let mut count = None;
    for plot in &config.plots {
        let Some(values) = data.get(&plot.identifier) else {
            bail!("no data for plot '{}'", plot.identifier);
        };
        match count {
            None => count = Some(values.len()),
            Some(n) if n != values.len() => bail!(
                "plot '{}' has {} values, expected {}",
                plot.identifier,
                values.len(),
                n
            ),
            Some(_) => {}
        }
    }
    Ok(count.unwrap_or(0))
}
