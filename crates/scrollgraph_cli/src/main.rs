//! scrollgraph CLI
//!
//! Runs plot animations headlessly: points start at the bottom of the range
//! and animate to the values in a data file, frame by frame, and the final
//! positions are printed as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod layout;
mod project;
mod simulate;

use config::GraphConfig;

#[derive(Parser)]
#[command(name = "scrollgraph")]
#[command(author, version, about = "Headless driver for scrollgraph plot animations")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample scrollgraph.toml
    Init {
        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Animate every configured plot to its data and print the final positions
    Simulate {
        /// Config file, or a directory containing scrollgraph.toml
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// JSON object mapping plot identifiers to value arrays
        #[arg(short, long)]
        data: PathBuf,

        /// Logical milliseconds between frames
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Frame budget
        #[arg(long)]
        max_frames: Option<u32>,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { path, force } => {
            let written = project::init_config(&path, force)?;
            tracing::info!("Wrote {}", written.display());
        }
        Commands::Simulate {
            config,
            data,
            tick_ms,
            max_frames,
            pretty,
        } => {
            let mut config = GraphConfig::load(&config)?;
            if let Some(tick_ms) = tick_ms {
                config.run.tick_ms = tick_ms;
            }
            if let Some(max_frames) = max_frames {
                config.run.max_frames = max_frames;
            }
            config.validate()?;

            let data = simulate::load_data(&data)?;
            let report = simulate::run(&config, &data)?;
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
