//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "energy-drum")]
#[command(about = "Audio-reactive light sources rendered across a panel layout", long_about = None)]
pub struct Args {
    /// TOML scene with [engine], [[palette]] and [[panels]] tables (built-in scene if omitted)
    #[arg(long, value_name = "FILE")]
    pub scene: Option<PathBuf>,

    /// Number of frames to run; 0 runs until interrupted
    #[arg(long, value_name = "FRAMES", default_value = "400")]
    pub ticks: u64,

    /// Scheduler cadence between frames
    #[arg(long, value_name = "MS", default_value = "50")]
    pub interval_ms: u64,

    /// Tempo of the synthetic beat
    #[arg(long, value_name = "BPM", default_value = "120")]
    pub bpm: f32,

    /// Override the scene's engine seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not draw frames to the terminal
    #[arg(long, short)]
    pub quiet: bool,

    /// Log spawned sources and other per-frame detail
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.interval_ms == 0 {
            anyhow::bail!("--interval-ms must be at least 1");
        }
        if !self.bpm.is_finite() || self.bpm <= 0.0 {
            anyhow::bail!("--bpm must be a positive number, got {}", self.bpm);
        }
        Ok(())
    }
}
