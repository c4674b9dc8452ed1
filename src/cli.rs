//! Command-line interface.
//!
//! ```bash
//! # Terminal show with defaults
//! pyrocanvas
//!
//! # Reproducible show on a dark blue background
//! pyrocanvas --seed 42 --bg-color 1a1b26
//!
//! # Write a CSS firework page
//! pyrocanvas doodle --out fireworks.html
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ShowConfig, parse_background};
use crate::error::Result;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pyrocanvas",
    version,
    about = "Fireworks in the terminal",
    long_about = "Launches fireworks toward random points, or toward the mouse while \
                  the left button is held. Press 'q', ESC, or Ctrl+C to exit."
)]
pub struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long, env = "PYROCANVAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Background color as hex (e.g., --bg-color 1a1b26)
    #[arg(long, value_name = "RRGGBB")]
    pub bg_color: Option<String>,

    /// Canvas units per terminal pixel
    #[arg(long)]
    pub scale: Option<f64>,

    /// Seed for reproducible randomness
    #[arg(long, short = 's', global = true)]
    pub seed: Option<u64>,

    /// Append logs to this file (the show owns the terminal)
    #[arg(long, env = "PYROCANVAS_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// More verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a CSS firework doodle page
    Doodle(DoodleArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DoodleArgs {
    /// Output HTML file
    #[arg(long, short = 'o')]
    pub out: PathBuf,

    /// Plain white-on-black or black-on-white sparks
    #[arg(long)]
    pub high_contrast: bool,

    /// Render for a light page instead of a dark one
    #[arg(long)]
    pub light_background: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn show_config(&self) -> Result<ShowConfig> {
        let mut config = match &self.config {
            Some(path) => ShowConfig::load(path)?,
            None => ShowConfig::default(),
        };

        if let Some(hex) = &self.bg_color {
            config.background = parse_background(hex)?;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
