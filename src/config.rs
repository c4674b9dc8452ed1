//! Show configuration.
//!
//! Defaults reproduce the classic canvas demo. Values can come from a JSON
//! file and are then overridden by command-line flags.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest accepted burst.
pub const MAX_BURST_SIZE: usize = 10_000;
/// Smallest accepted scale. Below it a single stroke spans too many raster
/// pixels to draw in a frame.
pub const MIN_SCALE: f64 = 0.25;

/// How the frame hue evolves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HueMode {
    /// Uniform in [0, 360) every frame.
    #[default]
    Random,
    /// Shift by `step` degrees every frame, wrapping at 360.
    Drift { step: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowConfig {
    /// Sparks produced by one detonation
    pub burst_size: usize,
    /// Frames between automatic launches
    pub auto_launch_ticks: u32,
    /// Minimum frames between pointer launches
    pub pointer_launch_ticks: u32,
    /// Opacity of the black erase rectangle drawn each frame
    pub fade_alpha: f64,
    /// Canvas units per terminal pixel
    pub scale: f64,
    pub background: (u8, u8, u8),
    pub seed: Option<u64>,
    pub hue: HueMode,
    /// Hue before the first frame resamples or drifts it
    pub initial_hue: f64,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            burst_size: 30,
            auto_launch_ticks: 80,
            pointer_launch_ticks: 5,
            fade_alpha: 0.5,
            scale: 4.0,
            background: (0, 0, 0),
            seed: None,
            hue: HueMode::Random,
            initial_hue: 120.0,
        }
    }
}

impl ShowConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: ShowConfig = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale < MIN_SCALE {
            return Err(Error::InvalidConfig(format!(
                "scale must be a finite number of at least {MIN_SCALE}, got {}",
                self.scale
            )));
        }
        if self.burst_size > MAX_BURST_SIZE {
            return Err(Error::InvalidConfig(format!(
                "burst_size must be at most {MAX_BURST_SIZE}, got {}",
                self.burst_size
            )));
        }
        if !(self.fade_alpha > 0.0 && self.fade_alpha <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "fade_alpha must be in (0, 1], got {}",
                self.fade_alpha
            )));
        }
        if let HueMode::Drift { step } = self.hue {
            if !step.is_finite() {
                return Err(Error::InvalidConfig("hue drift step must be finite".into()));
            }
        }
        if !self.initial_hue.is_finite() {
            return Err(Error::InvalidConfig("initial_hue must be finite".into()));
        }
        Ok(())
    }
}

pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// [`parse_hex_color`] for user input, reporting what was wrong.
pub fn parse_background(hex: &str) -> Result<(u8, u8, u8)> {
    parse_hex_color(hex).ok_or_else(|| Error::InvalidColor(hex.to_string()))
}
