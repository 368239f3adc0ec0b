//! Simulation and render configuration with documented constants
//!
//! Every tunable lives here. Values can be overridden from a TOML file;
//! missing keys fall back to the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{AviaryError, Result};
use crate::renderer::state::Color;
use crate::renderer::viewport::{effective_pixel_ratio, MAX_BACKING_SIDE};

/// Top-level configuration, one table per subsystem
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AviaryConfig {
    pub simulation: SimulationConfig,
    pub render: RenderConfig,
}

/// Configuration for world generation and stepping
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of animals spawned in a random world
    pub animal_count: usize,

    /// Number of food pellets spawned in a random world
    pub food_count: usize,

    /// Distance an animal covers per step, in normalized world units
    ///
    /// The world is the unit square, so at 0.02 an animal crosses it
    /// in 50 steps.
    pub animal_speed: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            animal_count: 40,
            food_count: 60,
            animal_speed: 0.02,
        }
    }
}

/// Configuration for the frame renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Logical (CSS) viewport width in pixels
    pub width: u32,

    /// Logical (CSS) viewport height in pixels
    pub height: u32,

    /// Device pixel ratio; `None` means the host reported nothing (treated as 1)
    pub pixel_ratio: Option<f32>,

    /// Glyph size as a fraction of the logical viewport width
    pub glyph_scale: f32,

    /// Fill color of animal glyphs
    pub fill: Color,

    /// Color the canvas is cleared to before a frame
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            pixel_ratio: None,
            glyph_scale: 0.01,
            fill: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

impl AviaryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if !sim.animal_speed.is_finite() || sim.animal_speed < 0.0 {
            return Err(AviaryError::InvalidConfig(format!(
                "animal_speed ({}) must be a finite, non-negative number",
                sim.animal_speed
            )));
        }

        let render = &self.render;
        if render.width == 0 || render.height == 0 {
            return Err(AviaryError::InvalidConfig(format!(
                "viewport must be non-empty, got {}x{}",
                render.width, render.height
            )));
        }

        if !render.glyph_scale.is_finite() || render.glyph_scale <= 0.0 {
            return Err(AviaryError::InvalidConfig(format!(
                "glyph_scale ({}) must be positive",
                render.glyph_scale
            )));
        }

        let ratio = effective_pixel_ratio(render.pixel_ratio);
        let backing_width = render.width as f32 * ratio;
        let backing_height = render.height as f32 * ratio;
        let limit = MAX_BACKING_SIDE as f32;
        if backing_width.round() > limit || backing_height.round() > limit {
            return Err(AviaryError::InvalidConfig(format!(
                "backing size {:.0}x{:.0} ({}x{} at pixel ratio {}) exceeds {} px per side",
                backing_width, backing_height, render.width, render.height, ratio, MAX_BACKING_SIDE
            )));
        }

        Ok(())
    }
}
