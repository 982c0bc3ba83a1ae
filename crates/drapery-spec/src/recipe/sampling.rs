//! Live pleat sampling parameters.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::validation::{validate_finite, validate_resolution};

/// Parameters for building a pleat sample grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleGridParams {
    pub width: u32,
    pub height: u32,
    /// Pixels per pleat along the pleat axis. Clamped to at least 1.
    #[serde(default = "default_tile")]
    pub tile: f64,
    /// Swap the pleat and cross axes.
    #[serde(default)]
    pub flip_texture: bool,
    /// Lateral jitter strength, typically 0..1.
    #[serde(default)]
    pub jitter_strength: f64,
    /// Header gather / hem relax strength, typically 0..1.
    #[serde(default)]
    pub taper_strength: f64,
}

fn default_tile() -> f64 {
    1.0
}

impl SampleGridParams {
    /// Grid parameters with no jitter or taper.
    pub fn new(width: u32, height: u32, tile: f64) -> Self {
        Self {
            width,
            height,
            tile,
            flip_texture: false,
            jitter_strength: 0.0,
            taper_strength: 0.0,
        }
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip_texture = flip;
        self
    }

    pub fn with_jitter(mut self, strength: f64) -> Self {
        self.jitter_strength = strength;
        self
    }

    pub fn with_taper(mut self, strength: f64) -> Self {
        self.taper_strength = strength;
        self
    }

    /// Reject rasters that cannot be allocated and non-finite strengths.
    ///
    /// Strengths outside 0..1 are accepted; their visual result is unspecified.
    pub fn validate(&self) -> Result<(), SpecError> {
        validate_resolution(self.width, self.height)?;
        validate_finite("tile", self.tile)?;
        validate_finite("jitter_strength", self.jitter_strength)?;
        validate_finite("taper_strength", self.taper_strength)?;
        Ok(())
    }
}
