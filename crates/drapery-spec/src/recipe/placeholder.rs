//! Placeholder map parameters.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::pleat::PleatId;
use crate::validation::validate_resolution;

/// Sinusoidal placeholder maps for a pleat style.
///
/// These are the first-pass maps a renderer can use before artist or
/// height-field assets exist: one sinusoid per row for tone, translucency
/// and occlusion, plus a checkerboard weave tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceholderParams {
    pub pleat: PleatId,
    /// Width of the ramp, translucency and occlusion maps.
    pub map_width: u32,
    /// Height of the ramp, translucency and occlusion maps.
    pub map_height: u32,
    /// Edge of the square weave tile.
    pub weave_size: u32,
    /// Weave contrast around mid-gray.
    pub weave_contrast: f64,
    /// Thread size of the weave checkerboard in pixels.
    pub thread_size: u32,
    /// Sinusoid periods over the map height.
    pub frequency: f64,
    /// Tone amplitude around 0.5.
    pub amplitude: f64,
    /// Tone phase offset in radians.
    pub phase_offset: f64,
    pub trans_min: f64,
    pub trans_max: f64,
    /// Occlusion depth in the negative half-waves.
    pub ao_strength: f64,
}

impl PlaceholderParams {
    /// Shipped placeholder parameters for a pleat style.
    pub fn for_pleat(pleat: PleatId) -> Self {
        use std::f64::consts::PI;

        let (frequency, amplitude, phase_offset, trans_min, trans_max, ao_strength, thread_size) =
            match pleat {
                PleatId::Wave => (8.0, 0.35, 0.0, 0.5, 0.85, 0.15, 3),
                PleatId::Flex => (6.0, 0.28, PI / 4.0, 0.45, 0.8, 0.18, 3),
                PleatId::DoubleFlex => (12.0, 0.42, PI / 6.0, 0.4, 0.75, 0.22, 4),
            };

        Self {
            pleat,
            map_width: 512,
            map_height: 2048,
            weave_size: 256,
            weave_contrast: 0.08,
            thread_size,
            frequency,
            amplitude,
            phase_offset,
            trans_min,
            trans_max,
            ao_strength,
        }
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        validate_resolution(self.map_width, self.map_height)?;
        validate_resolution(self.weave_size, self.weave_size)?;
        if self.thread_size == 0 {
            return Err(SpecError::InvalidParameter(
                "thread_size must be at least 1".to_string(),
            ));
        }
        if self.trans_min > self.trans_max {
            return Err(SpecError::InvalidParameter(format!(
                "trans_min must be <= trans_max, got [{}, {}]",
                self.trans_min, self.trans_max
            )));
        }
        Ok(())
    }
}
