//! Flex 2.5D variant coefficients.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::validation::{validate_positive, validate_resolution};

/// Parameters for the alternative flex model with explicit X arms.
///
/// Unlike [`super::PleatFamilyConfig`], this raster is laid out naturally:
/// columns run across `pleats_per_width` pleats and rows run from the
/// header (top) to the hem (bottom).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Flex25dParams {
    /// Output directory name.
    pub name: String,
    pub width: u32,
    pub height: u32,

    /// Number of pleat columns across the texture.
    pub pleats_per_width: u32,
    /// 1.0 = flat fabric; 2.0..2.4 = full curtain.
    pub fullness: f64,

    /// Fraction of the height taken by the header band.
    pub header_px: f64,
    /// Fraction of the height over which the X fades out.
    pub transition_px: f64,
    /// Distance of the X arms from the ridge at the very top (pleat fraction).
    pub x_spread_max: f64,
    /// Thickness of the X arms.
    pub x_line_sigma: f64,
    /// Width of the central pinch relative to the pleat.
    pub pinch_width_frac: f64,

    pub belly_sigma_top: f64,
    pub belly_sigma_bottom: f64,
    pub belly_strength: f64,

    pub shadow_header: f64,
    pub ao_strength: f64,
    pub ramp_contrast: f64,
    pub ramp_bias: f64,

    pub trans_header: f64,
    pub trans_belly: f64,
    pub trans_trough: f64,

    pub normal_scale_top: f64,
    pub normal_scale_bottom: f64,

    /// Per-column ridge irregularity.
    pub ridge_jitter: f64,
    /// Tone grain amplitude.
    pub grain: f64,
}

impl Default for Flex25dParams {
    fn default() -> Self {
        Self {
            name: "flex25d".to_string(),
            width: 1024,
            height: 2048,

            pleats_per_width: 9,
            fullness: 2.1,

            header_px: 0.12,
            transition_px: 0.08,
            x_spread_max: 0.24,
            x_line_sigma: 0.028,
            pinch_width_frac: 0.22,

            belly_sigma_top: 0.14,
            belly_sigma_bottom: 0.52,
            belly_strength: 1.0,

            shadow_header: 0.65,
            ao_strength: 0.85,
            ramp_contrast: 1.08,
            ramp_bias: 0.0,

            trans_header: 0.05,
            trans_belly: 0.55,
            trans_trough: 0.22,

            normal_scale_top: 0.35,
            normal_scale_bottom: 1.0,

            ridge_jitter: 0.012,
            grain: 0.015,
        }
    }
}

impl Flex25dParams {
    /// Check that the parameters keep the model inside its numeric domain.
    pub fn validate(&self) -> Result<(), SpecError> {
        validate_resolution(self.width, self.height)?;
        if self.width < 2 || self.height < 2 {
            return Err(SpecError::InvalidParameter(format!(
                "flex25d raster must be at least 2x2, got [{}, {}]",
                self.width, self.height
            )));
        }
        if self.pleats_per_width == 0 {
            return Err(SpecError::InvalidParameter(
                "pleats_per_width must be at least 1".to_string(),
            ));
        }
        validate_positive("transition_px", self.transition_px)?;
        validate_positive("x_line_sigma", self.x_line_sigma)?;
        validate_positive("pinch_width_frac", self.pinch_width_frac)?;
        validate_positive("belly_sigma_top", self.belly_sigma_top)?;
        validate_positive("belly_sigma_bottom", self.belly_sigma_bottom)?;
        validate_positive("fullness", self.fullness)?;
        Ok(())
    }
}
