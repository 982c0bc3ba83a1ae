//! Flex pleat family coefficients.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::validation::{
    validate_finite, validate_positive, validate_resolution, validate_unit_interval,
};

/// Coefficient table for the flex 2.5D height-field model.
///
/// Columns of the generated raster run from the header (left) to the hem
/// (right); rows run across `pleats_per_tile` pleats and tile vertically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PleatFamilyConfig {
    /// Family name, used as the output directory.
    pub name: String,
    /// Raster width in pixels (header to hem).
    pub width: u32,
    /// Raster height in pixels (across pleats).
    pub height: u32,
    /// Number of pleats in one vertical tile.
    pub pleats_per_tile: f64,

    // Header band.
    pub header_drop: f64,
    pub header_power: f64,
    pub pinch_width_top: f64,
    pub pinch_width_bottom: f64,
    pub pinch_sharpness: f64,

    // Diagonal arms of the header pinch.
    pub diag_spread: f64,
    pub diag_width: f64,
    pub diag_power: f64,
    pub diag_gain_ramp: f64,
    pub diag_loss_trans: f64,

    // Belly and valley.
    pub belly_start: f64,
    pub belly_sigma_top: f64,
    pub belly_sigma_bottom: f64,
    pub belly_sigma_curve: f64,
    pub valley_power: f64,

    // Tone ramp.
    pub ramp_base: f64,
    pub ramp_center_gain: f64,
    pub ramp_center_power: f64,
    pub ramp_valley_shadow: f64,
    pub ramp_valley_power: f64,
    pub ramp_pinch_highlight: f64,
    pub ramp_header_shade: f64,
    pub ramp_body_lift: f64,
    pub noise_ramp: f64,

    // Ambient occlusion.
    pub ao_base: f64,
    pub ao_pinch: f64,
    pub ao_pinch_power: f64,
    pub ao_valley: f64,
    pub ao_valley_power: f64,
    pub ao_belly_lift: f64,
    pub ao_diag_lift: f64,
    pub ao_min: f64,
    pub noise_ao: f64,

    // Translucency.
    pub trans_header: f64,
    pub trans_body: f64,
    pub trans_body_power: f64,
    pub trans_belly_boost: f64,
    pub trans_belly_power: f64,
    pub trans_pinch_loss: f64,
    pub trans_pinch_power: f64,
    pub trans_valley_loss: f64,
    pub trans_valley_power: f64,
    pub trans_min: f64,
    pub trans_max: f64,
    pub noise_trans: f64,

    // Normal map anisotropy.
    pub normal_strength_vertical: f64,
    pub normal_strength_horizontal: f64,
}

impl PleatFamilyConfig {
    /// The shipped flex coefficient table.
    pub fn flex() -> Self {
        Self {
            name: "flex".to_string(),
            width: 512,
            height: 2048,
            pleats_per_tile: 10.0,

            header_drop: 0.12,
            header_power: 1.2,
            pinch_width_top: 0.24,
            pinch_width_bottom: 0.38,
            pinch_sharpness: 2.6,

            diag_spread: 0.32,
            diag_width: 0.14,
            diag_power: 1.15,
            diag_gain_ramp: 0.14,
            diag_loss_trans: 0.18,

            belly_start: 0.16,
            belly_sigma_top: 0.24,
            belly_sigma_bottom: 0.46,
            belly_sigma_curve: 1.15,
            valley_power: 1.7,

            ramp_base: 0.45,
            ramp_center_gain: 0.38,
            ramp_center_power: 1.25,
            ramp_valley_shadow: 0.34,
            ramp_valley_power: 1.55,
            ramp_pinch_highlight: 0.22,
            ramp_header_shade: 0.08,
            ramp_body_lift: 0.04,
            noise_ramp: 0.015,

            ao_base: 0.18,
            ao_pinch: 0.52,
            ao_pinch_power: 1.4,
            ao_valley: 0.33,
            ao_valley_power: 1.6,
            ao_belly_lift: 0.08,
            ao_diag_lift: 0.05,
            ao_min: 0.18,
            noise_ao: 0.012,

            trans_header: 0.05,
            trans_body: 0.64,
            trans_body_power: 1.1,
            trans_belly_boost: 0.28,
            trans_belly_power: 1.35,
            trans_pinch_loss: 0.42,
            trans_pinch_power: 1.1,
            trans_valley_loss: 0.18,
            trans_valley_power: 1.5,
            trans_min: 0.04,
            trans_max: 0.85,
            noise_trans: 0.01,

            normal_strength_vertical: 3.4,
            normal_strength_horizontal: 7.5,
        }
    }

    /// Check that the table keeps the model inside its numeric domain.
    pub fn validate(&self) -> Result<(), SpecError> {
        validate_resolution(self.width, self.height)?;
        if self.width < 2 {
            return Err(SpecError::InvalidParameter(format!(
                "width must be at least 2 to span header to hem, got {}",
                self.width
            )));
        }
        if self.name.is_empty() {
            return Err(SpecError::InvalidParameter(
                "name must not be empty".to_string(),
            ));
        }

        let coefficients = [
            ("pleats_per_tile", self.pleats_per_tile),
            ("header_drop", self.header_drop),
            ("header_power", self.header_power),
            ("pinch_width_top", self.pinch_width_top),
            ("pinch_width_bottom", self.pinch_width_bottom),
            ("pinch_sharpness", self.pinch_sharpness),
            ("diag_spread", self.diag_spread),
            ("diag_width", self.diag_width),
            ("diag_power", self.diag_power),
            ("diag_gain_ramp", self.diag_gain_ramp),
            ("diag_loss_trans", self.diag_loss_trans),
            ("belly_start", self.belly_start),
            ("belly_sigma_top", self.belly_sigma_top),
            ("belly_sigma_bottom", self.belly_sigma_bottom),
            ("belly_sigma_curve", self.belly_sigma_curve),
            ("valley_power", self.valley_power),
            ("ramp_base", self.ramp_base),
            ("ramp_center_gain", self.ramp_center_gain),
            ("ramp_center_power", self.ramp_center_power),
            ("ramp_valley_shadow", self.ramp_valley_shadow),
            ("ramp_valley_power", self.ramp_valley_power),
            ("ramp_pinch_highlight", self.ramp_pinch_highlight),
            ("ramp_header_shade", self.ramp_header_shade),
            ("ramp_body_lift", self.ramp_body_lift),
            ("noise_ramp", self.noise_ramp),
            ("ao_base", self.ao_base),
            ("ao_pinch", self.ao_pinch),
            ("ao_pinch_power", self.ao_pinch_power),
            ("ao_valley", self.ao_valley),
            ("ao_valley_power", self.ao_valley_power),
            ("ao_belly_lift", self.ao_belly_lift),
            ("ao_diag_lift", self.ao_diag_lift),
            ("ao_min", self.ao_min),
            ("noise_ao", self.noise_ao),
            ("trans_header", self.trans_header),
            ("trans_body", self.trans_body),
            ("trans_body_power", self.trans_body_power),
            ("trans_belly_boost", self.trans_belly_boost),
            ("trans_belly_power", self.trans_belly_power),
            ("trans_pinch_loss", self.trans_pinch_loss),
            ("trans_pinch_power", self.trans_pinch_power),
            ("trans_valley_loss", self.trans_valley_loss),
            ("trans_valley_power", self.trans_valley_power),
            ("trans_min", self.trans_min),
            ("trans_max", self.trans_max),
            ("noise_trans", self.noise_trans),
            ("normal_strength_vertical", self.normal_strength_vertical),
            ("normal_strength_horizontal", self.normal_strength_horizontal),
        ];
        for (name, value) in coefficients {
            validate_finite(name, value)?;
        }

        validate_positive("pleats_per_tile", self.pleats_per_tile)?;
        validate_positive("header_drop", self.header_drop)?;
        validate_positive("pinch_width_top", self.pinch_width_top)?;
        validate_positive("pinch_width_bottom", self.pinch_width_bottom)?;
        validate_positive("diag_width", self.diag_width)?;
        validate_positive("belly_sigma_top", self.belly_sigma_top)?;
        validate_positive("belly_sigma_bottom", self.belly_sigma_bottom)?;
        validate_unit_interval("ao_min", self.ao_min)?;
        validate_unit_interval("trans_min", self.trans_min)?;
        validate_unit_interval("trans_max", self.trans_max)?;

        if self.belly_start >= 1.0 {
            return Err(SpecError::InvalidParameter(format!(
                "belly_start must be below 1, got {}",
                self.belly_start
            )));
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

impl Default for PleatFamilyConfig {
    fn default() -> Self {
        Self::flex()
    }
}
