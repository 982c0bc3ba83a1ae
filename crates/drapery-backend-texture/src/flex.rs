//! Flex pleat height field.
//!
//! A parametric 2.5D model of one flex pleat: a pinched header that forms an
//! X, diagonal arms spreading out of it, and a belly that blooms toward the
//! hem with shadowed valleys between pleats. Every channel is a pure function
//! of `(height_ratio, pleat_coord)` and the coefficient table.
//!
//! The generated raster runs header to hem along columns and across pleats
//! along rows, so it tiles vertically.

use drapery_spec::PleatFamilyConfig;

use crate::field::{fract, hash01};
use crate::maps::GrayscaleBuffer;
use crate::noise::{gaussian, lerp, smoothstep};
use crate::normal_map::{BoundaryMode, NormalLayout, NormalMapDeriver};

/// Dither key offsets per channel, added to the pixel index.
const RAMP_DITHER_OFFSET: f64 = 0.0;
const OCCLUSION_DITHER_OFFSET: f64 = 19.3;
const TRANSLUCENCY_DITHER_OFFSET: f64 = 73.1;

/// Surface attributes of one point on a flex pleat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightFieldSample {
    /// Light/shadow tone in `[0, 1]`.
    pub ramp: f64,
    /// Ambient occlusion in `[ao_min, 1]`.
    pub occlusion: f64,
    /// Transmission in `[trans_min, trans_max]`.
    pub translucency: f64,
    /// Surface height in `[0, 1]`.
    pub height: f64,
    pub belly: f64,
    pub pinch: f64,
    pub diag: f64,
}

/// Per-pixel channel buffers for one flex raster.
#[derive(Debug, Clone)]
pub struct FlexBuffers {
    pub ramp: GrayscaleBuffer,
    pub occlusion: GrayscaleBuffer,
    pub translucency: GrayscaleBuffer,
    pub height: GrayscaleBuffer,
}

/// Evaluates the flex model for a fixed coefficient table.
#[derive(Debug, Clone, Copy)]
pub struct FlexHeightField<'a> {
    config: &'a PleatFamilyConfig,
}

impl<'a> FlexHeightField<'a> {
    pub fn new(config: &'a PleatFamilyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PleatFamilyConfig {
        self.config
    }

    /// Header influence: 1 at the very top, falling to exactly 0 at `header_drop`.
    pub fn header_strength(&self, height_ratio: f64) -> f64 {
        let c = self.config;
        if height_ratio < c.header_drop {
            (1.0 - height_ratio / c.header_drop).powf(c.header_power)
        } else {
            0.0
        }
    }

    /// Evaluate every channel at one point.
    ///
    /// `height_ratio` runs from the header (0) to the hem (1); `pleat_coord`
    /// counts pleats and only its fractional part matters.
    pub fn evaluate(&self, height_ratio: f64, pleat_coord: f64) -> HeightFieldSample {
        let c = self.config;

        let u = fract(pleat_coord) - 0.5;
        let u_norm = u / 0.5;
        let abs_norm = u_norm.abs();

        let header_strength = self.header_strength(height_ratio);
        let body_progress = smoothstep(c.belly_start, 1.0, height_ratio);

        let pinch_width = lerp(c.pinch_width_bottom, c.pinch_width_top, header_strength);
        let pinch_raw = (1.0 - abs_norm / pinch_width).clamp(0.0, 1.0);
        let pinch = if header_strength > 0.0 {
            pinch_raw.powf(c.pinch_sharpness) * header_strength
        } else {
            0.0
        };

        let diag_spread = c.diag_spread * (1.0 - header_strength);
        let diag_sigma = c.diag_width * (0.45 + 0.55 * header_strength);
        let diag = if header_strength > 0.0 {
            let lobes = gaussian(u_norm + diag_spread, diag_sigma)
                + gaussian(u_norm - diag_spread, diag_sigma);
            lobes.powf(c.diag_power) * header_strength
        } else {
            0.0
        };

        let belly_sigma = lerp(
            c.belly_sigma_top,
            c.belly_sigma_bottom,
            body_progress.powf(c.belly_sigma_curve),
        );
        let belly = gaussian(u_norm, belly_sigma);
        let valley = (1.0 - belly).clamp(0.0, 1.0).powf(c.valley_power);

        let height =
            (belly * (0.55 + 0.35 * body_progress) - pinch * 0.28 + diag * 0.08).clamp(0.0, 1.0);

        let ramp = (c.ramp_base + c.ramp_center_gain * belly.powf(c.ramp_center_power)
            - c.ramp_valley_shadow * valley.powf(c.ramp_valley_power)
            + c.ramp_pinch_highlight * pinch
            + c.diag_gain_ramp * diag
            - c.ramp_header_shade * header_strength
            + c.ramp_body_lift * body_progress)
            .clamp(0.0, 1.0);

        let occlusion = (1.0 - c.ao_base - c.ao_pinch * pinch.powf(c.ao_pinch_power)
            - c.ao_valley * valley.powf(c.ao_valley_power)
            + c.ao_belly_lift * belly.powf(1.2)
            + c.ao_diag_lift * diag)
            .max(c.ao_min)
            .min(1.0);

        let trans_body = lerp(
            c.trans_header,
            c.trans_body,
            body_progress.powf(c.trans_body_power),
        );
        let translucency = (trans_body + c.trans_belly_boost * belly.powf(c.trans_belly_power)
            - c.trans_pinch_loss * pinch.powf(c.trans_pinch_power)
            - c.trans_valley_loss * valley.powf(c.trans_valley_power)
            - c.diag_loss_trans * diag)
            .max(c.trans_min)
            .min(c.trans_max);

        HeightFieldSample {
            ramp,
            occlusion,
            translucency,
            height,
            belly,
            pinch,
            diag,
        }
    }

    /// Evaluate the whole raster and apply the per-pixel dither.
    ///
    /// Column `x` maps to `height_ratio = x / (width - 1)`; row `y` maps to
    /// `pleat_coord = y / height * pleats_per_tile`. The dither for pixel
    /// `idx = y * width + x` is keyed by the index and a shape channel, so
    /// the output is fully reproducible.
    pub fn synthesize(&self) -> FlexBuffers {
        let c = self.config;
        let (width, height) = (c.width, c.height);
        let last_column = width.saturating_sub(1).max(1) as f64;

        let mut ramp = GrayscaleBuffer::new(width, height, 0.0);
        let mut occlusion = GrayscaleBuffer::new(width, height, 0.0);
        let mut translucency = GrayscaleBuffer::new(width, height, 0.0);
        let mut height_field = GrayscaleBuffer::new(width, height, 0.0);

        for y in 0..height {
            let pleat_coord = y as f64 / height as f64 * c.pleats_per_tile;
            for x in 0..width {
                let sample = self.evaluate(x as f64 / last_column, pleat_coord);
                let idx = (y as u64 * width as u64 + x as u64) as f64;

                let ramp_noise = dither(idx, RAMP_DITHER_OFFSET, sample.belly, c.noise_ramp);
                let ao_noise = dither(idx, OCCLUSION_DITHER_OFFSET, sample.diag, c.noise_ao);
                let trans_noise =
                    dither(idx, TRANSLUCENCY_DITHER_OFFSET, sample.pinch, c.noise_trans);

                ramp.set(x, y, (sample.ramp + ramp_noise).clamp(0.0, 1.0));
                occlusion.set(x, y, (sample.occlusion + ao_noise).clamp(0.0, 1.0));
                translucency.set(x, y, (sample.translucency + trans_noise).clamp(0.0, 1.0));
                height_field.set(x, y, sample.height);
            }
        }

        FlexBuffers {
            ramp,
            occlusion,
            translucency,
            height: height_field,
        }
    }

    /// Normal deriver for the flex raster: rows wrap (pleat direction),
    /// columns clamp (header to hem), Y-up layout.
    pub fn normal_deriver(&self) -> NormalMapDeriver {
        NormalMapDeriver::new(
            self.config.normal_strength_vertical,
            self.config.normal_strength_horizontal,
        )
        .with_boundaries(BoundaryMode::Clamp, BoundaryMode::Wrap)
        .with_layout(NormalLayout::YUp)
    }
}

/// Centered dither in `[-amplitude / 2, amplitude / 2)`.
fn dither(idx: f64, offset: f64, key: f64, amplitude: f64) -> f64 {
    (hash01(idx + offset, key) - 0.5) * amplitude
}
