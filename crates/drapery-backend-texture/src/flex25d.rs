//! Flex 2.5D variant with explicit X arms.
//!
//! Columns run across `pleats_per_width` pleats, rows run from the header
//! (top) to the hem (bottom). Each pleat column has a slightly jittered ridge;
//! masks for the X arms, the central pinch and the belly are built from the
//! periodic distance to that ridge and combined into tone, occlusion,
//! translucency and a height field for the normal map.

use drapery_spec::Flex25dParams;

use crate::field::hash01;
use crate::maps::{GrayscaleBuffer, TextureBuffer};
use crate::noise::{lerp, smoothstep};
use crate::normal_map::{BoundaryMode, NormalLayout, NormalMapDeriver};

/// Channel values for one pixel of the flex25d raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flex25dSample {
    /// Tone in `[0.06, 0.97]`.
    pub ramp: f64,
    /// Ambient occlusion in `[0.25, 1]`.
    pub occlusion: f64,
    /// Transmission in `[0.06, 0.92]`.
    pub translucency: f64,
    /// Unclamped height used only for normals.
    pub height: f64,
}

/// Channel buffers for a whole flex25d raster.
#[derive(Debug, Clone)]
pub struct Flex25dBuffers {
    pub ramp: GrayscaleBuffer,
    pub occlusion: GrayscaleBuffer,
    pub translucency: GrayscaleBuffer,
    pub height: GrayscaleBuffer,
}

/// Evaluates the flex25d model for one parameter set.
#[derive(Debug, Clone, Copy)]
pub struct Flex25dSynthesizer<'a> {
    params: &'a Flex25dParams,
}

impl<'a> Flex25dSynthesizer<'a> {
    pub fn new(params: &'a Flex25dParams) -> Self {
        Self { params }
    }

    /// 1 inside the header band, 0 past the transition, smooth in between.
    pub fn header_factor(&self, v: f64) -> f64 {
        let band = self.params.header_px;
        let transition = self.params.transition_px;
        if v <= band {
            1.0
        } else if v >= band + transition {
            0.0
        } else {
            1.0 - smoothstep(0.0, 1.0, (v - band) / transition)
        }
    }

    /// Normal gain at height `v`, from `normal_scale_top` to `normal_scale_bottom`.
    pub fn normal_scale(&self, v: f64) -> f64 {
        lerp(
            self.params.normal_scale_top,
            self.params.normal_scale_bottom,
            smoothstep(0.0, 1.0, v),
        )
    }

    /// Jittered ridge centre of a pleat column, in texture `u`.
    pub fn ridge_center(&self, pleat_index: f64) -> f64 {
        let pleats = self.params.pleats_per_width as f64;
        let centre = (pleat_index + 0.5) / pleats;
        let jitter = (hash01(pleat_index * 3.17, 0.123) - 0.5) * self.params.ridge_jitter;
        centre + jitter
    }

    /// Evaluate the pixel at `(x, y)`, including its tone grain.
    pub fn evaluate_pixel(&self, x: u32, y: u32) -> Flex25dSample {
        let p = self.params;
        let pleats = p.pleats_per_width as f64;
        let last_x = p.width.saturating_sub(1).max(1) as f64;
        let last_y = p.height.saturating_sub(1).max(1) as f64;

        let v = y as f64 / last_y;
        let u = x as f64 / last_x;
        let header = self.header_factor(v);

        let pleat_index = (u * pleats).floor();
        let origin = pleat_index / pleats;
        let phase = (u - origin) * pleats;
        let centre_phase = (self.ridge_center(pleat_index) - origin) * pleats;

        let arms = self.x_arms_mask(phase, header, centre_phase);
        let pinch = self.pinch_mask(phase, header, centre_phase);
        let belly = self.belly_mask(phase, v, centre_phase);

        let grain = (hash01(x as f64 * 0.7, y as f64 * 1.9) - 0.5) * p.grain;
        let mut ramp = 0.5 + 0.45 * belly - p.shadow_header * header - 0.28 * (1.0 - belly)
            + 0.45 * arms
            - 0.55 * pinch
            + grain;
        ramp = (ramp - 0.5) * p.ramp_contrast + 0.5 + p.ramp_bias;

        let mut occlusion = 1.0 - 0.40 * (1.0 - belly) - 0.22 * pinch
            + 0.08 * arms * (1.0 - header)
            - 0.06 * (1.0 - v);
        occlusion = 1.0 - (1.0 - occlusion) * p.ao_strength;

        let mut translucency = lerp(p.trans_header, p.trans_belly, smoothstep(0.0, 1.0, v));
        translucency = lerp(translucency, p.trans_trough, 1.0 - belly);
        translucency -= 0.35 * pinch + 0.15 * arms * header;

        Flex25dSample {
            ramp: clamp_finite(ramp, 0.06, 0.97),
            occlusion: clamp_finite(occlusion, 0.25, 1.0),
            translucency: clamp_finite(translucency, 0.06, 0.92),
            height: p.belly_strength * belly - 0.6 * pinch + 0.15 * arms * (1.0 - header),
        }
    }

    /// Evaluate every pixel.
    pub fn synthesize(&self) -> Flex25dBuffers {
        let (width, height) = (self.params.width, self.params.height);
        let mut ramp = GrayscaleBuffer::new(width, height, 0.0);
        let mut occlusion = GrayscaleBuffer::new(width, height, 0.0);
        let mut translucency = GrayscaleBuffer::new(width, height, 0.0);
        let mut height_field = GrayscaleBuffer::new(width, height, 0.0);

        for y in 0..height {
            for x in 0..width {
                let sample = self.evaluate_pixel(x, y);
                ramp.set(x, y, sample.ramp);
                occlusion.set(x, y, sample.occlusion);
                translucency.set(x, y, sample.translucency);
                height_field.set(x, y, sample.height);
            }
        }

        Flex25dBuffers {
            ramp,
            occlusion,
            translucency,
            height: height_field,
        }
    }

    /// Z-up normals with clamped edges, gradients per unit texture length,
    /// and a gain growing from header to hem.
    pub fn derive_normals(&self, heights: &GrayscaleBuffer) -> TextureBuffer {
        let last_y = heights.height.saturating_sub(1).max(1) as f64;
        NormalMapDeriver::new(heights.width as f64 / 2.0, heights.height as f64 / 2.0)
            .with_boundaries(BoundaryMode::Clamp, BoundaryMode::Clamp)
            .with_layout(NormalLayout::ZUp)
            .derive_with_row_gain(heights, |y| self.normal_scale(y as f64 / last_y) * 0.75)
    }

    fn x_arms_mask(&self, phase: f64, header: f64, centre: f64) -> f64 {
        if header <= 0.0 {
            return 0.0;
        }
        let spread = self.params.x_spread_max * header;
        let sigma = self.params.x_line_sigma;
        let m = soft_gauss(periodic_distance(phase, centre - spread), sigma)
            + soft_gauss(periodic_distance(phase, centre + spread), sigma);
        m * header
    }

    fn pinch_mask(&self, phase: f64, header: f64, centre: f64) -> f64 {
        let width = self.params.pinch_width_frac;
        let sigma = lerp(width * 0.6, width * 0.25, header);
        soft_gauss(periodic_distance(phase, centre), sigma) * header
    }

    fn belly_mask(&self, phase: f64, v: f64, centre: f64) -> f64 {
        let sigma = lerp(
            self.params.belly_sigma_top,
            self.params.belly_sigma_bottom,
            smoothstep(0.0, 1.0, v),
        );
        // Fullness rescales the distance to the ridge.
        let fullness = (self.params.fullness * 0.5).clamp(0.6, 1.6);
        soft_gauss(periodic_distance(phase, centre) * fullness, sigma)
    }
}

/// Distance between two phases on the unit circle.
fn periodic_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(1.0 - d)
}

/// Gaussian lobe with an epsilon under the variance so `sigma = 0` stays finite.
fn soft_gauss(d: f64, sigma: f64) -> f64 {
    (-0.5 * d * d / (sigma * sigma + 1e-8)).exp()
}

fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params() -> Flex25dParams {
        Flex25dParams {
            width: 90,
            height: 120,
            ..Flex25dParams::default()
        }
    }

    #[test]
    fn test_header_factor_band() {
        let params = Flex25dParams::default();
        let synth = Flex25dSynthesizer::new(&params);
        assert_eq!(synth.header_factor(0.0), 1.0);
        assert_eq!(synth.header_factor(params.header_px), 1.0);
        assert_eq!(synth.header_factor(params.header_px + params.transition_px), 0.0);
        assert_eq!(synth.header_factor(1.0), 0.0);

        let mid = synth.header_factor(params.header_px + params.transition_px * 0.5);
        assert!((mid - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ridge_jitter_bounded() {
        let params = Flex25dParams::default();
        let synth = Flex25dSynthesizer::new(&params);
        let pleats = params.pleats_per_width as f64;
        for i in 0..params.pleats_per_width {
            let nominal = (i as f64 + 0.5) / pleats;
            let jitter = synth.ridge_center(i as f64) - nominal;
            assert!(jitter.abs() <= params.ridge_jitter / 2.0 + 1e-12);
        }
    }

    #[test]
    fn test_channel_ranges() {
        let params = small_params();
        let buffers = Flex25dSynthesizer::new(&params).synthesize();

        assert!(buffers.ramp.data.iter().all(|v| (0.06..=0.97).contains(v)));
        assert!(buffers.occlusion.data.iter().all(|v| (0.25..=1.0).contains(v)));
        assert!(buffers.translucency.data.iter().all(|v| (0.06..=0.92).contains(v)));
        assert!(buffers.height.data.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_deterministic() {
        let params = small_params();
        let synth = Flex25dSynthesizer::new(&params);
        assert_eq!(synth.evaluate_pixel(17, 9), synth.evaluate_pixel(17, 9));
        assert_eq!(synth.synthesize().ramp, synth.synthesize().ramp);
    }

    #[test]
    fn test_header_darker_than_body() {
        let params = small_params();
        let synth = Flex25dSynthesizer::new(&params);
        // Mid-belly of the first pleat column.
        let x = (params.width as f64 / params.pleats_per_width as f64 * 0.5) as u32;
        let top = synth.evaluate_pixel(x, 0);
        let body = synth.evaluate_pixel(x, params.height * 3 / 4);
        assert!(top.ramp < body.ramp);
        assert!(top.translucency < body.translucency);
    }

    #[test]
    fn test_normals_unit_length_and_flat_header() {
        let params = small_params();
        let synth = Flex25dSynthesizer::new(&params);
        let heights = synth.synthesize().height;
        let normals = synth.derive_normals(&heights);

        assert_eq!((normals.width, normals.height), (90, 120));
        for c in &normals.data {
            let [x, y, z] = c.to_normal();
            assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < 1e-9);
            assert!(z > 0.0);
        }
    }

    #[test]
    fn test_periodic_distance() {
        assert!((periodic_distance(0.05, 0.95) - 0.1).abs() < 1e-12);
        assert_eq!(periodic_distance(0.3, 0.3), 0.0);
        assert_eq!(periodic_distance(0.0, 0.5), 0.5);
    }
}
