//! Point and batch pleat sampling.
//!
//! [`sample_point`] and [`build_sample_grid`] share [`PleatSampler`], so a
//! grid entry at `y * width + x` is bit-identical to the point query at
//! `(x, y)` with the same parameters.

use drapery_spec::{SampleGridParams, SpecError};

use super::gather::gather;
use super::jitter::lateral_jitter;
use super::seed::PleatSeedRegistry;
use super::wrap01;

/// One sampled pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PleatSample {
    /// Position across the pleat pattern, wrapped to `[0, 1)`.
    pub pleat_coord: f64,
    /// Position from header (0) to hem (1).
    pub cross_axis: f64,
}

/// Per-pixel pleat coordinates for a raster, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    pub width: u32,
    pub height: u32,
    pub pleat_coords: Vec<f64>,
    pub cross_axis_values: Vec<f64>,
}

impl SampleGrid {
    /// Get the sample at pixel `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> PleatSample {
        let idx = (y * self.width + x) as usize;
        PleatSample {
            pleat_coord: self.pleat_coords[idx],
            cross_axis: self.cross_axis_values[idx],
        }
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pleat_coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pleat_coords.is_empty()
    }
}

/// Sampling state resolved once from [`SampleGridParams`].
#[derive(Debug, Clone, Copy)]
pub struct PleatSampler<'a> {
    registry: &'a PleatSeedRegistry,
    inv_width: f64,
    inv_height: f64,
    inv_tile: f64,
    flip_texture: bool,
    jitter_strength: f64,
    taper_strength: f64,
}

impl<'a> PleatSampler<'a> {
    pub fn new(registry: &'a PleatSeedRegistry, params: &SampleGridParams) -> Self {
        let inv_width = if params.width > 0 {
            1.0 / params.width as f64
        } else {
            0.0
        };
        let inv_height = if params.height > 0 {
            1.0 / params.height as f64
        } else {
            0.0
        };
        // Tile below 1 pixel per pleat would divide by (nearly) zero.
        let clamped_tile = params.tile.max(1.0);

        Self {
            registry,
            inv_width,
            inv_height,
            inv_tile: 1.0 / clamped_tile,
            flip_texture: params.flip_texture,
            jitter_strength: params.jitter_strength,
            taper_strength: params.taper_strength,
        }
    }

    /// Sample pixel `(x, y)`.
    pub fn sample(&self, x: u32, y: u32) -> PleatSample {
        let (x, y) = (x as f64, y as f64);
        let (cross_axis, pleat_base) = if self.flip_texture {
            (x * self.inv_width, y * self.inv_tile)
        } else {
            (y * self.inv_height, x * self.inv_tile)
        };

        let pleat_index = pleat_base.floor();
        let base_normalized = pleat_base - pleat_index;
        let seed = self.registry.get(pleat_index as i64);

        let gather = gather(base_normalized, cross_axis, &seed, self.taper_strength);
        let jitter = lateral_jitter(
            base_normalized,
            cross_axis,
            &seed,
            self.jitter_strength,
            self.taper_strength,
        );

        PleatSample {
            pleat_coord: wrap01(pleat_base + gather + jitter),
            cross_axis,
        }
    }
}

/// Point query: sample a single pixel.
pub fn sample_point(
    registry: &PleatSeedRegistry,
    x: u32,
    y: u32,
    params: &SampleGridParams,
) -> PleatSample {
    PleatSampler::new(registry, params).sample(x, y)
}

/// Batch query: sample every pixel of a `width x height` raster.
pub fn build_sample_grid(
    registry: &PleatSeedRegistry,
    params: &SampleGridParams,
) -> Result<SampleGrid, SpecError> {
    params.validate()?;

    let sampler = PleatSampler::new(registry, params);
    let total = params.width as usize * params.height as usize;
    let mut pleat_coords = vec![0.0; total];
    let mut cross_axis_values = vec![0.0; total];

    for y in 0..params.height {
        let row_offset = (y * params.width) as usize;
        for x in 0..params.width {
            let idx = row_offset + x as usize;
            let sample = sampler.sample(x, y);
            pleat_coords[idx] = sample.pleat_coord;
            cross_axis_values[idx] = sample.cross_axis;
        }
    }

    Ok(SampleGrid {
        width: params.width,
        height: params.height,
        pleat_coords,
        cross_axis_values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_mapping_without_noise() {
        let registry = PleatSeedRegistry::new();
        let params = SampleGridParams::new(8, 4, 4.0);
        let grid = build_sample_grid(&registry, &params).unwrap();

        for y in 0..4 {
            for x in 0..8 {
                let s = grid.get(x, y);
                assert_eq!(s.pleat_coord, wrap01(x as f64 / 4.0));
                assert_eq!(s.cross_axis, y as f64 / 4.0);
            }
        }
    }

    #[test]
    fn test_point_matches_grid() {
        let registry = PleatSeedRegistry::new();
        let params = SampleGridParams::new(37, 23, 6.5)
            .with_jitter(0.7)
            .with_taper(0.45);
        let grid = build_sample_grid(&registry, &params).unwrap();

        let fresh = PleatSeedRegistry::new();
        for y in 0..23 {
            for x in 0..37 {
                let point = sample_point(&fresh, x, y, &params);
                let cell = grid.get(x, y);
                assert_eq!(point.pleat_coord.to_bits(), cell.pleat_coord.to_bits());
                assert_eq!(point.cross_axis.to_bits(), cell.cross_axis.to_bits());
            }
        }
    }

    #[test]
    fn test_flip_swaps_axes() {
        let registry = PleatSeedRegistry::new();
        let params = SampleGridParams::new(4, 8, 4.0).with_flip(true);
        let grid = build_sample_grid(&registry, &params).unwrap();

        for y in 0..8 {
            for x in 0..4 {
                let s = grid.get(x, y);
                assert_eq!(s.cross_axis, x as f64 / 4.0);
                assert_eq!(s.pleat_coord, wrap01(y as f64 / 4.0));
            }
        }
    }

    #[test]
    fn test_tile_clamped_to_one() {
        let registry = PleatSeedRegistry::new();
        let zero = build_sample_grid(&registry, &SampleGridParams::new(5, 2, 0.0)).unwrap();
        let one = build_sample_grid(&registry, &SampleGridParams::new(5, 2, 1.0)).unwrap();
        assert_eq!(zero, one);
        assert!(zero.pleat_coords.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_grid_value_ranges() {
        let registry = PleatSeedRegistry::new();
        let params = SampleGridParams::new(64, 48, 9.0)
            .with_jitter(1.0)
            .with_taper(1.0);
        let grid = build_sample_grid(&registry, &params).unwrap();

        assert_eq!(grid.len(), 64 * 48);
        assert!(grid.pleat_coords.iter().all(|v| (0.0..1.0).contains(v)));
        assert!(grid.cross_axis_values.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_rejects_empty_raster() {
        let registry = PleatSeedRegistry::new();
        assert!(build_sample_grid(&registry, &SampleGridParams::new(0, 4, 4.0)).is_err());
    }
}
