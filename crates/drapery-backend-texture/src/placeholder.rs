//! Placeholder pleat maps.
//!
//! Row sinusoids and a checkerboard weave, quantized down to 8-bit levels.
//! They give a renderer usable inputs for every pleat style before any
//! height-field assets exist.

use std::f64::consts::TAU;

use drapery_spec::PlaceholderParams;

use crate::maps::GrayscaleBuffer;

/// The four placeholder maps for one pleat style.
#[derive(Debug, Clone)]
pub struct PlaceholderMaps {
    pub pleat_ramp: GrayscaleBuffer,
    pub weave_detail: GrayscaleBuffer,
    pub translucency_mask: GrayscaleBuffer,
    pub occlusion: GrayscaleBuffer,
}

/// Generate all four maps.
pub fn generate_placeholders(params: &PlaceholderParams) -> PlaceholderMaps {
    PlaceholderMaps {
        pleat_ramp: pleat_ramp(params),
        weave_detail: weave_detail(params),
        translucency_mask: translucency_mask(params),
        occlusion: occlusion(params),
    }
}

/// Tone ramp: `0.5 + sin(row phase + offset) * amplitude`.
pub fn pleat_ramp(params: &PlaceholderParams) -> GrayscaleBuffer {
    rows(params, |phase| {
        0.5 + (phase + params.phase_offset).sin() * params.amplitude
    })
}

/// Transmission between `trans_min` and `trans_max`.
pub fn translucency_mask(params: &PlaceholderParams) -> GrayscaleBuffer {
    rows(params, |phase| {
        let wave = (phase.sin() + 1.0) / 2.0;
        params.trans_min + wave * (params.trans_max - params.trans_min)
    })
}

/// Occlusion darkens only the negative half-waves.
pub fn occlusion(params: &PlaceholderParams) -> GrayscaleBuffer {
    rows(params, |phase| {
        let wave = phase.sin();
        if wave < 0.0 {
            1.0 - wave.abs() * params.ao_strength
        } else {
            1.0
        }
    })
}

/// Checkerboard weave tile around mid-gray.
pub fn weave_detail(params: &PlaceholderParams) -> GrayscaleBuffer {
    let size = params.weave_size;
    let thread = params.thread_size.max(1);
    GrayscaleBuffer::from_fn(size, size, |x, y| {
        let warp = (x / thread) % 2;
        let weft = (y / thread) % 2;
        let sign = if (warp + weft) % 2 == 0 { 1.0 } else { -1.0 };
        quantize_floor(0.5 + sign * params.weave_contrast)
    })
}

/// One value per row from the row's phase `2π · frequency · y / height`.
fn rows(params: &PlaceholderParams, value: impl Fn(f64) -> f64) -> GrayscaleBuffer {
    let (width, height) = (params.map_width, params.map_height);
    let row_values: Vec<f64> = (0..height)
        .map(|y| {
            let phase = y as f64 / height as f64 * TAU * params.frequency;
            quantize_floor(value(phase))
        })
        .collect();
    GrayscaleBuffer::from_fn(width, height, |_, y| row_values[y as usize])
}

/// Floor to the 8-bit level below, so encoding reproduces `floor(v * 255)`.
fn quantize_floor(value: f64) -> f64 {
    (value.clamp(0.0, 1.0) * 255.0).floor() / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use drapery_spec::PleatId;
    use pretty_assertions::assert_eq;

    fn small(pleat: PleatId) -> PlaceholderParams {
        PlaceholderParams {
            map_width: 4,
            map_height: 64,
            weave_size: 16,
            ..PlaceholderParams::for_pleat(pleat)
        }
    }

    #[test]
    fn test_ramp_rows_constant_and_floored() {
        let params = small(PleatId::Wave);
        let ramp = pleat_ramp(&params);
        let bytes = ramp.to_bytes();

        // Row 0: 0.5 + sin(0) * 0.35 -> floor(127.5) = 127.
        assert_eq!(&bytes[..4], &[127, 127, 127, 127]);
        for y in 0..64 {
            let row = &bytes[y * 4..y * 4 + 4];
            assert!(row.iter().all(|&b| b == row[0]));
        }
    }

    #[test]
    fn test_translucency_between_bounds() {
        for pleat in PleatId::ALL {
            let params = small(pleat);
            let mask = translucency_mask(&params);
            let lo = (params.trans_min * 255.0).floor() / 255.0;
            assert!(mask
                .data
                .iter()
                .all(|&v| v >= lo - 1e-12 && v <= params.trans_max));
        }
    }

    #[test]
    fn test_occlusion_only_in_valleys() {
        let params = small(PleatId::DoubleFlex);
        let ao = occlusion(&params);
        let min = ao.data.iter().cloned().fold(f64::INFINITY, f64::min);
        assert!(min < 1.0);
        assert!(min >= 1.0 - params.ao_strength - 1.0 / 255.0);
        // First quarter period is a positive half-wave.
        assert_eq!(ao.get(0, 1), 1.0);
    }

    #[test]
    fn test_weave_checkerboard() {
        let params = small(PleatId::Flex);
        let weave = weave_detail(&params);
        let bytes = weave.to_bytes();
        let high = ((0.5 + params.weave_contrast) * 255.0).floor() as u8;
        let low = ((0.5 - params.weave_contrast) * 255.0).floor() as u8;

        assert_eq!(bytes[0], high);
        assert_eq!(bytes[params.thread_size as usize], low);
        assert_eq!(bytes[(params.thread_size * 16 + params.thread_size) as usize], high);
    }

    #[test]
    fn test_generate_dimensions() {
        let params = PlaceholderParams::for_pleat(PleatId::Flex);
        let maps = generate_placeholders(&params);
        assert_eq!((maps.pleat_ramp.width, maps.pleat_ramp.height), (512, 2048));
        assert_eq!((maps.weave_detail.width, maps.weave_detail.height), (256, 256));
        assert_eq!(maps.occlusion.data.len(), 512 * 2048);
    }
}
