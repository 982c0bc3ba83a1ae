//! Lateral jitter: the seeded sideways wander of a pleat.

use std::f64::consts::TAU;

use super::seed::PleatSeed;
use crate::noise::{lerp, Fbm, Noise2D, ValueNoise};

const DRAPE_FBM: Fbm<ValueNoise> = Fbm::new(ValueNoise);

/// Lateral displacement for a position inside one pleat.
///
/// * `base_normalized` - position across the pleat, `0..1`
/// * `cross_axis` - position from header (0) to hem (1)
/// * `strength` - jitter strength; `<= 0` disables jitter
/// * `taper_strength` - header tightening / hem loosening
///
/// The result is exactly zero at both pleat edges so adjacent pleats meet
/// without a seam.
pub fn lateral_jitter(
    base_normalized: f64,
    cross_axis: f64,
    seed: &PleatSeed,
    strength: f64,
    taper_strength: f64,
) -> f64 {
    if strength <= 0.0 {
        return 0.0;
    }

    let base_phase = base_normalized * TAU;
    let cross_phase = cross_axis * TAU;

    let edge_amount = base_normalized.min(1.0 - base_normalized);
    let edge_falloff = (edge_amount * 2.0).powf(1.25);
    let cross_axis01 = cross_axis.clamp(0.0, 1.0);

    let warp = DRAPE_FBM.sample(
        base_normalized * (2.2 + seed.wave_tightness * 0.3) + cross_axis * 0.9 + seed.offset * 0.6,
        cross_axis * 1.8 + base_normalized * 0.5 + seed.offset * 0.4,
    ) * 0.6;

    let flow = DRAPE_FBM.sample(
        base_normalized * 3.4 + cross_axis * (1.4 + seed.diagonal_tilt * 0.4),
        cross_axis * 5.2 + base_normalized * 0.7 + seed.offset * 1.3,
    );

    let gentle_sweep = (base_phase * (0.6 + seed.wave_tightness * 0.3)
        + cross_phase * 0.22
        + warp * 1.8
        + seed.phase)
        .sin()
        * (0.55 + seed.amplitude * 0.25);

    let diagonal_sweep =
        (base_phase * 1.45 - cross_phase * (0.4 + seed.diagonal_tilt * 0.2) + flow * 1.3).sin()
            * 0.28;

    let meander = flow * 0.25 + warp * 0.18;
    let micro_ripple = (base_phase * 2.6 + warp * 0.9 + seed.phase * 0.4).sin() * 0.16;

    let combined = gentle_sweep * 0.52 + diagonal_sweep * 0.35 + meander + micro_ripple;

    // Header holds the fabric; the minimum clamp loosens as taper weakens.
    let header_clamp = lerp(0.22, 0.38, 1.0 - taper_strength.min(1.0));
    let header_ease = header_clamp + (1.0 - header_clamp) * cross_axis01.powf(0.75);
    let hem_relax = 1.0 + taper_strength * cross_axis01.powf(1.9) * 0.35;
    let vertical_taper = header_ease.max(0.18) * hem_relax;

    strength * edge_falloff * combined * vertical_taper * 0.32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_strength_short_circuits() {
        let seed = PleatSeed::derive(3);
        assert_eq!(lateral_jitter(0.4, 0.5, &seed, 0.0, 0.7), 0.0);
        assert_eq!(lateral_jitter(0.4, 0.5, &seed, -1.0, 0.7), 0.0);
    }

    #[test]
    fn test_vanishes_at_pleat_edges() {
        for index in 0..20 {
            let seed = PleatSeed::derive(index);
            for &cross in &[0.0, 0.3, 0.77, 1.0] {
                for &(strength, taper) in &[(0.2, 0.0), (1.0, 1.0), (0.6, 0.35)] {
                    assert_eq!(lateral_jitter(0.0, cross, &seed, strength, taper), 0.0);
                    assert_eq!(lateral_jitter(1.0, cross, &seed, strength, taper), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_bit_reproducible() {
        let seed = PleatSeed::derive(12);
        let a = lateral_jitter(0.37, 0.61, &seed, 0.8, 0.4);
        let b = lateral_jitter(0.37, 0.61, &seed, 0.8, 0.4);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_bounded() {
        for index in 0..30 {
            let seed = PleatSeed::derive(index);
            for i in 0..=20 {
                for j in 0..=20 {
                    let v = lateral_jitter(i as f64 / 20.0, j as f64 / 20.0, &seed, 1.0, 1.0);
                    assert!(v.is_finite());
                    assert!(v.abs() < 1.0, "jitter {} out of bounds", v);
                }
            }
        }
    }

    #[test]
    fn test_scales_linearly_with_strength() {
        let seed = PleatSeed::derive(4);
        let half = lateral_jitter(0.3, 0.5, &seed, 0.5, 0.2);
        let full = lateral_jitter(0.3, 0.5, &seed, 1.0, 0.2);
        assert!((full - 2.0 * half).abs() < 1e-12);
    }
}
