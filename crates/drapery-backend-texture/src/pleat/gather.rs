//! Gather: fabric bunching toward the pleat centre under the header.

use super::seed::PleatSeed;

/// Cross-pleat bias for a position inside one pleat.
///
/// Near the header (`cross_axis = 0`) samples are pulled toward the pleat
/// centre; toward the hem (`cross_axis = 1`) they spread outward again.
/// Returns `0.0` when `taper_strength <= 0`.
pub fn gather(base_normalized: f64, cross_axis: f64, seed: &PleatSeed, taper_strength: f64) -> f64 {
    if taper_strength <= 0.0 {
        return 0.0;
    }

    let cross_axis01 = cross_axis.clamp(0.0, 1.0);
    let gather_curve = taper_strength * (1.0 - cross_axis01).powf(1.45) * 0.35;
    let relax_curve = taper_strength * cross_axis01.powf(2.1) * 0.18;

    let center_bias = (0.5 - base_normalized) * gather_curve;
    let relaxed_spread = (base_normalized - 0.5) * relax_curve;
    let pleat_variance = seed.gather_variance * gather_curve;

    center_bias + relaxed_spread + pleat_variance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_taper() {
        let seed = PleatSeed::derive(1);
        assert_eq!(gather(0.1, 0.2, &seed, 0.0), 0.0);
        assert_eq!(gather(0.1, 0.2, &seed, -0.5), 0.0);
    }

    #[test]
    fn test_pulls_toward_centre_at_header() {
        let seed = PleatSeed {
            gather_variance: 0.0,
            ..PleatSeed::derive(2)
        };
        assert!(gather(0.1, 0.0, &seed, 1.0) > 0.0);
        assert!(gather(0.9, 0.0, &seed, 1.0) < 0.0);
        assert_eq!(gather(0.5, 0.0, &seed, 1.0), 0.0);
    }

    #[test]
    fn test_spreads_outward_at_hem() {
        let seed = PleatSeed {
            gather_variance: 0.0,
            ..PleatSeed::derive(2)
        };
        // At the hem the gather curve is zero and only the relax curve remains.
        let left = gather(0.1, 1.0, &seed, 1.0);
        let right = gather(0.9, 1.0, &seed, 1.0);
        assert!(left < 0.0);
        assert!(right > 0.0);
        assert!((left - (-0.4 * 0.18)).abs() < 1e-12);
    }

    #[test]
    fn test_variance_scales_with_gather_curve() {
        let seed = PleatSeed::derive(9);
        let with = gather(0.5, 0.0, &seed, 1.0);
        assert!((with - seed.gather_variance * 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_cross_axis_clamped() {
        let seed = PleatSeed::derive(5);
        assert_eq!(
            gather(0.3, -2.0, &seed, 0.8).to_bits(),
            gather(0.3, 0.0, &seed, 0.8).to_bits()
        );
        assert_eq!(
            gather(0.3, 4.0, &seed, 0.8).to_bits(),
            gather(0.3, 1.0, &seed, 0.8).to_bits()
        );
    }
}
