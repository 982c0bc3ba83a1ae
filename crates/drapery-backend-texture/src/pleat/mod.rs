//! Live pleat sampling.
//!
//! Maps raster pixels to `(pleat_coord, cross_axis)` pairs. Each pleat gets a
//! deterministic seed; the seed drives a lateral jitter (fabric wander) and
//! a gather bias (bunching under the header, relaxing toward the hem).

mod gather;
mod grid;
mod jitter;
mod seed;

pub use gather::gather;
pub use grid::{build_sample_grid, sample_point, PleatSample, PleatSampler, SampleGrid};
pub use jitter::lateral_jitter;
pub use seed::{PleatSeed, PleatSeedRegistry};

/// Wrap any real number into `[0, 1)` with floor-modulo semantics.
///
/// Negative inputs wrap forward (`-0.25 -> 0.75`). NaN propagates.
#[inline]
pub fn wrap01(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid may round up to the divisor for tiny negative inputs.
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap01_basic() {
        assert_eq!(wrap01(0.0), 0.0);
        assert_eq!(wrap01(0.25), 0.25);
        assert_eq!(wrap01(1.0), 0.0);
        assert_eq!(wrap01(2.5), 0.5);
        assert_eq!(wrap01(-0.25), 0.75);
        assert_eq!(wrap01(-3.0), 0.0);
    }

    #[test]
    fn test_wrap01_tiny_negative_stays_below_one() {
        let v = wrap01(-1e-18);
        assert!((0.0..1.0).contains(&v), "got {}", v);
    }
}
