//! Noise generation primitives.
//!
//! All noise functions are pure Rust with no external dependencies and are
//! built on the stateless lattice hash in [`crate::field`], so output depends
//! only on the sample coordinates.

mod fbm;
mod value;

pub use fbm::Fbm;
pub use value::ValueNoise;

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Smooth interpolation between two edges.
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Quintic fade curve `t^3 (t (6t - 15) + 10)`.
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Unnormalized Gaussian lobe `exp(-0.5 (x / sigma)^2)`.
#[inline]
pub fn gaussian(x: f64, sigma: f64) -> f64 {
    (-0.5 * (x / sigma).powi(2)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quintic_endpoints() {
        assert_eq!(quintic(0.0), 0.0);
        assert_eq!(quintic(1.0), 1.0);
        assert!((quintic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_smoothstep_clamps() {
        assert_eq!(smoothstep(0.16, 1.0, 0.0), 0.0);
        assert_eq!(smoothstep(0.16, 1.0, 1.0), 1.0);
        assert_eq!(smoothstep(0.16, 1.0, 2.0), 1.0);
    }

    #[test]
    fn test_gaussian_peak() {
        assert_eq!(gaussian(0.0, 0.3), 1.0);
        assert!(gaussian(0.3, 0.3) < 1.0);
    }
}
