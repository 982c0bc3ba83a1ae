//! Deterministic pseudo-random scalar fields.
//!
//! Every value here is a pure function of its coordinates. There is no seed
//! state and no draw order, so calls may be reordered or repeated freely.
//! The hash is not cryptographic; only determinism and range matter.

/// Trigonometric hash: `fract(sin(x*k1 + y*k2) * k3)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigHash {
    k1: f64,
    k2: f64,
    k3: f64,
}

impl TrigHash {
    /// Constants for lattice values and pleat seeds.
    pub const LATTICE: TrigHash = TrigHash::new(157.31, 47.63, 43758.5453);

    /// Constants for per-pixel dither.
    pub const DITHER: TrigHash = TrigHash::new(12.9898, 78.233, 43758.5453);

    pub const fn new(k1: f64, k2: f64, k3: f64) -> Self {
        Self { k1, k2, k3 }
    }

    /// Hash to `[0, 1)`.
    #[inline]
    pub fn unit(&self, x: f64, y: f64) -> f64 {
        fract((x * self.k1 + y * self.k2).sin() * self.k3)
    }

    /// Hash to `[-1, 1)`.
    #[inline]
    pub fn signed(&self, x: f64, y: f64) -> f64 {
        self.unit(x, y) * 2.0 - 1.0
    }
}

/// Lattice hash in `[-1, 1)` for integer coordinates or pleat indices.
#[inline]
pub fn hash2(i: i64, j: i64) -> f64 {
    TrigHash::LATTICE.signed(i as f64, j as f64)
}

/// Dither hash in `[0, 1)` for arbitrary real coordinates.
#[inline]
pub fn hash01(x: f64, y: f64) -> f64 {
    TrigHash::DITHER.unit(x, y)
}

/// Fractional part with floor semantics (always in `[0, 1)` for finite input).
#[inline]
pub fn fract(value: f64) -> f64 {
    let f = value - value.floor();
    // `value - floor(value)` rounds up to 1.0 for tiny negative inputs.
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash2_deterministic() {
        for i in -50..50 {
            for j in [-17, 23, 91, 137] {
                assert_eq!(hash2(i, j).to_bits(), hash2(i, j).to_bits());
            }
        }
    }

    #[test]
    fn test_hash2_range() {
        for i in -500..500 {
            for j in -20..20 {
                let v = hash2(i, j);
                assert!((-1.0..1.0).contains(&v), "hash2({}, {}) = {}", i, j, v);
            }
        }
    }

    #[test]
    fn test_hash2_varies() {
        let first = hash2(0, 1);
        assert!((1..20).any(|i| hash2(i, 1) != first));
    }

    #[test]
    fn test_hash01_range() {
        for idx in 0..5000 {
            let v = hash01(idx as f64 + 19.3, 0.37);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_fract() {
        assert_eq!(fract(2.25), 0.25);
        assert_eq!(fract(-0.25), 0.75);
        assert_eq!(fract(-1e-20), 0.0);
        assert_eq!(fract(3.0), 0.0);
    }
}
