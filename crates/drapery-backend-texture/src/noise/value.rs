//! 2D value noise over the lattice hash.

use super::{lerp, quintic, Noise2D};
use crate::field::hash2;

/// Value noise: bilinear blend of lattice hashes with a quintic fade.
///
/// Output lies in `[-1, 1]` because it is a convex blend of hash values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueNoise;

impl Noise2D for ValueNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let fx0 = x.floor();
        let fy0 = y.floor();
        let ix = fx0 as i64;
        let iy = fy0 as i64;
        let fx = x - fx0;
        let fy = y - fy0;

        let v00 = hash2(ix, iy);
        let v10 = hash2(ix + 1, iy);
        let v01 = hash2(ix, iy + 1);
        let v11 = hash2(ix + 1, iy + 1);

        let wx = quintic(fx);
        let wy = quintic(fy);

        let xa = lerp(v00, v10, wx);
        let xb = lerp(v01, v11, wx);
        lerp(xa, xb, wy)
    }
}
