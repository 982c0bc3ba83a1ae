//! Tangent-space normal maps from height fields.

use crate::color::Color;
use crate::maps::{GrayscaleBuffer, TextureBuffer};

/// How neighbour lookups behave past the edge of the height buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Tileable axis: neighbours wrap around.
    Wrap,
    /// Open axis: neighbours clamp to the edge pixel.
    Clamp,
}

impl BoundaryMode {
    /// Map a possibly out-of-range index onto `0..len`.
    #[inline]
    pub fn resolve(self, index: i64, len: u32) -> u32 {
        let len = len as i64;
        let resolved = match self {
            BoundaryMode::Wrap => index.rem_euclid(len),
            BoundaryMode::Clamp => index.clamp(0, len - 1),
        };
        resolved as u32
    }
}

/// Which normal component points out of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalLayout {
    /// `(-dh/dx, 1, -dh/dy)`, the flex model's convention.
    YUp,
    /// `(-dh/dx, -dh/dy, 1)`, the usual tangent-space convention.
    ZUp,
}

/// Derives normals by central differences with per-axis strength.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalMapDeriver {
    /// Multiplier for the horizontal difference `h(x+1) - h(x-1)`.
    pub strength_x: f64,
    /// Multiplier for the vertical difference `h(y+1) - h(y-1)`.
    pub strength_y: f64,
    pub boundary_x: BoundaryMode,
    pub boundary_y: BoundaryMode,
    pub layout: NormalLayout,
}

impl NormalMapDeriver {
    /// Create a deriver with the given axis strengths, clamped edges and Z-up layout.
    pub fn new(strength_x: f64, strength_y: f64) -> Self {
        Self {
            strength_x,
            strength_y,
            boundary_x: BoundaryMode::Clamp,
            boundary_y: BoundaryMode::Clamp,
            layout: NormalLayout::ZUp,
        }
    }

    /// Set the boundary behaviour of each axis.
    pub fn with_boundaries(mut self, x: BoundaryMode, y: BoundaryMode) -> Self {
        self.boundary_x = x;
        self.boundary_y = y;
        self
    }

    pub fn with_layout(mut self, layout: NormalLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Derive a normal map; alpha is opaque.
    pub fn derive(&self, heights: &GrayscaleBuffer) -> TextureBuffer {
        self.derive_with_row_gain(heights, |_| 1.0)
    }

    /// Derive a normal map with an extra gradient gain per row.
    pub fn derive_with_row_gain(
        &self,
        heights: &GrayscaleBuffer,
        row_gain: impl Fn(u32) -> f64,
    ) -> TextureBuffer {
        let width = heights.width;
        let height = heights.height;
        let mut buffer = TextureBuffer::new(width, height, Color::black());

        for y in 0..height {
            let gain = row_gain(y);
            for x in 0..width {
                let (xi, yi) = (x as i64, y as i64);
                let dhdx = (self.lookup(heights, xi + 1, yi) - self.lookup(heights, xi - 1, yi))
                    * self.strength_x
                    * gain;
                let dhdy = (self.lookup(heights, xi, yi + 1) - self.lookup(heights, xi, yi - 1))
                    * self.strength_y
                    * gain;

                buffer.set(x, y, self.encode(dhdx, dhdy));
            }
        }

        buffer
    }

    fn lookup(&self, heights: &GrayscaleBuffer, x: i64, y: i64) -> f64 {
        heights.get(
            self.boundary_x.resolve(x, heights.width),
            self.boundary_y.resolve(y, heights.height),
        )
    }

    fn encode(&self, dhdx: f64, dhdy: f64) -> Color {
        let (nx, ny, nz) = match self.layout {
            NormalLayout::YUp => (-dhdx, 1.0, -dhdy),
            NormalLayout::ZUp => (-dhdx, -dhdy, 1.0),
        };
        // The up component is 1, so the length is never below 1.
        let inv_len = 1.0 / (nx * nx + ny * ny + nz * nz).sqrt();
        Color::from_normal(nx * inv_len, ny * inv_len, nz * inv_len)
    }
}
