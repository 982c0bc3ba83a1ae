//! Fractal Brownian Motion (FBM) noise.
//!
//! FBM layers multiple octaves of noise to create natural-looking patterns.

use super::Noise2D;

/// Fractal Brownian Motion generator.
///
/// Combines multiple octaves of a base noise function. The sum is not
/// normalized: with the default settings it stays roughly within `[-1, 1]`
/// but callers clamp downstream rather than rely on exact bounds.
#[derive(Debug, Clone)]
pub struct Fbm<N: Noise2D> {
    /// The base noise function.
    noise: N,
    /// Number of octaves to combine.
    octaves: u8,
    /// Amplitude of the first octave.
    amplitude: f64,
    /// Amplitude multiplier per octave.
    persistence: f64,
    /// Frequency multiplier per octave.
    lacunarity: f64,
}

impl<N: Noise2D> Fbm<N> {
    /// Create a new FBM generator with default settings.
    ///
    /// Default: 3 octaves, 0.6 starting amplitude, 0.55 persistence, 2.0 lacunarity.
    pub const fn new(noise: N) -> Self {
        Self {
            noise,
            octaves: 3,
            amplitude: 0.6,
            persistence: 0.55,
            lacunarity: 2.0,
        }
    }

    /// Set the number of octaves.
    pub fn with_octaves(mut self, octaves: u8) -> Self {
        self.octaves = octaves.max(1);
        self
    }

    /// Set the amplitude of the first octave.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }
}

impl<N: Noise2D> Noise2D for Fbm<N> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = self.amplitude;
        let mut frequency = 1.0;

        for _ in 0..self.octaves {
            total += self.noise.sample(x * frequency, y * frequency) * amplitude;
            frequency *= self.lacunarity;
            amplitude *= self.persistence;
        }

        total
    }
}
