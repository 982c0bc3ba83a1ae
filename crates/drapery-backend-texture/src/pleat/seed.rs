//! Per-pleat seeds and their memoizing registry.

use std::collections::HashMap;
use std::f64::consts::TAU;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::field::hash2;

/// Parameter bundle for one pleat, derived only from the pleat index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PleatSeed {
    /// Shared phase offset; keeps neighbouring pleats coherent. In `[-0.5, 0.5)`.
    pub offset: f64,
    /// Sweep phase in `[-2π, 2π)`.
    pub phase: f64,
    /// Sweep amplitude in `[0.65, 1.35)`.
    pub amplitude: f64,
    /// Diagonal sweep weight in `[-0.6, 0.6)`.
    pub diagonal_tilt: f64,
    /// Sweep frequency factor in `[0.6, 1.1)`.
    pub wave_tightness: f64,
    /// Per-pleat gather bias in `[-0.2, 0.2)`.
    pub gather_variance: f64,
}

impl PleatSeed {
    /// Derive the seed for a pleat index.
    ///
    /// Each field hashes the index against its own lattice row so the
    /// fields are decorrelated.
    pub fn derive(pleat_index: i64) -> Self {
        Self {
            offset: hash2(pleat_index, 23) * 0.5,
            phase: hash2(pleat_index, -17) * TAU,
            amplitude: 1.0 + hash2(pleat_index, 91) * 0.35,
            diagonal_tilt: hash2(pleat_index, 137) * 0.6,
            wave_tightness: 0.85 + hash2(pleat_index, 211) * 0.25,
            gather_variance: hash2(pleat_index, 311) * 0.2,
        }
    }
}

/// Memoizing cache of pleat seeds keyed by pleat index.
///
/// Safe to share between threads. Two threads racing on the same index both
/// compute the same seed; whichever insert lands first is kept and the other
/// is identical, so callers never observe a difference.
#[derive(Debug, Default)]
pub struct PleatSeedRegistry {
    seeds: RwLock<HashMap<i64, PleatSeed>>,
}

impl PleatSeedRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the seed for a pleat index, deriving and caching it on first use.
    pub fn get(&self, pleat_index: i64) -> PleatSeed {
        if let Some(seed) = self.read().get(&pleat_index) {
            return *seed;
        }

        let seed = PleatSeed::derive(pleat_index);
        *self.write().entry(pleat_index).or_insert(seed)
    }

    /// Number of cached seeds.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no seed has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Drop all cached seeds.
    pub fn clear(&self) {
        self.write().clear();
    }

    // The cache only holds pure values, so a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<i64, PleatSeed>> {
        self.seeds.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<i64, PleatSeed>> {
        self.seeds.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn bits(seed: &PleatSeed) -> [u64; 6] {
        [
            seed.offset.to_bits(),
            seed.phase.to_bits(),
            seed.amplitude.to_bits(),
            seed.diagonal_tilt.to_bits(),
            seed.wave_tightness.to_bits(),
            seed.gather_variance.to_bits(),
        ]
    }

    #[test]
    fn test_seed_bit_identical_across_calls() {
        let registry = PleatSeedRegistry::new();
        for i in -10..40 {
            assert_eq!(bits(&registry.get(i)), bits(&registry.get(i)));
            assert_eq!(bits(&registry.get(i)), bits(&PleatSeed::derive(i)));
        }
    }

    #[test]
    fn test_registry_order_independence() {
        let direct = PleatSeedRegistry::new().get(5);

        let registry = PleatSeedRegistry::new();
        let first = registry.get(5);
        for i in 1..5 {
            registry.get(i);
        }
        let second = registry.get(5);

        assert_eq!(bits(&first), bits(&direct));
        assert_eq!(bits(&second), bits(&direct));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_seed_field_ranges() {
        for i in 0..500 {
            let s = PleatSeed::derive(i);
            assert!((-0.5..0.5).contains(&s.offset));
            assert!((-TAU..TAU).contains(&s.phase));
            assert!((0.65..1.35).contains(&s.amplitude));
            assert!((-0.6..0.6).contains(&s.diagonal_tilt));
            assert!((0.6..1.1).contains(&s.wave_tightness));
            assert!((-0.2..0.2).contains(&s.gather_variance));
        }
    }

    #[test]
    fn test_fields_are_decorrelated() {
        let s = PleatSeed::derive(7);
        assert_ne!(s.offset / 0.5, s.gather_variance / 0.2);
        assert_ne!(s.diagonal_tilt / 0.6, s.offset / 0.5);
    }

    #[test]
    fn test_concurrent_access_agrees() {
        let registry = Arc::new(PleatSeedRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || (0..64).map(|i| bits(&registry.get(i))).collect::<Vec<_>>())
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for r in &results[1..] {
            assert_eq!(r, &results[0]);
        }
        assert_eq!(registry.len(), 64);
    }

    #[test]
    fn test_clear() {
        let registry = PleatSeedRegistry::new();
        registry.get(3);
        assert!(!registry.is_empty());
        registry.clear();
        assert!(registry.is_empty());
    }
}
