//! Drapery Pleat Texture Backend
//!
//! This crate synthesizes the surface attributes of curtain pleats: tone
//! ramp, ambient occlusion, sheer translucency and a tangent-space normal
//! map. All output is bit-identical for identical parameters; there is no
//! seed state and no wall-clock or external entropy anywhere in the core.
//!
//! # Features
//!
//! - **Live sampling**: per-pixel `(pleat_coord, cross_axis)` pairs with
//!   seeded lateral jitter and header gather, as a point query or a full grid
//! - **Flex height field**: parametric header pinch, diagonal arms, belly
//!   bloom and valley shadow
//! - **Normal maps**: central differences with per-axis wrap/clamp boundaries
//! - **Deterministic PNG**: fixed compression settings and BLAKE3 hashes
//!
//! # Example
//!
//! ```no_run
//! use drapery_backend_texture::generate::{generate_flex_maps, save_pleat_maps};
//! use drapery_spec::PleatFamilyConfig;
//! use std::path::Path;
//!
//! let maps = generate_flex_maps(&PleatFamilyConfig::flex()).unwrap();
//! save_pleat_maps(&maps, Path::new("public/textures/canvas")).unwrap();
//! ```
//!
//! Live sampling:
//!
//! ```
//! use drapery_backend_texture::pleat::{build_sample_grid, sample_point, PleatSeedRegistry};
//! use drapery_spec::SampleGridParams;
//!
//! let registry = PleatSeedRegistry::new();
//! let params = SampleGridParams::new(64, 32, 16.0).with_jitter(0.4).with_taper(0.6);
//! let grid = build_sample_grid(&registry, &params).unwrap();
//! let point = sample_point(&registry, 10, 5, &params);
//! assert_eq!(grid.get(10, 5), point);
//! ```

pub mod color;
pub mod field;
pub mod flex;
pub mod flex25d;
pub mod generate;
pub mod maps;
pub mod noise;
pub mod normal_map;
pub mod placeholder;
pub mod pleat;
pub mod png;

// Re-export main types for convenience
pub use color::Color;
pub use flex::{FlexBuffers, FlexHeightField, HeightFieldSample};
pub use flex25d::{Flex25dBuffers, Flex25dSample, Flex25dSynthesizer};
pub use generate::{
    generate_flex25d_maps, generate_flex_maps, generate_placeholder_maps, save_all_parallel,
    save_pleat_maps, GenerateError, MapChannel, MapResult, PleatMapSet, PLACEHOLDER_DIR,
};
pub use maps::{GrayscaleBuffer, TextureBuffer};
pub use noise::{Fbm, Noise2D, ValueNoise};
pub use normal_map::{BoundaryMode, NormalLayout, NormalMapDeriver};
pub use placeholder::{generate_placeholders, PlaceholderMaps};
pub use pleat::{
    build_sample_grid, sample_point, wrap01, PleatSample, PleatSampler, PleatSeed,
    PleatSeedRegistry, SampleGrid,
};
pub use png::{MapEncoding, PngConfig, PngError};
