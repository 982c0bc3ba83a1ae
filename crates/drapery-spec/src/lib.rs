//! Drapery Pleat Spec Library
//!
//! This crate provides the parameter types shared by the drapery texture
//! backend and CLI: the pleat catalog, per-material pleating presets, and the
//! tunable coefficient tables that drive each pleat-family generator.
//!
//! # Example
//!
//! ```
//! use drapery_spec::{preset_for_material, MaterialFamily, PleatId};
//!
//! let preset = preset_for_material(Some(MaterialFamily::SheerBasic), PleatId::Flex);
//! assert_eq!(preset.tile_width_px, 160);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types and the backend error trait
//! - [`pleat`]: Pleat ids, material families, presets, texture orientation
//! - [`recipe`]: Coefficient tables for the flex, flex 2.5D and placeholder generators
//! - [`validation`]: Reusable parameter validation helpers

pub mod error;
pub mod pleat;
pub mod recipe;
pub mod validation;

pub use error::{BackendError, SpecError};
pub use pleat::{
    apply_overrides, map_pleat_uv, preset_for_material, MaterialFamily, PleatId,
    PleatTextureOrientation, PleatingPreset, PresetOverrides,
};
pub use recipe::{Flex25dParams, PlaceholderParams, PleatFamilyConfig, SampleGridParams};
