//! Drapery CLI library.
//!
//! This crate provides the command implementations behind the `drapery`
//! binary: pleat map generation, live sample-grid inspection and preset
//! lookup.

pub mod commands;
