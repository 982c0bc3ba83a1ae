//! CLI command implementations

pub mod generate;
pub mod generate_all;
pub mod preset;
pub mod sample;

mod reporting;
